//! Visual style attributes for block rendering.

use serde::{Deserialize, Serialize};

use super::HeadingLevel;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left-aligned text
    #[default]
    Left,
    /// Centered text
    Center,
    /// Right-aligned text
    Right,
}

/// Visual attributes for one block kind.
///
/// `leading` and `space_after` are expressed in points, matching the
/// conventions of page layout engines (1 pt = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    /// Font size in points
    pub font_size: u8,

    /// Baseline-to-baseline distance in points
    pub leading: f64,

    /// Extra vertical space after the block, in points
    pub space_after: f64,

    /// Horizontal alignment
    pub alignment: Alignment,
}

impl BlockStyle {
    /// Create a block style with no trailing space.
    pub fn new(font_size: u8, leading: f64) -> Self {
        Self {
            font_size,
            leading,
            space_after: 0.0,
            alignment: Alignment::Left,
        }
    }

    /// Set the trailing space in points.
    pub fn with_space_after(mut self, points: f64) -> Self {
        self.space_after = points;
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Line spacing as a multiple of the font size.
    pub fn line_spacing(&self) -> f64 {
        self.leading / f64::from(self.font_size)
    }
}

/// The set of named styles used by the renderer.
///
/// Heading styles derive their font family from the resolved body family;
/// the code style always uses the resolved monospace family. Families are
/// bound at render time, so the sheet itself stays font-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Plain paragraphs and list items
    pub normal: BlockStyle,
    /// Level-1 headings
    pub h1: BlockStyle,
    /// Level-2 headings
    pub h2: BlockStyle,
    /// Level-3 headings
    pub h3: BlockStyle,
    /// Fenced code blocks and verbatim table rows
    pub code: BlockStyle,
}

impl StyleSheet {
    /// Style for a heading of the given level.
    pub fn heading(&self, level: HeadingLevel) -> &BlockStyle {
        match level {
            HeadingLevel::H1 => &self.h1,
            HeadingLevel::H2 => &self.h2,
            HeadingLevel::H3 => &self.h3,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            normal: BlockStyle::new(11, 15.0),
            h1: BlockStyle::new(18, 22.0).with_space_after(8.0),
            h2: BlockStyle::new(16, 20.0).with_space_after(6.0),
            h3: BlockStyle::new(14, 18.0).with_space_after(4.0),
            code: BlockStyle::new(9, 12.0),
        }
    }
}
