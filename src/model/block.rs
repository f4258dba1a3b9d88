//! Block-level types.

use serde::{Deserialize, Serialize};

/// Heading level of a heading block.
///
/// Only the first three levels are recognized; deeper markers classify as
/// ordinary paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    /// Top-level heading (`# `)
    H1,
    /// Second-level heading (`## `)
    H2,
    /// Third-level heading (`### `)
    H3,
}

impl HeadingLevel {
    /// Numeric level (1-3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// One rendering instruction in the output block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading with one of three levels.
    Heading {
        /// Heading level
        level: HeadingLevel,
        /// Heading text (content after the marker)
        text: String,
    },

    /// A plain paragraph of flowing text.
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// A grouped bulleted list.
    List {
        /// List item texts, in accumulation order
        items: Vec<String>,
    },

    /// Preformatted monospace content: a fenced code block or a verbatim
    /// table row. Lines are joined with `\n`; leading whitespace is
    /// preserved.
    Preformatted {
        /// Raw content
        text: String,
    },

    /// Vertical spacing between blocks.
    Spacer,
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a bulleted list block.
    pub fn list(items: Vec<String>) -> Self {
        Block::List { items }
    }

    /// Create a preformatted block.
    pub fn preformatted(text: impl Into<String>) -> Self {
        Block::Preformatted { text: text.into() }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is a spacer.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Block::Spacer)
    }

    /// Plain text carried by this block, without markup or grouping.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text } => text.clone(),
            Block::List { items } => items.join("\n"),
            Block::Preformatted { text } => text.clone(),
            Block::Spacer => String::new(),
        }
    }
}
