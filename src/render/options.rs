//! Rendering options and configuration.

use serde::{Deserialize, Serialize};

/// Output page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    /// ISO A4 (210 x 297 mm)
    #[default]
    A4,
    /// US Letter (8.5 x 11 in)
    Letter,
    /// US Legal (8.5 x 14 in)
    Legal,
}

impl From<PaperSize> for genpdf::PaperSize {
    fn from(size: PaperSize) -> Self {
        match size {
            PaperSize::A4 => genpdf::PaperSize::A4,
            PaperSize::Letter => genpdf::PaperSize::Letter,
            PaperSize::Legal => genpdf::PaperSize::Legal,
        }
    }
}

/// Options for rendering a block sequence to a PDF document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page size
    pub paper_size: PaperSize,

    /// Uniform page margin in millimeters, applied to all four sides
    pub margin_mm: f64,

    /// Document title; the converter defaults this to the input file stem
    pub title: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_paper_size(mut self, size: PaperSize) -> Self {
        self.paper_size = size;
        self
    }

    /// Set the uniform page margin in millimeters.
    pub fn with_margin_mm(mut self, margin: f64) -> Self {
        self.margin_mm = margin;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            margin_mm: 18.0,
            title: None,
        }
    }
}
