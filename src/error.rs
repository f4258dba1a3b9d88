//! Error types for the mdpress library.

use std::io;
use thiserror::Error;

/// Result type alias for mdpress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during Markdown to PDF conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input documents or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No usable font could be resolved for the document body.
    #[error("Font resolution error: {0}")]
    Font(String),

    /// Error raised by the page layout engine while building the PDF.
    #[error("PDF generation error: {0}")]
    Pdf(#[from] genpdf::error::Error),

    /// Error serializing a block sequence to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
