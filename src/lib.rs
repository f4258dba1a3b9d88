//! # mdpress
//!
//! Markdown to paginated PDF conversion for Rust.
//!
//! mdpress reads a small, fixed subset of Markdown (headings levels 1-3,
//! bullet lists, fenced code blocks, verbatim pipe tables, and plain
//! paragraphs), classifies the document line by line, and hands the
//! resulting block sequence to the [`genpdf`] layout engine, which
//! paginates the content and writes the PDF bytes. Fonts are resolved
//! from the system with CJK-capable candidates first, so non-Latin
//! scripts render wherever such fonts are installed.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> mdpress::Result<()> {
//!     mdpress::convert_file("docs/guide.md", "dist/pdf/guide.pdf")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Batch conversion
//!
//! ```no_run
//! use std::path::Path;
//!
//! use mdpress::{find_markdown_files, output_path_for, Converter};
//!
//! fn main() -> mdpress::Result<()> {
//!     let converter = Converter::new();
//!     for input in find_markdown_files("docs")? {
//!         let output = output_path_for(&input, Path::new("dist/pdf"));
//!         converter.convert_file(&input, &output)?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Inspecting the block sequence
//!
//! The intermediate representation is public, and classification is a
//! pure function of the input text:
//!
//! ```
//! use mdpress::{transform, Block, HeadingLevel};
//!
//! let blocks = transform("# Title\n- a\n- b\n");
//! assert_eq!(blocks[0], Block::heading(HeadingLevel::H1, "Title"));
//! assert_eq!(blocks[1], Block::list(vec!["a".into(), "b".into()]));
//! ```

pub mod convert;
pub mod error;
pub mod fonts;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{find_markdown_files, output_path_for, Converter};
pub use error::{Error, Result};
pub use fonts::{FontResolver, ResolvedFonts};
pub use model::{Alignment, Block, BlockStyle, HeadingLevel, StyleSheet};
pub use parser::{classify, strip_bom, transform, LineKind, Mode, Transformer};
pub use render::{PaperSize, PdfRenderer, RenderOptions};

use std::path::Path;

/// Convert one Markdown file to a PDF file with default settings.
///
/// Equivalent to `Converter::new().convert_file(input, output)`; prefer a
/// shared [`Converter`] when converting many documents so the font probe
/// runs once.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    Converter::new().convert_file(input, output)
}

/// Serialize a block sequence as pretty-printed JSON.
///
/// Useful for debugging classification and for tooling built on top of
/// the intermediate representation.
pub fn blocks_to_json(blocks: &[Block]) -> Result<String> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_to_json_tags_variants() {
        let blocks = transform("# Title\n\ntext\n");
        let json = blocks_to_json(&blocks).unwrap();
        assert!(json.contains("\"heading\""));
        assert!(json.contains("\"spacer\""));
        assert!(json.contains("\"paragraph\""));
    }

    #[test]
    fn test_transform_reexport_matches_module_path() {
        let input = "- one\n- two\n";
        assert_eq!(transform(input), parser::transform(input));
    }
}
