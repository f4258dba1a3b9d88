//! Document conversion: the composed classify, transform, render pipeline.
//!
//! A [`Converter`] owns the font resolver, the style sheet, and the render
//! options, and converts one document per call. The batch helpers
//! enumerate a source directory and derive output paths the way the CLI
//! driver does.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fonts::FontResolver;
use crate::model::StyleSheet;
use crate::parser::transform;
use crate::render::{self, RenderOptions};

/// Markdown to PDF converter.
///
/// Construct one converter per process and reuse it: the font resolution
/// result is cached inside the resolver, so only the first conversion pays
/// for the font probe.
#[derive(Debug, Default)]
pub struct Converter {
    resolver: FontResolver,
    styles: StyleSheet,
    options: RenderOptions,
}

impl Converter {
    /// Create a converter with default fonts, styles, and options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set the font resolver.
    pub fn with_resolver(mut self, resolver: FontResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Convert one Markdown file to a PDF file.
    ///
    /// The document title defaults to the input file stem unless the
    /// render options carry an explicit title. The output's parent
    /// directory is created if absent.
    pub fn convert_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let input = input.as_ref();
        let text = fs::read_to_string(input)?;
        let title = match &self.options.title {
            Some(title) => title.clone(),
            None => input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        self.convert_str(&text, &title, output)
    }

    /// Convert Markdown source text to a PDF file with the given title.
    pub fn convert_str(&self, text: &str, title: &str, output: impl AsRef<Path>) -> Result<()> {
        let output = output.as_ref();
        let blocks = transform(text);
        log::debug!("transformed {} blocks for {title}", blocks.len());

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let fonts = self.resolver.resolve()?;
        let options = self.options.clone().with_title(title);
        render::to_pdf_file(&blocks, fonts, &self.styles, &options, output)
    }
}

/// Enumerate Markdown files in a directory, non-recursively.
///
/// The extension match is case-insensitive and results are sorted for a
/// deterministic batch order. A missing source directory yields an empty
/// list rather than an error.
pub fn find_markdown_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_markdown = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if is_markdown {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output path for an input document: same stem, `.pdf` extension, placed
/// in `out_dir`.
pub fn output_path_for(input: &Path, out_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".pdf");
    out_dir.join(name)
}
