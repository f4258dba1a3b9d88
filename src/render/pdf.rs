//! PDF emission through the genpdf layout engine.
//!
//! The renderer walks a block sequence in order and pushes one engine
//! element per block; the engine owns pagination, font metrics, and the
//! final PDF bytes.

use std::path::Path;

use genpdf::elements::{Break, LinearLayout, Paragraph, UnorderedList};
use genpdf::style::Style;
use genpdf::{Margins, SimplePageDecorator};

use crate::error::Result;
use crate::fonts::ResolvedFonts;
use crate::model::{Alignment, Block, BlockStyle, StyleSheet};

use super::RenderOptions;

/// Vertical space emitted for one spacer block, in points.
const SPACER_PTS: f64 = 6.0;

/// Render a block sequence to a PDF file.
pub fn to_pdf_file(
    blocks: &[Block],
    fonts: &ResolvedFonts,
    styles: &StyleSheet,
    options: &RenderOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    PdfRenderer::new(fonts, styles, options).render_to_file(blocks, path)
}

/// PDF renderer over resolved fonts and a style sheet.
pub struct PdfRenderer<'a> {
    fonts: &'a ResolvedFonts,
    styles: &'a StyleSheet,
    options: &'a RenderOptions,
}

impl<'a> PdfRenderer<'a> {
    /// Create a renderer.
    pub fn new(fonts: &'a ResolvedFonts, styles: &'a StyleSheet, options: &'a RenderOptions) -> Self {
        Self {
            fonts,
            styles,
            options,
        }
    }

    /// Build the document and write it to `path`.
    pub fn render_to_file(&self, blocks: &[Block], path: impl AsRef<Path>) -> Result<()> {
        let doc = self.build_document(blocks);
        doc.render_to_file(path)?;
        Ok(())
    }

    fn build_document(&self, blocks: &[Block]) -> genpdf::Document {
        let mut doc = genpdf::Document::new(self.fonts.body.clone());
        doc.set_paper_size(genpdf::PaperSize::from(self.options.paper_size));
        doc.set_font_size(self.styles.normal.font_size);
        if let Some(title) = &self.options.title {
            doc.set_title(title.clone());
        }

        let mut decorator = SimplePageDecorator::new();
        let margin = self.options.margin_mm;
        decorator.set_margins(Margins::trbl(margin, margin, margin, margin));
        doc.set_page_decorator(decorator);

        let mono = doc.add_font_family(self.fonts.mono.clone());

        // Break heights scale with the document default style, which is the
        // normal font size at single spacing.
        let line_pts = f64::from(self.styles.normal.font_size);

        for block in blocks {
            match block {
                Block::Heading { level, text } => {
                    let style = self.styles.heading(*level);
                    doc.push(paragraph(text, style, text_style(style)));
                    if style.space_after > 0.0 {
                        doc.push(Break::new(style.space_after / line_pts));
                    }
                }
                Block::Paragraph { text } => {
                    let style = &self.styles.normal;
                    doc.push(paragraph(text, style, text_style(style)));
                }
                Block::List { items } => {
                    let style = &self.styles.normal;
                    let mut list = UnorderedList::new();
                    for item in items {
                        list.push(paragraph(item, style, text_style(style)));
                    }
                    doc.push(list);
                }
                Block::Preformatted { text } => {
                    let style = &self.styles.code;
                    let engine_style = text_style(style).with_font_family(mono.clone());
                    let mut layout = LinearLayout::vertical();
                    for line in text.split('\n') {
                        layout.push(paragraph(line, style, engine_style.clone()));
                    }
                    doc.push(layout);
                }
                Block::Spacer => {
                    doc.push(Break::new(SPACER_PTS / line_pts));
                }
            }
        }

        doc
    }
}

/// Map a block style to an engine text style.
fn text_style(style: &BlockStyle) -> Style {
    Style::new()
        .with_font_size(style.font_size)
        .with_line_spacing(style.line_spacing())
}

/// Build a one-string paragraph element with explicit style and alignment.
fn paragraph(text: &str, block_style: &BlockStyle, engine_style: Style) -> Paragraph {
    let mut para = Paragraph::default();
    para.push_styled(text, engine_style);
    match block_style.alignment {
        Alignment::Left => {}
        Alignment::Center => para.set_alignment(genpdf::Alignment::Center),
        Alignment::Right => para.set_alignment(genpdf::Alignment::Right),
    }
    para
}
