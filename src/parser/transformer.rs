//! Line-to-block transformation.

use std::mem;

use crate::model::Block;

use super::{classify, strip_bom, LineKind, Mode};

/// Convert a Markdown document to its block sequence.
///
/// Pure function of the input text: the same input always yields the same
/// sequence, independent of font availability or any other process state.
pub fn transform(input: &str) -> Vec<Block> {
    let mut transformer = Transformer::new();
    for line in input.lines() {
        transformer.push_line(line);
    }
    transformer.finish()
}

/// State machine folding classified lines into blocks.
///
/// Carries the current mode, the code-line accumulator, and the bullet
/// accumulator explicitly. Bullets accumulate until a non-bullet line, a
/// blank line, or the end of input flushes them as one grouped list block.
#[derive(Debug, Default)]
pub struct Transformer {
    mode: Mode,
    code: Vec<String>,
    bullets: Vec<String>,
    blocks: Vec<Block>,
}

impl Transformer {
    /// Create an empty transformer in normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one physical line (without its trailing newline).
    pub fn push_line(&mut self, raw: &str) {
        let line = strip_bom(raw);
        match classify(self.mode, line) {
            LineKind::Fence => match self.mode {
                Mode::Normal => {
                    self.flush_bullets();
                    self.code.clear();
                    self.mode = Mode::InCode;
                }
                Mode::InCode => {
                    let code = mem::take(&mut self.code);
                    self.blocks.push(Block::preformatted(code.join("\n")));
                    self.blocks.push(Block::Spacer);
                    self.mode = Mode::Normal;
                }
            },
            LineKind::CodeLine(code) => self.code.push(code.to_owned()),
            LineKind::Blank => {
                self.flush_bullets();
                self.blocks.push(Block::Spacer);
            }
            LineKind::Heading(level, text) => {
                self.flush_bullets();
                self.blocks.push(Block::heading(level, text));
            }
            LineKind::Bullet(item) => self.bullets.push(item.to_owned()),
            LineKind::TableRow(row) => {
                self.flush_bullets();
                self.blocks.push(Block::preformatted(row));
            }
            LineKind::Text(text) => {
                self.flush_bullets();
                self.blocks.push(Block::paragraph(text.trim()));
            }
        }
    }

    /// Finish the document and return the block sequence.
    ///
    /// Performs the final bullet flush. Content of a still-open fenced
    /// block is discarded.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_bullets();
        self.blocks
    }

    fn flush_bullets(&mut self) {
        if self.bullets.is_empty() {
            return;
        }
        let items = mem::take(&mut self.bullets);
        self.blocks.push(Block::list(items));
        self.blocks.push(Block::Spacer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    #[test]
    fn test_headings_in_order() {
        let blocks = transform("# One\n## Two\n### Three\n");
        assert_eq!(
            blocks,
            vec![
                Block::heading(HeadingLevel::H1, "One"),
                Block::heading(HeadingLevel::H2, "Two"),
                Block::heading(HeadingLevel::H3, "Three"),
            ]
        );
    }

    #[test]
    fn test_mixed_document() {
        let input = "# Title\n\nHello world\n- a\n- b\n\n```\ncode here\n```\n";
        let blocks = transform(input);
        assert_eq!(
            blocks,
            vec![
                Block::heading(HeadingLevel::H1, "Title"),
                Block::Spacer,
                Block::paragraph("Hello world"),
                Block::list(vec!["a".into(), "b".into()]),
                Block::Spacer,
                Block::Spacer,
                Block::preformatted("code here"),
                Block::Spacer,
            ]
        );
    }

    #[test]
    fn test_bullet_run_groups_into_one_list() {
        let blocks = transform("- a\n* b\n- c\nafter\n");
        assert_eq!(
            blocks,
            vec![
                Block::list(vec!["a".into(), "b".into(), "c".into()]),
                Block::Spacer,
                Block::paragraph("after"),
            ]
        );
    }

    #[test]
    fn test_bullets_flush_at_end_of_input() {
        let blocks = transform("- a\n- b");
        assert_eq!(
            blocks,
            vec![Block::list(vec!["a".into(), "b".into()]), Block::Spacer]
        );
    }

    #[test]
    fn test_blank_line_splits_bullet_runs() {
        let blocks = transform("- a\n\n- b\n");
        assert_eq!(
            blocks,
            vec![
                Block::list(vec!["a".into()]),
                Block::Spacer,
                Block::Spacer,
                Block::list(vec!["b".into()]),
                Block::Spacer,
            ]
        );
    }

    #[test]
    fn test_heading_closes_bullet_run() {
        let blocks = transform("- a\n# Next\n");
        assert_eq!(
            blocks,
            vec![
                Block::list(vec!["a".into()]),
                Block::Spacer,
                Block::heading(HeadingLevel::H1, "Next"),
            ]
        );
    }

    #[test]
    fn test_fence_preserves_content_verbatim() {
        let input = "```\n# not a heading\n- not a bullet\n  indented\n```\n";
        let blocks = transform(input);
        assert_eq!(
            blocks,
            vec![
                Block::preformatted("# not a heading\n- not a bullet\n  indented"),
                Block::Spacer,
            ]
        );
    }

    #[test]
    fn test_empty_fenced_block() {
        let blocks = transform("```\n```\n");
        assert_eq!(blocks, vec![Block::preformatted(""), Block::Spacer]);
    }

    #[test]
    fn test_unterminated_fence_discards_content() {
        let blocks = transform("before\n```\ndangling\n");
        assert_eq!(blocks, vec![Block::paragraph("before")]);
    }

    #[test]
    fn test_consecutive_fences_restart_accumulator() {
        let blocks = transform("```\nfirst\n```\n```\nsecond\n```\n");
        assert_eq!(
            blocks,
            vec![
                Block::preformatted("first"),
                Block::Spacer,
                Block::preformatted("second"),
                Block::Spacer,
            ]
        );
    }

    #[test]
    fn test_table_row_kept_unstripped() {
        let blocks = transform("  | a | b |\n");
        assert_eq!(blocks, vec![Block::preformatted("  | a | b |")]);
    }

    #[test]
    fn test_whitespace_only_line_becomes_empty_paragraph() {
        let blocks = transform("   \n");
        assert_eq!(blocks, vec![Block::paragraph("")]);
    }

    #[test]
    fn test_bom_stripped_per_line() {
        let blocks = transform("\u{feff}# Title\n\u{feff}- item\n");
        assert_eq!(
            blocks,
            vec![
                Block::heading(HeadingLevel::H1, "Title"),
                Block::list(vec!["item".into()]),
                Block::Spacer,
            ]
        );
    }

    #[test]
    fn test_transform_is_deterministic() {
        let input = "# Title\n- a\n| x | y |\n\ntext\n";
        assert_eq!(transform(input), transform(input));
    }
}
