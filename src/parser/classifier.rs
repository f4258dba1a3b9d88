//! Line classification.

use crate::model::HeadingLevel;

/// Transformer mode. Inside a fenced block every non-fence line is raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Regular line classification
    #[default]
    Normal,
    /// Between an opening and closing fence
    InCode,
}

/// Classification of one input line.
///
/// Variants borrow from the input line; the payload is the content that a
/// block built from this line would carry (e.g. the text after a heading
/// marker).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A triple-backtick fence marker, toggling code mode
    Fence,
    /// A raw line inside a fenced block
    CodeLine(&'a str),
    /// An empty line
    Blank,
    /// A heading with its level and the text after the marker
    Heading(HeadingLevel, &'a str),
    /// A bullet item with the text after the two-character marker
    Bullet(&'a str),
    /// A table-like line, kept verbatim
    TableRow(&'a str),
    /// Anything else: plain paragraph text
    Text(&'a str),
}

/// Strip a leading byte-order mark, if present.
///
/// Applied to every line independently, not just the first one of a
/// document.
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

/// Classify one line under the given mode.
///
/// This is a pure function: emission (bullet flushes, spacers) is handled
/// by the transformer. The caller is expected to strip the BOM first.
///
/// Priority order: fence, code line, blank, heading, bullet, table row,
/// paragraph text.
pub fn classify(mode: Mode, line: &str) -> LineKind<'_> {
    if line.starts_with("```") {
        return LineKind::Fence;
    }
    if mode == Mode::InCode {
        return LineKind::CodeLine(line);
    }
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(text) = line.strip_prefix("# ") {
        return LineKind::Heading(HeadingLevel::H1, text);
    }
    if let Some(text) = line.strip_prefix("## ") {
        return LineKind::Heading(HeadingLevel::H2, text);
    }
    if let Some(text) = line.strip_prefix("### ") {
        return LineKind::Heading(HeadingLevel::H3, text);
    }
    if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return LineKind::Bullet(item);
    }
    if is_table_like(line) {
        return LineKind::TableRow(line);
    }
    LineKind::Text(line)
}

/// Table heuristic: a pipe plus either a `---` separator or a second pipe.
///
/// Deliberately loose; prose containing two pipe characters classifies as
/// a table row as well.
fn is_table_like(line: &str) -> bool {
    line.contains('|') && (line.contains("---") || line.matches('|').count() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_detection() {
        assert_eq!(classify(Mode::Normal, "```"), LineKind::Fence);
        assert_eq!(classify(Mode::Normal, "```rust"), LineKind::Fence);
        // A fence closes code mode even from inside it
        assert_eq!(classify(Mode::InCode, "```"), LineKind::Fence);
    }

    #[test]
    fn test_code_mode_suppresses_classification() {
        assert_eq!(classify(Mode::InCode, "# not a heading"), LineKind::CodeLine("# not a heading"));
        assert_eq!(classify(Mode::InCode, "- not a bullet"), LineKind::CodeLine("- not a bullet"));
        assert_eq!(classify(Mode::InCode, ""), LineKind::CodeLine(""));
        assert_eq!(
            classify(Mode::InCode, "  indented | a | b |"),
            LineKind::CodeLine("  indented | a | b |")
        );
    }

    #[test]
    fn test_blank_is_empty_only() {
        assert_eq!(classify(Mode::Normal, ""), LineKind::Blank);
        // Whitespace-only lines are not blank; they fall through to text
        assert_eq!(classify(Mode::Normal, "   "), LineKind::Text("   "));
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            classify(Mode::Normal, "# Title"),
            LineKind::Heading(HeadingLevel::H1, "Title")
        );
        assert_eq!(
            classify(Mode::Normal, "## Section"),
            LineKind::Heading(HeadingLevel::H2, "Section")
        );
        assert_eq!(
            classify(Mode::Normal, "### Subsection"),
            LineKind::Heading(HeadingLevel::H3, "Subsection")
        );
    }

    #[test]
    fn test_heading_requires_space() {
        assert_eq!(classify(Mode::Normal, "#Title"), LineKind::Text("#Title"));
        // Level 4 is outside the recognized subset
        assert_eq!(classify(Mode::Normal, "#### Deep"), LineKind::Text("#### Deep"));
    }

    #[test]
    fn test_bullet_markers() {
        assert_eq!(classify(Mode::Normal, "- item"), LineKind::Bullet("item"));
        assert_eq!(classify(Mode::Normal, "* item"), LineKind::Bullet("item"));
        assert_eq!(classify(Mode::Normal, "-item"), LineKind::Text("-item"));
    }

    #[test]
    fn test_table_heuristic() {
        // Two pipes, no separator
        assert_eq!(classify(Mode::Normal, "| a | b |"), LineKind::TableRow("| a | b |"));
        // Separator row with a single pipe
        assert_eq!(classify(Mode::Normal, "--- |"), LineKind::TableRow("--- |"));
        // A single pipe and no separator is plain text
        assert_eq!(classify(Mode::Normal, "a | b"), LineKind::Text("a | b"));
        // Prose with two pipes classifies as a table row
        assert_eq!(
            classify(Mode::Normal, "either |x| or |y| works"),
            LineKind::TableRow("either |x| or |y| works")
        );
    }

    #[test]
    fn test_priority_heading_over_table() {
        assert_eq!(
            classify(Mode::Normal, "# a | b | c"),
            LineKind::Heading(HeadingLevel::H1, "a | b | c")
        );
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}# Title"), "# Title");
        assert_eq!(strip_bom("# Title"), "# Title");
        assert_eq!(strip_bom("\u{feff}"), "");
    }
}
