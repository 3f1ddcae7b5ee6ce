//! `TableCell` — one pipe-delimited segment of raw text.
//!
//! A cell owns the verbatim text between two pipes (or between a pipe and
//! the row edge), whitespace included. The trimmed view is the *content*;
//! everything the formatter measures and aligns is content, while raw text
//! is what serializes back out and what raw-text cursor columns index into.

use std::sync::LazyLock;

use gridmark_text::alignment::Alignment;
use gridmark_text::width::{TextWidthOptions, pad_text, text_width};
use regex::Regex;

/// Delimiter-cell grammar: dashes with optional alignment colons, nothing
/// else but surrounding whitespace.
static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*:?-+:?\s*$").expect("delimiter pattern is valid"));

/// One cell of a table row: an immutable raw string segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableCell {
    raw: String,
}

impl TableCell {
    /// Wrap a raw segment verbatim.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// A cell whose raw text is `content` wrapped in single pad spaces —
    /// the shape the formatter emits.
    #[must_use]
    pub fn padded(content: &str) -> Self {
        Self {
            raw: pad_text(content),
        }
    }

    /// The raw segment text, exactly as parsed.
    #[inline]
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    /// The trimmed content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        self.raw.trim()
    }

    /// Display width of the content under `options`. Zero for an empty or
    /// all-whitespace cell.
    #[must_use]
    pub fn compute_width(&self, options: &TextWidthOptions) -> usize {
        text_width(self.content(), options)
    }

    /// Whether this cell fits the delimiter-row grammar (`---`, `:--`,
    /// `--:`, `:-:`, modulo whitespace).
    #[must_use]
    pub fn is_delimiter(&self) -> bool {
        DELIMITER.is_match(&self.raw)
    }

    /// The alignment a delimiter cell encodes, or `None` for a cell that is
    /// not a delimiter at all.
    ///
    /// A delimiter without colons encodes [`Alignment::None`] — present but
    /// unset, distinct from the outer `None`.
    #[must_use]
    pub fn alignment(&self) -> Option<Alignment> {
        if !self.is_delimiter() {
            return None;
        }
        let content = self.content();
        Some(
            match (content.starts_with(':'), content.ends_with(':')) {
                (true, true) => Alignment::Center,
                (true, false) => Alignment::Left,
                (false, true) => Alignment::Right,
                (false, false) => Alignment::None,
            },
        )
    }

    /// Chars of raw text before the content starts. Zero when the content
    /// is empty.
    #[must_use]
    pub fn leading_space_chars(&self) -> usize {
        if self.content().is_empty() {
            return 0;
        }
        self.raw.chars().count() - self.raw.trim_start().chars().count()
    }

    /// Map a raw-text char offset into a content char offset, clamped to
    /// the content span.
    #[must_use]
    pub fn content_offset(&self, raw_offset: usize) -> usize {
        raw_offset
            .saturating_sub(self.leading_space_chars())
            .min(self.content().chars().count())
    }

    /// Map a content char offset back into a raw-text char offset, clamped
    /// to the content span.
    #[must_use]
    pub fn raw_offset(&self, content_offset: usize) -> usize {
        self.leading_space_chars() + content_offset.min(self.content().chars().count())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Raw and content views ----------------------------------------------

    #[test]
    fn raw_text_is_verbatim() {
        assert_eq!(TableCell::new("  foo ").raw_text(), "  foo ");
        assert_eq!(TableCell::new("").raw_text(), "");
    }

    #[test]
    fn content_is_trimmed() {
        assert_eq!(TableCell::new("  foo ").content(), "foo");
        assert_eq!(TableCell::new("    ").content(), "");
    }

    #[test]
    fn padded_constructor_decorates() {
        assert_eq!(TableCell::padded("foo").raw_text(), " foo ");
        assert_eq!(TableCell::padded("").raw_text(), "  ");
    }

    #[test]
    fn width_is_zero_for_blank_cells() {
        let options = TextWidthOptions::default();
        assert_eq!(TableCell::new("").compute_width(&options), 0);
        assert_eq!(TableCell::new("   ").compute_width(&options), 0);
        assert_eq!(TableCell::new(" あ ").compute_width(&options), 2);
    }

    // -- Delimiter grammar --------------------------------------------------

    #[test]
    fn delimiter_grammar_accepts_dashes_and_colons() {
        assert!(TableCell::new("---").is_delimiter());
        assert!(TableCell::new(" - ").is_delimiter());
        assert!(TableCell::new(":---").is_delimiter());
        assert!(TableCell::new("---:").is_delimiter());
        assert!(TableCell::new(" :---: ").is_delimiter());
    }

    #[test]
    fn delimiter_grammar_rejects_everything_else() {
        assert!(!TableCell::new("").is_delimiter());
        assert!(!TableCell::new("   ").is_delimiter());
        assert!(!TableCell::new("::--").is_delimiter());
        assert!(!TableCell::new(":-x-:").is_delimiter());
        assert!(!TableCell::new("foo").is_delimiter());
    }

    #[test]
    fn alignment_decodes_the_colon_markers() {
        assert_eq!(TableCell::new(" --- ").alignment(), Some(Alignment::None));
        assert_eq!(TableCell::new(":--- ").alignment(), Some(Alignment::Left));
        assert_eq!(TableCell::new(" ---:").alignment(), Some(Alignment::Right));
        assert_eq!(TableCell::new(":---:").alignment(), Some(Alignment::Center));
        assert_eq!(TableCell::new(" foo ").alignment(), None);
    }

    // -- Offset mapping -----------------------------------------------------

    #[test]
    fn offsets_round_trip_within_the_content() {
        let cell = TableCell::new("  foo ");
        assert_eq!(cell.leading_space_chars(), 2);
        assert_eq!(cell.raw_offset(0), 2);
        assert_eq!(cell.raw_offset(3), 5);
        assert_eq!(cell.content_offset(2), 0);
        assert_eq!(cell.content_offset(5), 3);
    }

    #[test]
    fn offsets_clamp_to_the_content_span() {
        let cell = TableCell::new("  foo ");
        assert_eq!(cell.raw_offset(99), 5);
        assert_eq!(cell.content_offset(0), 0);
        assert_eq!(cell.content_offset(99), 3);
    }

    #[test]
    fn blank_cell_has_no_leading_span() {
        let cell = TableCell::new("   ");
        assert_eq!(cell.leading_space_chars(), 0);
        assert_eq!(cell.raw_offset(0), 0);
    }
}
