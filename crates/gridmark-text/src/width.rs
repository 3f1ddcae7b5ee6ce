// SPDX-License-Identifier: MIT
//
// Width — display-width measurement and space padding.
//
// A table only lines up when every cell in a column renders to the same
// number of terminal columns, so all measurement here is in *display*
// columns, not chars or bytes. The rules:
//
//   - East Asian Wide and Fullwidth scalars occupy two columns.
//   - East Asian Ambiguous scalars occupy two columns only when the
//     `ambiguous_as_wide` option says so (CJK-context fonts render them
//     wide; everything else renders them narrow).
//   - Every other scalar occupies one column. That includes combining
//     marks: the engine counts code points, and the only sanctioned way to
//     merge a base+mark pair is the `normalize` option, which composes the
//     text to NFC before measuring.
//   - `wide_chars` / `narrow_chars` are per-scalar overrides checked before
//     the EAW classification, for fonts that disagree with the tables.
//
// Alignment padding is always plain spaces. Text is never truncated — a
// cell wider than its column simply stays wider.

use std::collections::HashSet;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_width::UnicodeWidthChar;

use crate::alignment::Alignment;

// ─── TextWidthOptions ────────────────────────────────────────────────────────

/// Options controlling how display width is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWidthOptions {
    /// Compose the text to NFC before measuring, so `e` + combining acute
    /// measures as one column instead of two.
    pub normalize: bool,
    /// Scalars always measured as two columns, overriding their EAW class.
    pub wide_chars: HashSet<char>,
    /// Scalars always measured as one column, overriding their EAW class.
    pub narrow_chars: HashSet<char>,
    /// Measure East Asian Ambiguous scalars as two columns.
    pub ambiguous_as_wide: bool,
}

impl Default for TextWidthOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            wide_chars: HashSet::new(),
            narrow_chars: HashSet::new(),
            ambiguous_as_wide: false,
        }
    }
}

// ─── UnexpectedAlignmentError ────────────────────────────────────────────────

/// The unset alignment was passed where a resolved alignment is required.
///
/// [`Alignment::None`] is a legal *current* state for a column but never a
/// legal target for laying text out; resolve it with
/// [`Alignment::or_default`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot align text to the unset alignment; resolve it to left, right, or center first")]
pub struct UnexpectedAlignmentError;

// ─── Measurement ─────────────────────────────────────────────────────────────

/// Display width of a single scalar under the given options.
fn char_width(ch: char, options: &TextWidthOptions) -> usize {
    if options.wide_chars.contains(&ch) {
        return 2;
    }
    if options.narrow_chars.contains(&ch) {
        return 1;
    }
    let eaw = if options.ambiguous_as_wide {
        ch.width_cjk()
    } else {
        ch.width()
    };
    // Control chars and zero-width marks still occupy one counted column.
    eaw.unwrap_or(1).max(1)
}

/// Display width of `text` under the given options.
///
/// Never negative by construction; the empty string measures 0.
#[must_use]
pub fn text_width(text: &str, options: &TextWidthOptions) -> usize {
    if options.normalize {
        text.nfc().map(|ch| char_width(ch, options)).sum()
    } else {
        text.chars().map(|ch| char_width(ch, options)).sum()
    }
}

// ─── Padding ─────────────────────────────────────────────────────────────────

/// Pad `text` with spaces to at least `width` display columns.
///
/// Text already at or beyond `width` is returned unchanged — never
/// truncated. `Left` pads on the right, `Right` on the left, and `Center`
/// splits the padding with the larger half on the right.
///
/// # Errors
///
/// [`UnexpectedAlignmentError`] when `alignment` is the unset variant.
pub fn align_text(
    text: &str,
    width: usize,
    alignment: Alignment,
    options: &TextWidthOptions,
) -> Result<String, UnexpectedAlignmentError> {
    let space = width.saturating_sub(text_width(text, options));
    match alignment {
        Alignment::None => Err(UnexpectedAlignmentError),
        Alignment::Left => Ok(format!("{text}{}", " ".repeat(space))),
        Alignment::Right => Ok(format!("{}{text}", " ".repeat(space))),
        Alignment::Center => {
            let left = space / 2;
            let right = space - left;
            Ok(format!("{}{text}{}", " ".repeat(left), " ".repeat(right)))
        }
    }
}

/// Wrap `text` in exactly one space on each side — the canonical cell
/// decoration, so `"foo"` becomes `" foo "`.
#[must_use]
pub fn pad_text(text: &str) -> String {
    format!(" {text} ")
}

/// Render a delimiter cell of `width` dashes for `alignment`.
///
/// The colon markers replace the outer pad spaces: `Left` and `Center` get
/// a leading `:`, `Right` and `Center` a trailing one, and the unset
/// alignment keeps both spaces.
#[must_use]
pub fn delimiter_text(alignment: Alignment, width: usize) -> String {
    let bar = "-".repeat(width);
    match alignment {
        Alignment::None => format!(" {bar} "),
        Alignment::Left => format!(":{bar} "),
        Alignment::Right => format!(" {bar}:"),
        Alignment::Center => format!(":{bar}:"),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain() -> TextWidthOptions {
        TextWidthOptions {
            normalize: false,
            ..TextWidthOptions::default()
        }
    }

    // -- text_width ---------------------------------------------------------

    #[test]
    fn width_classifies_by_east_asian_width() {
        // ℵ neutral, A narrow, あ wide, Ａ fullwidth, ｱ halfwidth, ∀ ambiguous.
        assert_eq!(text_width("ℵAあＡｱ∀", &plain()), 8);
    }

    #[test]
    fn width_ambiguous_as_wide() {
        let options = TextWidthOptions {
            ambiguous_as_wide: true,
            ..plain()
        };
        assert_eq!(text_width("ℵAあＡｱ∀", &options), 9);
    }

    #[test]
    fn width_wide_char_override_beats_eaw() {
        let options = TextWidthOptions {
            wide_chars: HashSet::from(['∀']),
            ..plain()
        };
        assert_eq!(text_width("ℵAあＡｱ∀", &options), 9);
    }

    #[test]
    fn width_narrow_char_override_beats_ambiguous_policy() {
        let options = TextWidthOptions {
            narrow_chars: HashSet::from(['∀']),
            ambiguous_as_wide: true,
            ..plain()
        };
        assert_eq!(text_width("ℵAあＡｱ∀", &options), 8);
    }

    #[test]
    fn width_counts_combining_marks_without_normalization() {
        assert_eq!(text_width("\u{0065}\u{0301}", &plain()), 2);
    }

    #[test]
    fn width_normalization_composes_before_measuring() {
        let options = TextWidthOptions {
            normalize: true,
            ..plain()
        };
        assert_eq!(text_width("\u{0065}\u{0301}", &options), 1);
    }

    #[test]
    fn width_of_empty_text_is_zero() {
        assert_eq!(text_width("", &plain()), 0);
        assert_eq!(text_width("", &TextWidthOptions::default()), 0);
    }

    // -- align_text ---------------------------------------------------------

    #[test]
    fn align_pads_to_width() {
        let options = plain();
        assert_eq!(align_text("foo", 5, Alignment::Left, &options), Ok("foo  ".into()));
        assert_eq!(align_text("foo", 5, Alignment::Right, &options), Ok("  foo".into()));
        assert_eq!(align_text("foo", 5, Alignment::Center, &options), Ok(" foo ".into()));
    }

    #[test]
    fn align_center_puts_the_larger_half_right() {
        let options = plain();
        assert_eq!(align_text("foo", 7, Alignment::Center, &options), Ok("  foo  ".into()));
        assert_eq!(align_text("foo", 6, Alignment::Center, &options), Ok(" foo  ".into()));
    }

    #[test]
    fn align_never_truncates() {
        let options = plain();
        assert_eq!(align_text("foobar", 5, Alignment::Left, &options), Ok("foobar".into()));
        assert_eq!(align_text("foobar", 5, Alignment::Right, &options), Ok("foobar".into()));
        assert_eq!(align_text("foobar", 5, Alignment::Center, &options), Ok("foobar".into()));
    }

    #[test]
    fn align_measures_in_display_columns() {
        let options = plain();
        // Ambiguous ∀ is narrow here, so four spaces of padding.
        assert_eq!(align_text("∀", 5, Alignment::Left, &options), Ok("∀    ".into()));

        let wide = TextWidthOptions {
            ambiguous_as_wide: true,
            ..plain()
        };
        assert_eq!(align_text("∀", 5, Alignment::Left, &wide), Ok("∀   ".into()));

        // Unnormalized base+mark counts as two columns.
        assert_eq!(
            align_text("\u{0065}\u{0301}", 5, Alignment::Left, &options),
            Ok("\u{0065}\u{0301}   ".into())
        );
    }

    #[test]
    fn align_rejects_the_unset_alignment() {
        assert_eq!(
            align_text("foo", 5, Alignment::None, &plain()),
            Err(UnexpectedAlignmentError)
        );
    }

    // -- pad_text -----------------------------------------------------------

    #[test]
    fn pad_adds_one_space_each_side() {
        assert_eq!(pad_text(""), "  ");
        assert_eq!(pad_text("foo"), " foo ");
    }

    // -- delimiter_text -----------------------------------------------------

    #[test]
    fn delimiter_markers_replace_the_pad_spaces() {
        assert_eq!(delimiter_text(Alignment::None, 5), " ----- ");
        assert_eq!(delimiter_text(Alignment::Left, 5), ":----- ");
        assert_eq!(delimiter_text(Alignment::Right, 5), " -----:");
        assert_eq!(delimiter_text(Alignment::Center, 5), ":-----:");
    }

    #[test]
    fn delimiter_respects_width() {
        assert_eq!(delimiter_text(Alignment::None, 3), " --- ");
        assert_eq!(delimiter_text(Alignment::Left, 1), ":- ");
    }
}
