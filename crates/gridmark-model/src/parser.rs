//! The line parser: raw text in, [`TableRow`] / [`Table`] out.
//!
//! The grammar is deliberately forgiving. Row parsing has **no failure
//! path**: a line with no pipes at all is still a row — one big cell — so
//! that a half-typed table keeps parsing while the user edits it. Structure
//! (equal column counts, a delimiter row) is not enforced here; completion
//! is the formatter's job.
//!
//! Splitting rules, in order:
//!
//! 1. Cells split on `|`; a backslash escapes the next char, so `\|` stays
//!    inside the cell (and serializes back out untouched).
//! 2. The first segment becomes the left margin only if every char of it
//!    is whitespace or one of the configured left-margin chars (blockquote
//!    markers and the like).
//! 3. The last segment becomes the right margin only if it is pure
//!    whitespace and at least two segments remain — otherwise it is a cell
//!    like any other.

use std::collections::HashSet;

use crate::cell::TableCell;
use crate::row::TableRow;
use crate::table::Table;

/// Options controlling row parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Extra chars honored as part of the left margin, e.g. `>` to let
    /// tables live inside blockquotes. `|` and `\` are never honored.
    pub left_margin_chars: HashSet<char>,
}

impl ParserOptions {
    /// Whether `text` is all margin: whitespace or configured margin chars.
    fn is_left_margin(&self, text: &str) -> bool {
        text.chars().all(|ch| {
            ch.is_whitespace()
                || (ch != '|' && ch != '\\' && self.left_margin_chars.contains(&ch))
        })
    }
}

/// Split a line into pipe-delimited segments, honoring `\` escapes.
fn split_cells(line: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut buf = String::new();
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                buf.push('\\');
                if let Some(escaped) = chars.next() {
                    buf.push(escaped);
                }
            }
            '|' => segments.push(std::mem::take(&mut buf)),
            _ => buf.push(ch),
        }
    }
    segments.push(buf);
    segments
}

/// Parse a single line into a row. Never fails.
#[must_use]
pub fn read_row(line: &str, options: &ParserOptions) -> TableRow {
    let mut segments = split_cells(line);

    let margin_left = if segments.first().is_some_and(|first| options.is_left_margin(first)) {
        segments.remove(0)
    } else {
        String::new()
    };

    let margin_right = if segments.len() > 1
        && segments
            .last()
            .is_some_and(|last| last.chars().all(char::is_whitespace))
    {
        segments.pop().unwrap_or_default()
    } else {
        String::new()
    };

    let cells = segments.into_iter().map(TableCell::new).collect();
    TableRow::new(cells, margin_left, margin_right)
}

/// Parse a run of lines into a table, one row per line.
///
/// An empty slice yields an empty table — not an error. No structural
/// validation happens here.
#[must_use]
pub fn read_table<S: AsRef<str>>(lines: &[S], options: &ParserOptions) -> Table {
    Table::new(
        lines
            .iter()
            .map(|line| read_row(line.as_ref(), options))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
