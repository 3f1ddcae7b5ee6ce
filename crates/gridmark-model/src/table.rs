//! `Table` — an ordered run of rows, with coordinate mapping.
//!
//! The table is a persistent value: every "mutation" elsewhere in the
//! kernel builds a new `Table`, and rows are held behind [`Arc`] so the
//! unchanged ones are shared rather than copied. [`Table::same_rows`]
//! compares row identity, which is how callers detect that an operation
//! was a soft no-op without diffing text.
//!
//! The second job of this module is translating between the host editor's
//! raw-text [`Point`] coordinates and the width-independent [`Focus`]
//! coordinates. The contract around a reformat is:
//!
//! 1. capture `focus = old_table.focus_of_position(point, row_offset)`,
//! 2. run the formatting operation,
//! 3. restore `point = new_table.position_of_focus(focus, row_offset)`.
//!
//! `row_offset` is the raw-text row of the table's first line, so the same
//! table can sit anywhere in a document.

use std::sync::Arc;

use crate::cell::TableCell;
use crate::focus::{Boundary, Focus};
use crate::position::{Point, Range};
use crate::row::TableRow;

/// Char count of a margin or cell segment, the unit raw-text columns are
/// measured in.
fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// An immutable table: zero or more rows, ragged until completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Arc<TableRow>>,
}

impl Table {
    /// Build a table owning `rows`.
    #[must_use]
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            rows: rows.into_iter().map(Arc::new).collect(),
        }
    }

    /// Build a table from already-shared rows, reusing them as-is. This is
    /// how editing operations splice new tables out of old ones.
    #[must_use]
    pub const fn from_shared(rows: Vec<Arc<TableRow>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Maximum cell count across all rows; 0 for an empty table.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cell_count())
            .max()
            .unwrap_or(0)
    }

    /// Cell count of the header row, or `None` when the table has no rows.
    #[must_use]
    pub fn header_width(&self) -> Option<usize> {
        self.rows.first().map(|row| row.cell_count())
    }

    /// The rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().map(Arc::as_ref)
    }

    /// The shared row handles, for operations that splice tables.
    #[inline]
    #[must_use]
    pub fn shared_rows(&self) -> &[Arc<TableRow>] {
        &self.rows
    }

    /// The row at `index`, if any.
    #[inline]
    #[must_use]
    pub fn row_at(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index).map(Arc::as_ref)
    }

    /// The delimiter row, under the positional-and-syntactic convention:
    /// it must be row 1 of a table at least two rows tall, and every one of
    /// its cells must fit the delimiter grammar.
    #[must_use]
    pub fn delimiter_row(&self) -> Option<&TableRow> {
        if self.rows.len() < 2 {
            return None;
        }
        let row = self.rows[1].as_ref();
        row.is_delimiter().then_some(row)
    }

    /// The cell at (`row_index`, `column_index`), if both exist.
    #[must_use]
    pub fn cell_at(&self, row_index: usize, column_index: usize) -> Option<&TableCell> {
        self.row_at(row_index)?.cell_at(column_index)
    }

    /// The cell a focus addresses, or `None` for margin and out-of-range
    /// focuses.
    #[must_use]
    pub fn focused_cell(&self, focus: Focus) -> Option<&TableCell> {
        let row = usize::try_from(focus.row()).ok()?;
        let column = usize::try_from(focus.column()).ok()?;
        self.cell_at(row, column)
    }

    /// True when `other` is built from the very same shared rows — the
    /// cheap identity test for "this operation did nothing".
    #[must_use]
    pub fn same_rows(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }

    /// Serialize each row back to a line of text.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.to_text()).collect()
    }

    // -- Coordinate mapping -------------------------------------------------

    /// Char column where cell `column`'s raw text starts within its row
    /// (just after the cell's left pipe). Walking stops at the row's cell
    /// count, which yields the slot just after the last pipe.
    fn span_start(row: &TableRow, column: usize) -> usize {
        let mut start = char_len(row.margin_left()) + 1;
        for cell in row.cells().iter().take(column) {
            start += char_len(cell.raw_text()) + 1;
        }
        start
    }

    /// Map a raw-text point onto the table's logical coordinates.
    ///
    /// Returns `None` when the point's row (after subtracting `row_offset`)
    /// is outside the table. A point in the left margin or on the first
    /// pipe maps to column `-1`; a point past the last pipe maps to the
    /// row's cell count; anything else lands in the cell whose span
    /// contains it, [`Boundary::Leading`] exactly at the char after the
    /// cell's left pipe and [`Boundary::Trailing`] everywhere else.
    #[must_use]
    pub fn focus_of_position(&self, point: Point, row_offset: usize) -> Option<Focus> {
        let row_index = point.row.checked_sub(row_offset)?;
        let row = self.row_at(row_index)?;
        let focus_row = isize::try_from(row_index).ok()?;

        let margin = char_len(row.margin_left());
        if point.column < margin + 1 {
            let offset = if point.column == 0 {
                Boundary::Leading
            } else {
                Boundary::Trailing
            };
            return Some(Focus::new(focus_row, -1, offset));
        }

        let mut span_start = margin + 1;
        let mut column = 0_usize;
        for cell in row.cells() {
            let span_end = span_start + char_len(cell.raw_text()) + 1;
            if span_end > point.column {
                break;
            }
            span_start = span_end;
            column += 1;
        }
        let offset = if point.column == span_start {
            Boundary::Leading
        } else {
            Boundary::Trailing
        };
        let focus_column = isize::try_from(column).ok()?;
        Some(Focus::new(focus_row, focus_column, offset))
    }

    /// Map a focus back onto the raw-text column it denotes in the current
    /// rendering of its row.
    ///
    /// Returns `None` when the focus row is outside the table. Column `-1`
    /// resolves to the line start (leading) or the end of the left margin
    /// (trailing); a cell column to its span start (leading) or span end
    /// (trailing, just before the right pipe); the virtual column past the
    /// last cell to just after the last pipe (leading) or the line end
    /// (trailing).
    #[must_use]
    pub fn position_of_focus(&self, focus: Focus, row_offset: usize) -> Option<Point> {
        let row_index = usize::try_from(focus.row()).ok()?;
        let row = self.row_at(row_index)?;
        let point_row = row_index + row_offset;

        if focus.column() < 0 {
            let column = match focus.offset() {
                Boundary::Leading => 0,
                Boundary::Trailing => char_len(row.margin_left()),
            };
            return Some(Point::new(point_row, column));
        }

        // A focus column beyond the row's cells degrades to the virtual
        // past-the-last-pipe position, same as the exact cell count.
        let column = usize::try_from(focus.column()).unwrap_or(usize::MAX);
        let start = Self::span_start(row, column.min(row.cell_count()));
        let point_column = match (row.cell_at(column), focus.offset()) {
            (_, Boundary::Leading) => start,
            (Some(cell), Boundary::Trailing) => start + char_len(cell.raw_text()),
            (None, Boundary::Trailing) => start + char_len(row.margin_right()),
        };
        Some(Point::new(point_row, point_column))
    }

    /// The raw-text range covering exactly the trimmed content of the
    /// focused cell, for driving a selection.
    ///
    /// `None` when the focus does not address an existing cell, or when the
    /// cell's trimmed content is empty — there is nothing to select in a
    /// blank cell.
    #[must_use]
    pub fn selection_range_of_focus(&self, focus: Focus, row_offset: usize) -> Option<Range> {
        let row_index = usize::try_from(focus.row()).ok()?;
        let column = usize::try_from(focus.column()).ok()?;
        let row = self.row_at(row_index)?;
        let cell = row.cell_at(column)?;
        if cell.content().is_empty() {
            return None;
        }

        let point_row = row_index + row_offset;
        let start = Self::span_start(row, column) + cell.raw_offset(0);
        let end = start + char_len(cell.content());
        Some(Range::new(
            Point::new(point_row, start),
            Point::new(point_row, end),
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
