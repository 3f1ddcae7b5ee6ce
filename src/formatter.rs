//! Structural table operations: completion, formatting, and edits.
//!
//! Everything here is a pure function from an input [`Table`] (plus
//! options) to a fresh `Table` — inputs are never mutated, and rows the
//! operation does not touch are shared into the result rather than
//! rebuilt. Out-of-range indices are soft no-ops: the operation hands the
//! input's rows straight back, which [`Table::same_rows`] detects cheaply,
//! so hosts treat "nothing happened" and "something happened" uniformly by
//! looking at the data.
//!
//! The two hard errors are [`EmptyTableError`] (completing a table with no
//! header row to hang a delimiter under) and, further down in the text
//! layer, aligning to an unresolved alignment. Everything else degrades.

use std::sync::Arc;

use gridmark_model::cell::TableCell;
use gridmark_model::row::TableRow;
use gridmark_model::table::Table;
use gridmark_text::alignment::Alignment;
use gridmark_text::width::{TextWidthOptions, align_text, delimiter_text};
use thiserror::Error;
use tracing::{debug, trace};

use crate::options::{FormatType, FormatterOptions};

// ---------------------------------------------------------------------------
// Results and errors
// ---------------------------------------------------------------------------

/// A table returned by [`complete_table`], plus what completion had to do.
#[derive(Debug, Clone)]
pub struct CompletedTable {
    /// The completed table: rectangular, with a delimiter row in place.
    pub table: Table,
    /// Whether a delimiter row had to be synthesized.
    pub delimiter_inserted: bool,
}

/// A table returned by [`format_table`], plus the margin it settled on.
#[derive(Debug, Clone)]
pub struct FormattedTable {
    /// The reformatted table.
    pub table: Table,
    /// The left margin applied uniformly to every row.
    pub margin_left: String,
}

/// A zero-row table cannot be completed — there is no header to delimit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot complete a table with no rows")]
pub struct EmptyTableError;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Char count of a margin string; raw-text geometry is char-based.
fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Grow `items` to at least `len` elements, filling each missing index from
/// `fill`. Already-long-enough input comes back unchanged. This is the one
/// primitive behind every row/column equalization.
pub fn extend_to<T>(mut items: Vec<T>, len: usize, mut fill: impl FnMut(usize) -> T) -> Vec<T> {
    while items.len() < len {
        items.push(fill(items.len()));
    }
    items
}

/// Align with an alignment the caller has already resolved. The unset
/// alignment cannot reach the text layer from here; if it somehow does,
/// the text is left unpadded rather than panicking.
fn aligned(text: &str, width: usize, alignment: Alignment, options: &TextWidthOptions) -> String {
    align_text(text, width, alignment, options).unwrap_or_else(|_| text.to_string())
}

/// Rendered width of each column: the widest content in the column across
/// all non-delimiter rows, floored at `min_delimiter_width` for columns the
/// delimiter row covers.
fn column_widths(table: &Table, options: &FormatterOptions) -> Vec<usize> {
    let mut widths = vec![0; table.width()];
    let delimiter_present = table.delimiter_row().is_some();
    let delimiter_columns = table.delimiter_row().map_or(0, TableRow::cell_count);
    for width in &mut widths[..delimiter_columns] {
        *width = options.min_delimiter_width;
    }
    for (index, row) in table.rows().enumerate() {
        if delimiter_present && index == 1 {
            continue;
        }
        for (column, cell) in row.cells().iter().enumerate() {
            widths[column] = widths[column].max(cell.compute_width(&options.text_width_options));
        }
    }
    widths
}

/// Raw (unresolved) alignment of each column, read off the delimiter row.
fn column_alignments(table: &Table) -> Vec<Alignment> {
    let mut alignments = vec![Alignment::None; table.width()];
    if let Some(delimiter) = table.delimiter_row() {
        for (column, cell) in delimiter.cells().iter().enumerate() {
            alignments[column] = cell.alignment().unwrap_or(Alignment::None);
        }
    }
    alignments
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Normalize a ragged, possibly delimiter-less table into a well-formed
/// one: every row extended to the table's width, and a delimiter row
/// synthesized directly after the header when none qualifies.
///
/// When a short row is extended, its old right margin becomes the text of
/// the first filler cell and the row's new right margin is empty; further
/// fillers are empty cells. A short *delimiter* row is instead filled with
/// fresh delimiter cells — the first sized `max(min_delimiter_width,
/// margin_chars - 2)` so the dashes span roughly where the old margin
/// ended, the rest at `min_delimiter_width`.
///
/// # Errors
///
/// [`EmptyTableError`] when the table has no rows.
pub fn complete_table(
    table: &Table,
    options: &FormatterOptions,
) -> Result<CompletedTable, EmptyTableError> {
    if table.height() == 0 {
        return Err(EmptyTableError);
    }
    let width = table.width();
    let delimiter_present = table.delimiter_row().is_some();
    let min = options.min_delimiter_width;

    let mut rows: Vec<Arc<TableRow>> = Vec::with_capacity(table.height() + 1);
    for (index, shared) in table.shared_rows().iter().enumerate() {
        let row = shared.as_ref();
        let count = row.cell_count();
        if count >= width {
            rows.push(Arc::clone(shared));
            continue;
        }
        let is_delimiter = delimiter_present && index == 1;
        let cells = extend_to(row.cells().to_vec(), width, |column| {
            if is_delimiter {
                let dash_width = if column == count {
                    min.max(char_len(row.margin_right()).saturating_sub(2))
                } else {
                    min
                };
                TableCell::new(delimiter_text(Alignment::None, dash_width))
            } else if column == count {
                TableCell::new(row.margin_right())
            } else {
                TableCell::new("")
            }
        });
        rows.push(Arc::new(TableRow::new(cells, row.margin_left(), "")));
    }

    if !delimiter_present {
        let cells = (0..width)
            .map(|_| TableCell::new(delimiter_text(Alignment::None, min)))
            .collect();
        rows.insert(1, Arc::new(TableRow::new(cells, "", "")));
    }

    debug!(
        width,
        delimiter_inserted = !delimiter_present,
        "completed table"
    );
    Ok(CompletedTable {
        table: Table::from_shared(rows),
        delimiter_inserted: !delimiter_present,
    })
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Reformat `table` under the policy in `options.format_type`.
///
/// *Normal* completes the table first, then re-renders every cell: content
/// padded and aligned to the column's rendered width, the delimiter row
/// regenerated, every row given the table's shared left margin (the first
/// row's) and an empty right margin.
///
/// *Weak* keeps cell text verbatim — only the delimiter row is regenerated
/// and the margins are normalized, for minimal diff noise. A fully empty
/// raw cell still becomes two pad spaces so it renders as `|  |`. No
/// completion happens, so ragged tables stay ragged.
///
/// # Errors
///
/// [`EmptyTableError`] in normal mode on a zero-row table (weak mode
/// passes an empty table through).
pub fn format_table(
    table: &Table,
    options: &FormatterOptions,
) -> Result<FormattedTable, EmptyTableError> {
    trace!(
        format_type = ?options.format_type,
        height = table.height(),
        width = table.width(),
        "formatting table"
    );
    match options.format_type {
        FormatType::Normal => {
            let completed = complete_table(table, options)?;
            Ok(format_rows(&completed.table, options))
        }
        FormatType::Weak => Ok(format_rows_weak(table, options)),
    }
}

/// The normal-policy core: every cell re-rendered against its column.
fn format_rows(table: &Table, options: &FormatterOptions) -> FormattedTable {
    let Some(first) = table.row_at(0) else {
        return FormattedTable {
            table: table.clone(),
            margin_left: String::new(),
        };
    };
    let margin_left = first.margin_left().to_string();
    let delimiter_present = table.delimiter_row().is_some();
    let widths = column_widths(table, options);
    let alignments = column_alignments(table);

    let rows = table
        .rows()
        .enumerate()
        .map(|(index, row)| {
            let cells: Vec<TableCell> = if delimiter_present && index == 1 {
                row.cells()
                    .iter()
                    .enumerate()
                    .map(|(column, _)| {
                        TableCell::new(delimiter_text(alignments[column], widths[column]))
                    })
                    .collect()
            } else {
                row.cells()
                    .iter()
                    .enumerate()
                    .map(|(column, cell)| {
                        let resolved = alignments[column].or_default(options.default_alignment);
                        let alignment = if index == 0 {
                            options
                                .header_alignment
                                .override_alignment()
                                .unwrap_or(resolved)
                        } else {
                            resolved
                        };
                        TableCell::padded(&aligned(
                            cell.content(),
                            widths[column],
                            alignment,
                            &options.text_width_options,
                        ))
                    })
                    .collect()
            };
            TableRow::new(cells, margin_left.clone(), "")
        })
        .collect();

    FormattedTable {
        table: Table::new(rows),
        margin_left,
    }
}

/// The weak-policy core: delimiter row and margins only.
fn format_rows_weak(table: &Table, options: &FormatterOptions) -> FormattedTable {
    let Some(first) = table.row_at(0) else {
        return FormattedTable {
            table: table.clone(),
            margin_left: String::new(),
        };
    };
    let margin_left = first.margin_left().to_string();
    let delimiter_present = table.delimiter_row().is_some();
    let widths = column_widths(table, options);
    let alignments = column_alignments(table);

    let rows = table
        .rows()
        .enumerate()
        .map(|(index, row)| {
            let cells: Vec<TableCell> = if delimiter_present && index == 1 {
                row.cells()
                    .iter()
                    .enumerate()
                    .map(|(column, _)| {
                        TableCell::new(delimiter_text(alignments[column], widths[column]))
                    })
                    .collect()
            } else {
                row.cells()
                    .iter()
                    .map(|cell| {
                        if cell.raw_text().is_empty() {
                            TableCell::padded("")
                        } else {
                            cell.clone()
                        }
                    })
                    .collect()
            };
            TableRow::new(cells, margin_left.clone(), "")
        })
        .collect();

    FormattedTable {
        table: Table::new(rows),
        margin_left,
    }
}

// ---------------------------------------------------------------------------
// Alignment editing
// ---------------------------------------------------------------------------

/// Rewrite the delimiter cell at `column_index` to encode `alignment`,
/// rendered at `min_delimiter_width` dashes.
///
/// Soft no-op — the input's rows come back shared and unchanged — when the
/// table has no delimiter row, when `column_index` is outside the header,
/// or when the delimiter row itself has no cell there.
#[must_use]
pub fn alter_alignment(
    table: &Table,
    column_index: usize,
    alignment: Alignment,
    options: &FormatterOptions,
) -> Table {
    let in_header = table
        .header_width()
        .is_some_and(|width| column_index < width);
    let Some(delimiter) = table.delimiter_row() else {
        return table.clone();
    };
    if !in_header || column_index >= delimiter.cell_count() {
        trace!(column_index, "alignment change out of range; table unchanged");
        return table.clone();
    }

    let mut cells = delimiter.cells().to_vec();
    cells[column_index] = TableCell::new(delimiter_text(
        alignment,
        options.min_delimiter_width,
    ));
    let row = TableRow::new(cells, delimiter.margin_left(), delimiter.margin_right());

    let mut rows = table.shared_rows().to_vec();
    rows[1] = Arc::new(row);
    Table::from_shared(rows)
}

// ---------------------------------------------------------------------------
// Row editing
// ---------------------------------------------------------------------------

/// Insert `row` at `index`, clamped into `[0, height]`.
#[must_use]
pub fn insert_row(table: &Table, index: usize, row: TableRow) -> Table {
    let mut rows = table.shared_rows().to_vec();
    let index = index.min(rows.len());
    rows.insert(index, Arc::new(row));
    Table::from_shared(rows)
}

/// Delete the row at `index`; out-of-range is a soft no-op.
#[must_use]
pub fn delete_row(table: &Table, index: usize) -> Table {
    if index >= table.height() {
        return table.clone();
    }
    let mut rows = table.shared_rows().to_vec();
    rows.remove(index);
    Table::from_shared(rows)
}

/// Move the row at `index` to `dest_index`; a soft no-op when the indices
/// coincide or either is out of `[0, height)`.
#[must_use]
pub fn move_row(table: &Table, index: usize, dest_index: usize) -> Table {
    let height = table.height();
    if index == dest_index || index >= height || dest_index >= height {
        return table.clone();
    }
    let mut rows = table.shared_rows().to_vec();
    let row = rows.remove(index);
    rows.insert(dest_index, row);
    Table::from_shared(rows)
}

// ---------------------------------------------------------------------------
// Column editing
// ---------------------------------------------------------------------------

/// Insert a column at `index`: each non-delimiter row receives the next of
/// the caller's `cells` top to bottom (an empty cell once they run out),
/// while the delimiter row receives a fresh unset delimiter cell at
/// `min_delimiter_width`. Rows shorter than `index` are first extended
/// with empty cells. Soft no-op when the table is empty or `index` lies
/// beyond the header width.
#[must_use]
pub fn insert_column(
    table: &Table,
    index: usize,
    cells: Vec<TableCell>,
    options: &FormatterOptions,
) -> Table {
    let Some(header_width) = table.header_width() else {
        return table.clone();
    };
    if index > header_width {
        return table.clone();
    }
    let delimiter_present = table.delimiter_row().is_some();
    let mut provided = cells.into_iter();

    let rows = table
        .rows()
        .enumerate()
        .map(|(row_index, row)| {
            let mut cells = extend_to(row.cells().to_vec(), index, |_| TableCell::new(""));
            let new_cell = if delimiter_present && row_index == 1 {
                TableCell::new(delimiter_text(Alignment::None, options.min_delimiter_width))
            } else {
                provided.next().unwrap_or_else(|| TableCell::new(""))
            };
            cells.insert(index, new_cell);
            TableRow::new(cells, row.margin_left(), row.margin_right())
        })
        .collect();
    Table::new(rows)
}

/// Delete the column at `index` from every row that has it. A row emptied
/// by the deletion keeps a single cell — a fresh unset delimiter cell on
/// the delimiter row, an empty cell elsewhere — so the row still renders
/// its pipes. Soft no-op when `index` is outside the header.
#[must_use]
pub fn delete_column(table: &Table, index: usize, options: &FormatterOptions) -> Table {
    if !table
        .header_width()
        .is_some_and(|width| index < width)
    {
        return table.clone();
    }
    let delimiter_present = table.delimiter_row().is_some();

    let rows = table
        .shared_rows()
        .iter()
        .enumerate()
        .map(|(row_index, shared)| {
            let row = shared.as_ref();
            if index >= row.cell_count() {
                return Arc::clone(shared);
            }
            let mut cells = row.cells().to_vec();
            cells.remove(index);
            if cells.is_empty() {
                cells.push(if delimiter_present && row_index == 1 {
                    TableCell::new(delimiter_text(Alignment::None, options.min_delimiter_width))
                } else {
                    TableCell::new("")
                });
            }
            Arc::new(TableRow::new(
                cells,
                row.margin_left(),
                row.margin_right(),
            ))
        })
        .collect();
    Table::from_shared(rows)
}

/// Move the column at `index` to `dest_index` in every row long enough to
/// contain both; shorter rows are untouched. Soft no-op when the indices
/// coincide or either is outside the header.
#[must_use]
pub fn move_column(table: &Table, index: usize, dest_index: usize) -> Table {
    let within_header = table
        .header_width()
        .is_some_and(|width| index < width && dest_index < width);
    if index == dest_index || !within_header {
        return table.clone();
    }

    let rows = table
        .shared_rows()
        .iter()
        .map(|shared| {
            let row = shared.as_ref();
            if index.max(dest_index) >= row.cell_count() {
                return Arc::clone(shared);
            }
            let mut cells = row.cells().to_vec();
            let cell = cells.remove(index);
            cells.insert(dest_index, cell);
            Arc::new(TableRow::new(
                cells,
                row.margin_left(),
                row.margin_right(),
            ))
        })
        .collect();
    Table::from_shared(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
