//! # gridmark — Markdown table editing kernel
//!
//! The text-side core of a table editor: parse pipe-delimited lines into an
//! immutable [`Table`], run structural operations on it (complete, format,
//! alter alignment, insert/delete/move rows and columns), and serialize it
//! back — while keeping the user's cursor where they left it.
//!
//! The host editor is not here. It hands this crate raw lines plus a
//! cursor [`Point`] and gets lines plus a remapped point back:
//!
//! ```
//! use gridmark::options::FormatterOptions;
//! use gridmark::{Point, formatter, parser};
//!
//! let lines = ["| name | qty |", "| --- |", "| tofu | 2 |"];
//! let table = parser::read_table(&lines, &parser::ParserOptions::default());
//!
//! // Cursor right after the "2", as the editor reports it.
//! let cursor = Point::new(2, 10);
//! let focus = table.focus_of_position(cursor, 0).unwrap();
//!
//! let formatted = formatter::format_table(&table, &FormatterOptions::default()).unwrap();
//! assert_eq!(
//!     formatted.table.to_lines(),
//!     vec!["| name | qty |", "| ---- | --- |", "| tofu | 2   |"],
//! );
//!
//! // Same logical cell, trailing boundary — now just before the new pipe.
//! let cursor = formatted.table.position_of_focus(focus, 0).unwrap();
//! assert_eq!(cursor, Point::new(2, 13));
//! ```
//!
//! Everything is a pure function over immutable values; unchanged rows are
//! structurally shared between table versions, and out-of-range edits come
//! back as the unchanged input rather than as errors. The pieces:
//!
//! - **[`formatter`]** — completion, normal/weak formatting, structural edits
//! - **[`options`]** — the configuration structs those operations take
//! - re-exported from `gridmark-model`: [`Table`], [`TableRow`],
//!   [`TableCell`], [`Point`], [`Range`], [`Focus`], [`Boundary`], and the
//!   [`parser`]
//! - re-exported from `gridmark-text`: [`Alignment`] and friends, plus the
//!   [`width`] engine

pub mod formatter;
pub mod options;

pub use gridmark_model::cell::TableCell;
pub use gridmark_model::focus::{Boundary, Focus};
pub use gridmark_model::parser;
pub use gridmark_model::position::{Point, Range};
pub use gridmark_model::row::TableRow;
pub use gridmark_model::table::Table;
pub use gridmark_text::alignment::{Alignment, DefaultAlignment, HeaderAlignment};
pub use gridmark_text::width;
