//! # gridmark-model — Data model for the table kernel
//!
//! The immutable value types every other layer works in terms of:
//!
//! - **[`position`]** — `Point` and `Range`, 0-indexed raw-text coordinates
//! - **[`focus`]** — `Focus` and `Boundary`, the width-independent logical
//!   cursor that survives reformatting
//! - **[`cell`]** — `TableCell`, one pipe-delimited segment
//! - **[`row`]** — `TableRow`, cells plus margins
//! - **[`table`]** — `Table`, structural queries and coordinate mapping
//! - **[`parser`]** — the lenient line parser producing rows and tables
//!
//! Nothing here mutates: parsing and editing always construct new values,
//! with unchanged rows structurally shared between table versions. The
//! formatting operations that build those new tables live in the root
//! `gridmark` crate.

pub mod cell;
pub mod focus;
pub mod parser;
pub mod position;
pub mod row;
pub mod table;
