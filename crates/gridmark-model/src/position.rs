//! Raw-text coordinates: [`Point`] and [`Range`].
//!
//! All coordinates are **0-indexed**. Row 0 is the first line handed to the
//! parser, column 0 the first character of a line. Columns count Unicode
//! scalar values (chars), not bytes and not display columns — display width
//! is a formatting concern and lives in the text-metrics layer.
//!
//! These are the coordinates the host editor speaks: it supplies a cursor
//! `Point`, and gets a `Point` (or a selection `Range`) back after a
//! reformat. The width-independent *logical* coordinate is [`Focus`],
//! defined separately.
//!
//! [`Focus`]: crate::focus::Focus

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A position in raw text: (row, column), both 0-indexed.
///
/// `column` is the char offset from the start of the line. For the line
/// `"| café |"`, column 2 is `'c'` and column 8 is the cursor slot right
/// after the closing pipe.
///
/// # Ordering
///
/// Points order lexicographically, row first: `Point { row: 0, column: 9 }`
/// < `Point { row: 1, column: 0 }`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl Ord for Point {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row
            .cmp(&other.row)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}:{})", self.row, self.column)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed for human display.
        write!(f, "{}:{}", self.row + 1, self.column + 1)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A span of raw text: `[start, end)`, start inclusive, end exclusive.
///
/// Always normalized so that `start <= end`; [`Range::new`] checks this in
/// debug builds. The selection ranges the table hands back are single-row
/// and non-empty, but the type does not insist on that.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Point,
    pub end: Point,
}

impl Range {
    /// Create a range. Debug-asserts `start <= end`.
    #[inline]
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        debug_assert!(
            start.row < end.row || (start.row == end.row && start.column <= end.column),
            "Range::new requires start <= end"
        );
        Self { start, end }
    }

    /// True when the range spans zero characters.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start.row == self.end.row && self.start.column == self.end.column
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range({}:{} .. {}:{})",
            self.start.row, self.start.column, self.end.row, self.end.column
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
