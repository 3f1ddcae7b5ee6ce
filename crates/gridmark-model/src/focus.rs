//! Focus — a width-independent logical cursor location inside a table.
//!
//! A raw-text [`Point`] goes stale the moment a table is reformatted: cell
//! text gets re-padded and every character column shifts. A `Focus` instead
//! names the *unit* the cursor is in — table row, table column — plus which
//! [`Boundary`] of that unit it sticks to. Boundaries survive re-padding,
//! so the host captures a focus before formatting and resolves it back to a
//! point against the new table afterwards.
//!
//! `column` is `-1` when the cursor sits in the left margin, before the
//! first cell, and equals the header width when it sits after the last
//! cell — both are virtual margin positions, which is why the field is
//! signed.
//!
//! [`Point`]: crate::position::Point

// ---------------------------------------------------------------------------
// Boundary
// ---------------------------------------------------------------------------

/// Which boundary of the focused unit the cursor sticks to.
///
/// Deliberately two-state: a precise char offset into the cell would be
/// invalidated by the very reformat the focus exists to survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Boundary {
    /// Immediately after the unit's left delimiter (or at line start for
    /// the left margin).
    #[default]
    Leading,
    /// Immediately before the unit's right delimiter (or at line end for
    /// the right margin).
    Trailing,
}

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

/// A logical cursor coordinate: table row, table column, boundary.
///
/// The boundary is carried data, not identity — two focuses on the same
/// cell are the "same place" regardless of which end the cursor hugs, which
/// is what [`Focus::pos_equals`] checks. Derived equality still compares
/// all three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Focus {
    row: isize,
    column: isize,
    offset: Boundary,
}

impl Focus {
    /// Create a new focus.
    #[inline]
    #[must_use]
    pub const fn new(row: isize, column: isize, offset: Boundary) -> Self {
        Self {
            row,
            column,
            offset,
        }
    }

    /// Table-relative row of the focused cell.
    #[inline]
    #[must_use]
    pub const fn row(self) -> isize {
        self.row
    }

    /// Table-relative column; `-1` before the first cell, header width
    /// after the last.
    #[inline]
    #[must_use]
    pub const fn column(self) -> isize {
        self.column
    }

    /// Which boundary of the focused unit the cursor sticks to.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> Boundary {
        self.offset
    }

    /// True when `other` addresses the same row and column, ignoring the
    /// boundary.
    #[inline]
    #[must_use]
    pub const fn pos_equals(self, other: Self) -> bool {
        self.row == other.row && self.column == other.column
    }

    /// A copy with the row replaced.
    #[inline]
    #[must_use]
    pub const fn set_row(self, row: isize) -> Self {
        Self { row, ..self }
    }

    /// A copy with the column replaced.
    #[inline]
    #[must_use]
    pub const fn set_column(self, column: isize) -> Self {
        Self { column, ..self }
    }

    /// A copy with the boundary replaced.
    #[inline]
    #[must_use]
    pub const fn set_offset(self, offset: Boundary) -> Self {
        Self { offset, ..self }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
