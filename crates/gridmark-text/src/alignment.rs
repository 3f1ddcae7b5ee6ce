// SPDX-License-Identifier: MIT
//
// Alignment — how cell text sits within its rendered column.
//
// A pipe table encodes per-column alignment in its delimiter row:
//
//   | left  | right | center | unset |
//   |:----- | -----:|:------:| ----- |
//
// Three enums cover the three places an alignment can come from:
//
//   - `Alignment` is what a delimiter cell actually says, including the
//     "no marker" case. It is the currency of the formatter.
//   - `DefaultAlignment` is the configured fallback for unmarked columns.
//     It deliberately has no unset variant — a fallback must resolve.
//   - `HeaderAlignment` is the policy for the header row, which may either
//     follow its column or override it outright.

// ─── Alignment ───────────────────────────────────────────────────────────────

/// Column alignment as encoded by a delimiter cell.
///
/// `None` is the unset state: a delimiter cell with no `:` markers, or a
/// column with no delimiter cell at all. It is a legal *current* alignment
/// but never a legal *target* for text alignment — resolve it against a
/// [`DefaultAlignment`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Alignment {
    /// No explicit marker; resolved to a [`DefaultAlignment`] when text
    /// actually has to be laid out.
    #[default]
    None,
    /// Flush left, pad right (`:---` or the unmarked default once resolved).
    Left,
    /// Flush right, pad left (`---:`).
    Right,
    /// Centered, odd padding going to the right (`:---:`).
    Center,
}

impl Alignment {
    /// Whether this alignment still needs resolution before use.
    #[inline]
    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::None)
    }

    /// This alignment, or `default` when unset.
    #[inline]
    #[must_use]
    pub const fn or_default(self, default: DefaultAlignment) -> Self {
        match self {
            Self::None => default.to_alignment(),
            resolved => resolved,
        }
    }
}

// ─── DefaultAlignment ────────────────────────────────────────────────────────

/// The fallback alignment applied to columns without a marker.
///
/// A strict subset of [`Alignment`]: configuration can never pick "unset"
/// as the thing unset columns resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DefaultAlignment {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad on both sides.
    Center,
}

impl DefaultAlignment {
    /// The equivalent resolved [`Alignment`].
    #[inline]
    #[must_use]
    pub const fn to_alignment(self) -> Alignment {
        match self {
            Self::Left => Alignment::Left,
            Self::Right => Alignment::Right,
            Self::Center => Alignment::Center,
        }
    }
}

impl From<DefaultAlignment> for Alignment {
    #[inline]
    fn from(default: DefaultAlignment) -> Self {
        default.to_alignment()
    }
}

// ─── HeaderAlignment ─────────────────────────────────────────────────────────

/// Alignment policy for header cells, layered over the column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum HeaderAlignment {
    /// Use whatever the column resolves to.
    #[default]
    Follow,
    /// Force header cells left.
    Left,
    /// Force header cells right.
    Right,
    /// Force header cells centered.
    Center,
}

impl HeaderAlignment {
    /// The override this policy imposes, or `None` for [`Self::Follow`].
    #[inline]
    #[must_use]
    pub const fn override_alignment(self) -> Option<Alignment> {
        match self {
            Self::Follow => None,
            Self::Left => Some(Alignment::Left),
            Self::Right => Some(Alignment::Right),
            Self::Center => Some(Alignment::Center),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_detection() {
        assert!(Alignment::None.is_unset());
        assert!(!Alignment::Left.is_unset());
        assert!(!Alignment::Right.is_unset());
        assert!(!Alignment::Center.is_unset());
    }

    #[test]
    fn or_default_resolves_only_the_unset_variant() {
        assert_eq!(
            Alignment::None.or_default(DefaultAlignment::Center),
            Alignment::Center
        );
        assert_eq!(
            Alignment::Right.or_default(DefaultAlignment::Center),
            Alignment::Right
        );
    }

    #[test]
    fn default_alignment_converts() {
        assert_eq!(Alignment::from(DefaultAlignment::Left), Alignment::Left);
        assert_eq!(Alignment::from(DefaultAlignment::Right), Alignment::Right);
        assert_eq!(Alignment::from(DefaultAlignment::Center), Alignment::Center);
    }

    #[test]
    fn header_follow_imposes_nothing() {
        assert_eq!(HeaderAlignment::Follow.override_alignment(), None);
        assert_eq!(
            HeaderAlignment::Center.override_alignment(),
            Some(Alignment::Center)
        );
    }

    #[test]
    fn defaults_are_the_unset_and_follow_variants() {
        assert_eq!(Alignment::default(), Alignment::None);
        assert_eq!(DefaultAlignment::default(), DefaultAlignment::Left);
        assert_eq!(HeaderAlignment::default(), HeaderAlignment::Follow);
    }
}
