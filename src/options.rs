//! Formatter configuration.
//!
//! Every knob the structural operations accept lives in one explicit
//! struct with documented fields and usable defaults, so hosts configure
//! by record update rather than by assembling loose maps:
//!
//! ```
//! use gridmark::options::{FormatType, FormatterOptions};
//!
//! let options = FormatterOptions {
//!     format_type: FormatType::Weak,
//!     ..FormatterOptions::default()
//! };
//! assert_eq!(options.min_delimiter_width, 3);
//! ```

use gridmark_text::alignment::{DefaultAlignment, HeaderAlignment};
use gridmark_text::width::TextWidthOptions;

/// Which reformatting policy [`format_table`] applies.
///
/// [`format_table`]: crate::formatter::format_table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FormatType {
    /// Complete the table, then re-render every cell padded and aligned to
    /// its column width.
    #[default]
    Normal,
    /// Touch only the delimiter row and the margins, leaving cell text
    /// byte-for-byte alone — minimal diff noise while typing.
    Weak,
}

/// Options for the formatting and structural-editing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOptions {
    /// The policy [`format_table`](crate::formatter::format_table) runs.
    pub format_type: FormatType,
    /// Minimum dash count of a delimiter cell; also the floor every
    /// delimiter-covered column is rendered at.
    pub min_delimiter_width: usize,
    /// Alignment for columns whose delimiter cell carries no marker.
    pub default_alignment: DefaultAlignment,
    /// Alignment policy for the header row.
    pub header_alignment: HeaderAlignment,
    /// How display width is measured.
    pub text_width_options: TextWidthOptions,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            format_type: FormatType::Normal,
            min_delimiter_width: 3,
            default_alignment: DefaultAlignment::Left,
            header_alignment: HeaderAlignment::Follow,
            text_width_options: TextWidthOptions::default(),
        }
    }
}
