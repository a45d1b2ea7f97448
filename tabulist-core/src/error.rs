//! Error types for the host-facing layer.
//!
//! The conversion engine itself never fails: it either produces a complete
//! replacement or declines with `None`. These errors only appear where a
//! declined toggle or a bad edit has to be reported to a caller, see
//! [`crate::document`].

use thiserror::Error;

/// Why a toggle could not be applied to a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The cursor line is blank or outside the document.
    #[error("no block at line {line}")]
    NoBlock { line: usize },

    /// The located block holds neither list items nor table rows.
    #[error("lines {start_line}-{end_line} contain no list or table to convert")]
    NotConvertible { start_line: usize, end_line: usize },

    /// The replacement range does not fit the document.
    #[error("lines {start_line}-{end_line} are outside a document of {line_count} lines")]
    RangeOutOfBounds {
        start_line: usize,
        end_line: usize,
        line_count: usize,
    },
}

/// An option value that does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value '{value}', expected one of: {}", .expected.join(", "))]
pub struct UnknownVariant {
    pub value: String,
    pub expected: &'static [&'static str],
}
