//! Conversion trait definition
//!
//! A block is converted in one of two directions. Each direction is a
//! [`Conversion`] so the toggle engine can dispatch on the detected [`Mode`]
//! without knowing how either side is parsed or rendered.

use crate::common::{flat_to_nested, nested_to_flat};
use crate::options::ToggleOptions;
use serde::Serialize;
use std::fmt;

/// Direction of a toggle, as decided by [`crate::block::detect_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    ListToTable,
    TableToList,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::ListToTable => "list-to-table",
            Mode::TableToList => "table-to-list",
        }
    }

    /// The conversion that implements this direction.
    pub fn conversion(&self) -> &'static dyn Conversion {
        match self {
            Mode::ListToTable => &ListToTable,
            Mode::TableToList => &TableToList,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for block conversions
///
/// Implementors take the raw lines of a block and return the complete
/// replacement lines. A conversion never fails: input it cannot make sense
/// of comes back unchanged.
pub trait Conversion: Send + Sync {
    /// The direction this conversion implements.
    fn mode(&self) -> Mode;

    /// Convert `lines`, prefixing every produced line with `base_indent`.
    fn convert(&self, lines: &[String], options: &ToggleOptions, base_indent: &str)
        -> Vec<String>;
}

/// Nested list to pipe table.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListToTable;

impl Conversion for ListToTable {
    fn mode(&self) -> Mode {
        Mode::ListToTable
    }

    fn convert(&self, lines: &[String], options: &ToggleOptions, base_indent: &str) -> Vec<String> {
        nested_to_flat::list_to_table(lines, options, base_indent)
    }
}

/// Pipe table to nested list.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableToList;

impl Conversion for TableToList {
    fn mode(&self) -> Mode {
        Mode::TableToList
    }

    fn convert(&self, lines: &[String], options: &ToggleOptions, base_indent: &str) -> Vec<String> {
        flat_to_nested::table_to_list(lines, options, base_indent)
    }
}
