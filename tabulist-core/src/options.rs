//! Options that steer both conversion directions.

use crate::error::UnknownVariant;
use serde::Deserialize;
use std::str::FromStr;

/// How values are quoted when a table is expanded back into a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueEscapeStyle {
    /// Values are written bare.
    #[default]
    None,
    /// Values are quoted only when they would not survive bare
    /// (surrounding whitespace, quotes, line breaks).
    Smart,
    /// Every value is quoted.
    Always,
}

/// Marker used for list items produced from a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMarkerStyle {
    /// `-`
    #[default]
    Bullet,
    /// `1.`
    Ordered,
    /// `*`
    Asterisk,
}

impl FromStr for ValueEscapeStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ValueEscapeStyle::None),
            "smart" => Ok(ValueEscapeStyle::Smart),
            "always" => Ok(ValueEscapeStyle::Always),
            _ => Err(UnknownVariant {
                value: s.to_string(),
                expected: &["none", "smart", "always"],
            }),
        }
    }
}

impl FromStr for ListMarkerStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bullet" => Ok(ListMarkerStyle::Bullet),
            "ordered" => Ok(ListMarkerStyle::Ordered),
            "asterisk" => Ok(ListMarkerStyle::Asterisk),
            _ => Err(UnknownVariant {
                value: s.to_string(),
                expected: &["bullet", "ordered", "asterisk"],
            }),
        }
    }
}

/// Knobs for a single toggle call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOptions {
    /// Header of the first table column, holding each root item's text.
    pub root_header_name: String,
    /// Emit `key: ` lines for blank cells when expanding a table.
    pub output_empty_keys: bool,
    pub value_escape_style: ValueEscapeStyle,
    pub list_marker_style: ListMarkerStyle,
    /// Pad cells so table columns line up.
    pub format_table: bool,
    /// Leave pipes inside code spans and fences unescaped.
    pub smart_pipe_escape: bool,
    /// Fold nested `key: value` children into dotted column keys.
    pub flatten_nested_keys: bool,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        ToggleOptions {
            root_header_name: "Item".to_string(),
            output_empty_keys: true,
            value_escape_style: ValueEscapeStyle::None,
            list_marker_style: ListMarkerStyle::Bullet,
            format_table: true,
            smart_pipe_escape: true,
            flatten_nested_keys: true,
        }
    }
}
