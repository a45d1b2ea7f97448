//! Flattens a parsed list forest into table rows.
//!
//! # The High-Level Concept
//!
//! Every root item becomes one table row; its text fills the first column
//! unchanged. Its descendants are folded into `key -> value` cells, where the
//! key is the item's text before the first `": "`. Nested keys are joined
//! into dotted paths (`address.city`) so the table stays two-dimensional.
//!
//! # The Algorithm
//!
//! 1. **Per row:** walk the root's children with an empty path prefix.
//!
//! 2. **Keyed items** (`key: value`):
//!    - the key segment is trimmed and its dots escaped as `\.`, then
//!      appended to the prefix
//!    - the value is recorded when it is non-empty or the item is a leaf
//!    - with flattening on, children are walked under the new path; if that
//!      records nothing and the item had no value, the children are written
//!      out as indented text instead
//!    - with flattening off, children are always written out as indented
//!      text after the value
//!
//! 3. **Unkeyed items:** the text (plus written-out children) goes to the
//!    active path, or, at the top level, to the next positional `ColN`
//!    column.
//!
//! 4. **Columns:** the root column, then every key in the order it was first
//!    recorded (rows top to bottom, depth-first within a row), then
//!    `Col1..ColN`.
//!
//! Assigning a key twice on one row appends the new value after a line
//! break. Column order is tracked in an explicit sequence, never derived
//! from a map's iteration order.

use crate::escape::{escape_key_segment, escape_pipes, line_breaks_to_soft_breaks, split_key_value};
use crate::formats::list::{parse_list, ListNode};
use crate::formats::table::{render_table, TableData};
use crate::options::ToggleOptions;
use std::collections::HashSet;

/// The intermediate form of one table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowData {
    /// The root item's text, not split into key and value.
    pub root_value: String,
    /// Keyed cells in the order they were first assigned.
    pub key_values: Vec<(String, String)>,
    /// Unkeyed top-level values, in order.
    pub value_columns: Vec<String>,
}

impl RowData {
    fn new(root_value: &str) -> Self {
        RowData {
            root_value: root_value.to_string(),
            ..Default::default()
        }
    }

    /// Assigns `value` to `key`, appending after a line break when the key
    /// already holds a non-empty value.
    pub fn assign(&mut self, key: &str, value: &str) {
        match self.key_values.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) if existing.is_empty() => *existing = value.to_string(),
            Some((_, existing)) => {
                existing.push('\n');
                existing.push_str(value);
            }
            None => self.key_values.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.key_values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Distinct keys in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct KeyOrder {
    keys: Vec<String>,
    seen: HashSet<String>,
}

impl KeyOrder {
    pub fn record(&mut self, key: &str) {
        if self.seen.insert(key.to_string()) {
            self.keys.push(key.to_string());
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Rows and column keys produced from a list forest.
#[derive(Debug, Clone, Default)]
pub struct FlatRows {
    pub rows: Vec<RowData>,
    pub key_order: KeyOrder,
}

impl FlatRows {
    /// Widest positional value count across rows.
    pub fn value_column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.value_columns.len())
            .max()
            .unwrap_or(0)
    }
}

struct Flattener<'a> {
    options: &'a ToggleOptions,
    key_order: KeyOrder,
}

impl Flattener<'_> {
    fn record(&mut self, row: &mut RowData, key: &str, value: &str) {
        row.assign(key, value);
        self.key_order.record(key);
    }

    /// Walks `nodes` under `prefix`. Returns whether any key was recorded.
    fn collect(&mut self, nodes: &[ListNode], prefix: &str, row: &mut RowData) -> bool {
        let mut recorded = false;

        for node in nodes {
            let Some(kv) = split_key_value(&node.text) else {
                let text = if node.children.is_empty() {
                    node.text.clone()
                } else {
                    format!("{}\n{}", node.text, serialize_children(&node.children, 0))
                };
                if prefix.is_empty() {
                    row.value_columns.push(text);
                } else {
                    self.record(row, prefix, &text);
                    recorded = true;
                }
                continue;
            };

            let segment = escape_key_segment(kv.key.trim());
            let full_key = if prefix.is_empty() {
                segment
            } else {
                format!("{prefix}.{segment}")
            };
            let has_value = !kv.value.is_empty();

            if has_value || node.children.is_empty() {
                self.record(row, &full_key, kv.value);
                recorded = true;
            }
            if node.children.is_empty() {
                continue;
            }

            if self.options.flatten_nested_keys {
                let child_recorded = self.collect(&node.children, &full_key, row);
                if child_recorded {
                    recorded = true;
                } else if !has_value {
                    let nested = serialize_children(&node.children, 0);
                    if !nested.is_empty() {
                        self.record(row, &full_key, &nested);
                        recorded = true;
                    }
                }
            } else {
                // The value, if any, is already recorded; the merge appends
                // the children after it.
                let nested = serialize_children(&node.children, 0);
                self.record(row, &full_key, &nested);
                recorded = true;
            }
        }

        recorded
    }
}

/// Writes items back out as plain text, two spaces per depth, markers dropped.
fn serialize_children(nodes: &[ListNode], depth: usize) -> String {
    let prefix = "  ".repeat(depth);
    let mut lines = Vec::new();
    for node in nodes {
        lines.push(format!("{prefix}{}", node.text));
        if !node.children.is_empty() {
            let nested = serialize_children(&node.children, depth + 1);
            if !nested.is_empty() {
                lines.push(nested);
            }
        }
    }
    lines.join("\n")
}

/// Folds each root item of the forest into a [`RowData`].
pub fn flatten(nodes: &[ListNode], options: &ToggleOptions) -> FlatRows {
    let mut flattener = Flattener {
        options,
        key_order: KeyOrder::default(),
    };
    let rows = nodes
        .iter()
        .map(|node| {
            let mut row = RowData::new(&node.text);
            flattener.collect(&node.children, "", &mut row);
            row
        })
        .collect();

    FlatRows {
        rows,
        key_order: flattener.key_order,
    }
}

/// Makes a value safe for a single table cell: unified line endings, pipes
/// escaped, line breaks turned into soft breaks.
pub fn normalize_cell(value: &str, options: &ToggleOptions) -> String {
    line_breaks_to_soft_breaks(&escape_pipes(value, options.smart_pipe_escape))
}

/// Lays flattened rows out as table cells, ready to render.
pub fn build_table(flat: &FlatRows, options: &ToggleOptions) -> TableData {
    let keys = flat.key_order.keys();
    let value_columns = flat.value_column_count();

    let headers = std::iter::once(options.root_header_name.clone())
        .chain(keys.iter().cloned())
        .chain((1..=value_columns).map(|n| format!("Col{n}")))
        .map(|header| normalize_cell(&header, options))
        .collect();

    let rows = flat
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.root_value.as_str())
                .chain(keys.iter().map(|key| row.get(key).unwrap_or_default()))
                .chain((0..value_columns).map(|i| {
                    row.value_columns.get(i).map(String::as_str).unwrap_or_default()
                }))
                .map(|cell| normalize_cell(cell, options))
                .collect()
        })
        .collect();

    TableData { headers, rows }
}

/// Converts list lines into rendered table lines.
pub fn list_to_table<S: AsRef<str>>(
    lines: &[S],
    options: &ToggleOptions,
    base_indent: &str,
) -> Vec<String> {
    let nodes = parse_list(lines);
    let flat = flatten(&nodes, options);
    let table = build_table(&flat, options);
    log::debug!(
        "flattened {} list items into {} rows x {} columns",
        nodes.len(),
        table.rows.len(),
        table.headers.len()
    );
    render_table(&table.headers, &table.rows, options.format_table, base_indent)
}
