//! Expands table rows back into nested list items.
//!
//! Each data row becomes a root item holding the first cell; every other
//! column becomes a child item `key: value` one level deeper. Soft breaks in
//! a cell turn back into physical lines, aligned under the start of the
//! item's text (for the root) or of its value (for children).
//!
//! Dotted column keys such as `address.city` are emitted as a single child
//! item; they are not re-nested into `address` / `city` levels.

use crate::escape::{
    apply_value_escape, list_marker, normalize_soft_breaks, restore_line_breaks,
    unescape_key_segment,
};
use crate::formats::table::{parse_table, TableData};
use crate::options::ToggleOptions;
use unicode_width::UnicodeWidthStr;

/// Nesting step for child items.
const CHILD_INDENT: &str = "  ";

fn prepare_value(cell: &str, options: &ToggleOptions) -> String {
    let unescaped = cell.replace("\\|", "|");
    let normalized = normalize_soft_breaks(&unescaped);
    apply_value_escape(&normalized, options.value_escape_style)
}

/// Emits one list item, spreading soft breaks over continuation lines.
///
/// `head` is the marker (and key) written after `indent`; continuation lines
/// repeat `indent` and then pad to the display width of `head`.
fn push_item(output: &mut Vec<String>, indent: &str, head: &str, value: &str) {
    let continuation = format!("{indent}{}", " ".repeat(head.width()));
    let mut lines = restore_line_breaks(value, &continuation).into_iter();
    let first = lines.next().unwrap_or_default();
    output.push(format!("{indent}{head}{first}"));
    output.extend(lines);
}

/// Renders parsed table data as list lines.
pub fn expand_table(table: &TableData, options: &ToggleOptions, base_indent: &str) -> Vec<String> {
    let headers: Vec<String> = table
        .headers
        .iter()
        .map(|header| unescape_key_segment(header))
        .collect();
    let marker = list_marker(options.list_marker_style);
    let nested_indent = format!("{base_indent}{CHILD_INDENT}");

    let mut output = Vec::new();
    for row in table.padded_rows() {
        let root = prepare_value(row.first().map(String::as_str).unwrap_or_default(), options);
        push_item(&mut output, base_indent, &format!("{marker} "), &root);

        for (key, cell) in headers.iter().zip(&row).skip(1) {
            if !options.output_empty_keys && cell.trim().is_empty() {
                continue;
            }
            let value = prepare_value(cell, options);
            push_item(&mut output, &nested_indent, &format!("{marker} {key}: "), &value);
        }
    }
    output
}

/// Converts table lines into list lines.
///
/// When no line of the block is a table row the input is returned unchanged.
pub fn table_to_list<S: AsRef<str>>(
    lines: &[S],
    options: &ToggleOptions,
    base_indent: &str,
) -> Vec<String> {
    let Some(table) = parse_table(lines) else {
        log::debug!("no table rows found; leaving block unchanged");
        return lines.iter().map(|line| line.as_ref().to_string()).collect();
    };
    let output = expand_table(&table, options, base_indent);
    log::debug!(
        "expanded {} table rows into {} list lines",
        table.rows.len(),
        output.len()
    );
    output
}
