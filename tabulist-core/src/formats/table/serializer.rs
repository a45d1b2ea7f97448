//! Renders headers and rows as a Markdown pipe table.
//!
//! Widths are measured in terminal/display columns with `unicode-width`, so
//! CJK and other double-width characters count as two. A cell holding soft
//! breaks is as wide as its widest segment, since that is what the reader
//! sees once the `<br>` tokens are rendered.

use crate::escape::SOFT_BREAK;
use crate::formats::table::parser::pad_row;
use unicode_width::UnicodeWidthStr;

/// Narrowest column, wide enough for the `---` separator.
const MIN_COLUMN_WIDTH: usize = 3;

/// Display width of a cell: the widest of its soft-break segments.
pub fn cell_width(cell: &str) -> usize {
    cell.split(SOFT_BREAK)
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

fn pad_cell(cell: &str, width: usize) -> String {
    let current = cell_width(cell);
    if current >= width {
        cell.to_string()
    } else {
        format!("{cell}{}", " ".repeat(width - current))
    }
}

fn render_row(cells: &[String], widths: Option<&[usize]>) -> String {
    let cells: Vec<String> = match widths {
        Some(widths) => cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| pad_cell(cell, width))
            .collect(),
        None => cells.to_vec(),
    };
    format!("| {} |", cells.join(" | "))
}

/// Renders a table, every line prefixed with `base_indent`.
///
/// The column count is the widest of the header and all rows; shorter rows
/// are padded with empty cells. With `format` set, cells are padded to their
/// column width and the separator spans the full width; otherwise cells are
/// joined as-is and the separator is `---` per column.
pub fn render_table(
    headers: &[String],
    rows: &[Vec<String>],
    format: bool,
    base_indent: &str,
) -> Vec<String> {
    let column_count = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    let header = pad_row(headers, column_count);
    let rows: Vec<Vec<String>> = rows.iter().map(|row| pad_row(row, column_count)).collect();

    let mut widths = vec![MIN_COLUMN_WIDTH; column_count];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell_width(cell));
        }
    }

    let layout = format.then_some(widths.as_slice());
    let separator: Vec<String> = widths
        .iter()
        .map(|&width| "-".repeat(if format { width } else { MIN_COLUMN_WIDTH }))
        .collect();

    let mut output = Vec::with_capacity(rows.len() + 2);
    output.push(render_row(&header, layout));
    output.push(format!("| {} |", separator.join(" | ")));
    output.extend(rows.iter().map(|row| render_row(row, layout)));

    output
        .into_iter()
        .map(|line| format!("{base_indent}{line}"))
        .collect()
}
