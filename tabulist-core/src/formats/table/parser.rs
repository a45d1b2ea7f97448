//! Splits pipe-delimited lines into a header row and data rows.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:?-{3,}:?$").expect("separator regex is valid"));

/// A parsed pipe table. Cell text is trimmed but otherwise left escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Rows truncated or right-padded with empty cells to the header width.
    pub fn padded_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| pad_row(row, self.headers.len()))
            .collect()
    }
}

/// Truncates or right-pads `row` with empty cells to exactly `width` cells.
pub fn pad_row(row: &[String], width: usize) -> Vec<String> {
    let mut padded: Vec<String> = row.iter().take(width).cloned().collect();
    padded.resize(width, String::new());
    padded
}

/// Parses the table lines of a block.
///
/// Lines that do not start with `|` (after trimming) are ignored. The first
/// remaining line is the header; a second line made only of dash cells
/// (`---`, `:---`, `---:`, `:---:`) is treated as the separator and skipped.
/// Returns `None` when no line starts with `|`.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> Option<TableData> {
    let mut rows = lines
        .iter()
        .filter_map(|line| strip_outer_pipes(line.as_ref()))
        .map(split_cells);

    let headers = rows.next()?;
    let mut rows: Vec<Vec<String>> = rows.collect();

    if rows.first().is_some_and(|row| is_separator_row(row)) {
        log::trace!("skipping separator row");
        rows.remove(0);
    }

    Some(TableData { headers, rows })
}

fn strip_outer_pipes(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|')?;
    Some(inner.strip_suffix('|').unwrap_or(inner))
}

/// Splits on `|` not preceded by an escaping backslash.
///
/// A backslash escapes exactly the next character and is kept in the cell,
/// so `a\|b` stays one cell while `a\\|b` splits after the second backslash.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for ch in line.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => {
                escaped = true;
                current.push(ch);
            }
            '|' => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_string());
    cells
}

fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty() && cells.iter().all(|cell| SEPARATOR_CELL.is_match(cell.trim()))
}
