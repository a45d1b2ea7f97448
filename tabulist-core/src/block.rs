//! Locating the block under the cursor and deciding which way to convert it.
//!
//! A block is the run of non-blank lines around the cursor. Blank lines and
//! the document edges are the only boundaries; the block's contents are not
//! inspected until [`detect_mode`] runs.

use crate::conversion::Mode;
use once_cell::sync::Lazy;
use regex::Regex;

static TABLE_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\|").expect("table row regex is valid"));

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:-|\*|[0-9]+\.)\s+").expect("list item regex is valid"));

/// A contiguous run of non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRange {
    /// First line of the block (0-based, inclusive).
    pub start_line: usize,
    /// Last line of the block (0-based, inclusive).
    pub end_line: usize,
    /// The captured lines, unmodified.
    pub lines: Vec<String>,
    /// Shortest leading whitespace among the block's lines.
    pub base_indent: String,
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub(crate) fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Finds the block enclosing `cursor_line`.
///
/// Returns `None` when the cursor is outside `lines` or sits on a blank line.
pub fn locate_block<S: AsRef<str>>(lines: &[S], cursor_line: usize) -> Option<BlockRange> {
    let cursor = lines.get(cursor_line)?.as_ref();
    if is_blank(cursor) {
        return None;
    }

    let mut start = cursor_line;
    while start > 0 && !is_blank(lines[start - 1].as_ref()) {
        start -= 1;
    }
    let mut end = cursor_line;
    while end + 1 < lines.len() && !is_blank(lines[end + 1].as_ref()) {
        end += 1;
    }

    let block: Vec<String> = lines[start..=end]
        .iter()
        .map(|line| line.as_ref().to_string())
        .collect();

    let mut base_indent: Option<&str> = None;
    for line in &block {
        let indent = leading_whitespace(line);
        match base_indent {
            Some(current) if current.chars().count() <= indent.chars().count() => {}
            _ => base_indent = Some(indent),
        }
    }
    let base_indent = base_indent.unwrap_or_default().to_string();

    log::debug!(
        "located block at lines {start}-{end} (cursor {cursor_line}, base indent {:?})",
        base_indent
    );

    Some(BlockRange {
        start_line: start,
        end_line: end,
        lines: block,
        base_indent,
    })
}

/// Decides which conversion applies to a block.
///
/// Table rows and list items are counted and the larger count wins. A tie
/// (including no matches at all) goes to whichever kind of line appears
/// first; a block with neither yields `None`.
pub fn detect_mode<S: AsRef<str>>(lines: &[S]) -> Option<Mode> {
    let table_rows = lines
        .iter()
        .filter(|line| TABLE_ROW.is_match(line.as_ref()))
        .count();
    let list_items = lines
        .iter()
        .filter(|line| LIST_ITEM.is_match(line.as_ref()))
        .count();

    if table_rows > list_items {
        return Some(Mode::TableToList);
    }
    if list_items > table_rows {
        return Some(Mode::ListToTable);
    }

    lines.iter().find_map(|line| {
        let line = line.as_ref();
        if TABLE_ROW.is_match(line) {
            Some(Mode::TableToList)
        } else if LIST_ITEM.is_match(line) {
            Some(Mode::ListToTable)
        } else {
            None
        }
    })
}
