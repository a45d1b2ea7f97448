//! Locating key tokens in list lines.
//!
//! A key is the text between a list marker and the first following `:`.
//! Editor helpers (rename, highlight, key completion) use these spans; they
//! match keys by exact text only, so `a.b` and a nested `b` under `a` are
//! different keys here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static KEYED_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*(?:-|\*|[0-9]+\.)\s+)(.+?)\s*:").expect("keyed item regex is valid")
});

/// A key token within one line. Columns are char offsets, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRange {
    pub key: String,
    pub start: usize,
    pub end: usize,
}

/// A key token found in a block, `line` relative to the block's first line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyOccurrence {
    pub line: usize,
    pub key: String,
    pub start: usize,
    pub end: usize,
}

/// Finds the key token of a list line, excluding the colon and any
/// surrounding whitespace.
pub fn key_range_in_line(line: &str) -> Option<KeyRange> {
    let captures = KEYED_ITEM.captures(line)?;
    let key = captures.get(2)?;
    let start = line[..key.start()].chars().count();
    let key = key.as_str().to_string();
    let end = start + key.chars().count();
    Some(KeyRange { key, start, end })
}

/// Every line of the block whose key token is exactly `key`.
pub fn key_occurrences_in_block<S: AsRef<str>>(lines: &[S], key: &str) -> Vec<KeyOccurrence> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line, text)| {
            let range = key_range_in_line(text.as_ref())?;
            (range.key == key).then(|| KeyOccurrence {
                line,
                key: range.key,
                start: range.start,
                end: range.end,
            })
        })
        .collect()
}
