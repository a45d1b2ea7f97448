//! Escaping and normalization helpers shared by both conversion directions.
//!
//! A table cell is a single physical line, so anything that would break that
//! (line breaks, bare pipes) must be encoded on the way in and decoded on the
//! way out:
//!
//! - line breaks become the soft-break token [`SOFT_BREAK`] (`<br>`);
//!   `<br/>` and `<br />` are accepted on input in any case
//! - pipes become `\|`, optionally leaving code spans and fenced code intact
//! - literal dots in key names become `\.` so dotted key paths stay unambiguous

use crate::options::{ListMarkerStyle, ValueEscapeStyle};
use once_cell::sync::Lazy;
use regex::Regex;

/// Token used to store an embedded line break inside one table cell.
pub const SOFT_BREAK: &str = "<br>";

static BR_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("br tag regex is valid"));

static FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(`{3,}|~{3,})").expect("fence regex is valid"));

/// A list item's text split at its first `": "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Splits `text` at the first `": "`. Returns `None` when there is no key.
pub fn split_key_value(text: &str) -> Option<KeyValue<'_>> {
    let index = text.find(": ")?;
    Some(KeyValue {
        key: &text[..index],
        value: &text[index + 2..],
    })
}

pub fn escape_key_segment(key: &str) -> String {
    key.replace('.', "\\.")
}

pub fn unescape_key_segment(key: &str) -> String {
    key.replace("\\.", ".")
}

/// The literal marker written for a configured list style.
pub fn list_marker(style: ListMarkerStyle) -> &'static str {
    match style {
        ListMarkerStyle::Bullet => "-",
        ListMarkerStyle::Ordered => "1.",
        ListMarkerStyle::Asterisk => "*",
    }
}

/// Collapses CRLF and lone CR into `\n`.
pub fn normalize_line_endings(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "\n")
}

/// Escapes pipe characters so `value` can live inside a table cell.
///
/// With `smart` disabled every `|` is escaped. With `smart` enabled, pipes
/// inside fenced code blocks (```` ``` ```` or `~~~`, closed by a fence of
/// the same character at least as long) and inside inline code spans are
/// left alone.
///
/// Backslashes are not escaped. A value holding a literal `\|` becomes
/// `\\|`, which the table parser reads as an escaped backslash followed by
/// a cell separator.
pub fn escape_pipes(value: &str, smart: bool) -> String {
    if !smart {
        return value.replace('|', "\\|");
    }

    let normalized = normalize_line_endings(value);
    let mut open_fence: Option<String> = None;
    let mut escaped = Vec::new();

    for line in normalized.split('\n') {
        if let Some(captures) = FENCE_OPEN.captures(line) {
            let marker = &captures[1];
            match &open_fence {
                None => open_fence = Some(marker.to_string()),
                Some(open) if closes_fence(open, marker) => open_fence = None,
                Some(_) => {}
            }
            escaped.push(line.to_string());
            continue;
        }
        if open_fence.is_some() {
            escaped.push(line.to_string());
        } else {
            escaped.push(escape_pipes_outside_code_spans(line));
        }
    }

    escaped.join("\n")
}

fn closes_fence(open: &str, candidate: &str) -> bool {
    open.chars().next() == candidate.chars().next() && candidate.len() >= open.len()
}

/// Escapes pipes on one line, skipping backtick code spans.
///
/// A span opened by a run of N backticks is closed by the next run of at
/// least N backticks. An unclosed span runs to the end of the line.
fn escape_pipes_outside_code_spans(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut result = String::with_capacity(line.len());
    let mut span_ticks: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '`' {
            let run = chars[i..].iter().take_while(|&&c| c == '`').count();
            span_ticks = match span_ticks {
                None => Some(run),
                Some(open) if run >= open => None,
                still_open => still_open,
            };
            result.extend(std::iter::repeat('`').take(run));
            i += run;
            continue;
        }
        if chars[i] == '|' && span_ticks.is_none() {
            result.push_str("\\|");
        } else {
            result.push(chars[i]);
        }
        i += 1;
    }

    result
}

/// Replaces every line break with the soft-break token.
pub fn line_breaks_to_soft_breaks(value: &str) -> String {
    normalize_line_endings(value).replace('\n', SOFT_BREAK)
}

/// Rewrites every `<br>` spelling (`<br/>`, `<BR />`, ...) to [`SOFT_BREAK`].
pub fn normalize_soft_breaks(value: &str) -> String {
    BR_TAG.replace_all(value, SOFT_BREAK).into_owned()
}

/// Expands soft-break tokens into physical lines.
///
/// The first line is returned as-is; every following line is prefixed with
/// `continuation_indent`.
pub fn restore_line_breaks(value: &str, continuation_indent: &str) -> Vec<String> {
    let normalized = normalize_soft_breaks(value);
    let mut parts = normalized.split(SOFT_BREAK);
    let mut lines = vec![parts.next().unwrap_or_default().to_string()];
    lines.extend(parts.map(|part| format!("{continuation_indent}{part}")));
    lines
}

/// Applies the configured quoting policy to a list value.
pub fn apply_value_escape(value: &str, style: ValueEscapeStyle) -> String {
    let needs_quotes = match style {
        ValueEscapeStyle::None => false,
        ValueEscapeStyle::Always => true,
        ValueEscapeStyle::Smart => {
            value.starts_with(char::is_whitespace)
                || value.ends_with(char::is_whitespace)
                || value.contains('"')
                || value.contains(SOFT_BREAK)
                || value.contains('\n')
        }
    };
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
