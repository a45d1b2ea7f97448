//! The toggle engine: locate, detect, convert.

use crate::block::{detect_mode, locate_block};
use crate::conversion::Mode;
use crate::error::ToggleError;
use crate::options::ToggleOptions;

/// A replacement for an inclusive range of document lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResult {
    pub start_line: usize,
    pub end_line: usize,
    pub mode: Mode,
    pub replacement: Vec<String>,
}

/// Converts the block under `cursor_line` to the other representation.
///
/// Returns `None` when the cursor is not inside a block or the block holds
/// neither a list nor a table. The caller replaces `start_line..=end_line`
/// with `replacement` in one edit.
pub fn toggle<S: AsRef<str>>(
    lines: &[S],
    cursor_line: usize,
    options: &ToggleOptions,
) -> Option<ToggleResult> {
    try_toggle(lines, cursor_line, options).ok()
}

/// Like [`toggle`], but says why nothing was converted.
pub fn try_toggle<S: AsRef<str>>(
    lines: &[S],
    cursor_line: usize,
    options: &ToggleOptions,
) -> Result<ToggleResult, ToggleError> {
    let Some(block) = locate_block(lines, cursor_line) else {
        log::debug!("no block at line {cursor_line}");
        return Err(ToggleError::NoBlock { line: cursor_line });
    };
    let Some(mode) = detect_mode(&block.lines) else {
        log::debug!(
            "lines {}-{} hold no list or table",
            block.start_line,
            block.end_line
        );
        return Err(ToggleError::NotConvertible {
            start_line: block.start_line,
            end_line: block.end_line,
        });
    };

    let conversion = mode.conversion();
    log::debug!(
        "converting lines {}-{} {}",
        block.start_line,
        block.end_line,
        conversion.mode()
    );
    let replacement = conversion.convert(&block.lines, options, &block.base_indent);

    Ok(ToggleResult {
        start_line: block.start_line,
        end_line: block.end_line,
        mode,
        replacement,
    })
}
