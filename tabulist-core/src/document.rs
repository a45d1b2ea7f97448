//! A plain-text document host for the toggle engine.
//!
//! Editors own their buffers and apply [`ToggleResult`]s themselves. Hosts
//! that only have a string (the CLI, tests, scripts) use [`TextDocument`]:
//! it splits the text into lines, applies a replacement as one splice and
//! writes the text back. Every line keeps the terminator it was read with,
//! so lines outside a replaced range come back byte for byte.

use crate::error::ToggleError;
use crate::options::ToggleOptions;
use crate::toggle::{try_toggle, ToggleResult};

/// Line terminator of a document line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// Lines of a text document plus what is needed to reassemble it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextDocument {
    lines: Vec<String>,
    /// Terminator of each line; `None` for a last line without one.
    endings: Vec<Option<LineEnding>>,
    /// Most common terminator, used for lines a replacement adds.
    line_ending: LineEnding,
}

impl TextDocument {
    /// Splits `source` into lines at `\n`, `\r\n` and lone `\r`.
    pub fn parse(source: &str) -> Self {
        let mut lines = Vec::new();
        let mut endings = Vec::new();
        let mut rest = source;

        while !rest.is_empty() {
            let Some(index) = rest.find(|c: char| c == '\r' || c == '\n') else {
                lines.push(rest.to_string());
                endings.push(None);
                break;
            };
            let (ending, len) = if rest[index..].starts_with("\r\n") {
                (LineEnding::CrLf, 2)
            } else if rest[index..].starts_with('\r') {
                (LineEnding::Cr, 1)
            } else {
                (LineEnding::Lf, 1)
            };
            lines.push(rest[..index].to_string());
            endings.push(Some(ending));
            rest = &rest[index + len..];
        }

        let line_ending = dominant_ending(&endings);
        TextDocument {
            lines,
            endings,
            line_ending,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The most common line terminator (`Lf` on ties or without any).
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Replaces the result's line range with its replacement lines.
    ///
    /// New lines end with the document's most common terminator, except the
    /// last one, which keeps the terminator of the last replaced line. The
    /// document is left untouched when the range does not fit.
    pub fn apply(&mut self, result: &ToggleResult) -> Result<(), ToggleError> {
        if result.start_line > result.end_line || result.end_line >= self.lines.len() {
            return Err(ToggleError::RangeOutOfBounds {
                start_line: result.start_line,
                end_line: result.end_line,
                line_count: self.lines.len(),
            });
        }

        let range = result.start_line..=result.end_line;
        let last_ending = self.endings[result.end_line];
        let count = result.replacement.len();
        let endings: Vec<Option<LineEnding>> = (0..count)
            .map(|i| {
                if i + 1 == count {
                    last_ending
                } else {
                    Some(self.line_ending)
                }
            })
            .collect();

        self.lines
            .splice(range.clone(), result.replacement.iter().cloned());
        self.endings.splice(range, endings);
        Ok(())
    }

    /// Joins the lines back into text.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (line, ending) in self.lines.iter().zip(&self.endings) {
            text.push_str(line);
            if let Some(ending) = ending {
                text.push_str(ending.as_str());
            }
        }
        text
    }
}

fn dominant_ending(endings: &[Option<LineEnding>]) -> LineEnding {
    let count = |wanted: LineEnding| endings.iter().filter(|e| **e == Some(wanted)).count();
    let (lf, crlf, cr) = (
        count(LineEnding::Lf),
        count(LineEnding::CrLf),
        count(LineEnding::Cr),
    );
    if crlf > lf && crlf >= cr {
        LineEnding::CrLf
    } else if cr > lf && cr > crlf {
        LineEnding::Cr
    } else {
        LineEnding::Lf
    }
}

/// Toggles the block under `cursor_line` and applies the result.
pub fn toggle_document(
    document: &mut TextDocument,
    cursor_line: usize,
    options: &ToggleOptions,
) -> Result<ToggleResult, ToggleError> {
    let result = try_toggle(document.lines(), cursor_line, options)?;
    document.apply(&result)?;
    Ok(result)
}
