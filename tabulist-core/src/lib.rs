//! Toggle Markdown blocks between nested key/value lists and pipe tables
//!
//!     Given the lines of a document and a cursor line, the engine finds the block under the
//!     cursor, decides which way it should go and returns a replacement for the block's line
//!     range. It never touches the document itself; hosts apply the replacement as one edit.
//!
//!     This is a pure lib: no printing, no env vars, no file access. The CLI (tabulist-cli) and
//!     the config loader (tabulist-config) are thin shells around it.
//!
//! Architecture
//!
//!     The two shapes meet in a flat row model. A list is parsed into a forest of nodes
//!     (./formats/list), flattened into rows with globally ordered columns
//!     (./common/nested_to_flat.rs) and rendered as a table (./formats/table/serializer.rs).
//!     The reverse direction parses the table (./formats/table/parser.rs) and expands each row
//!     back into nested items (./common/flat_to_nested.rs).
//!
//!     The file structure :
//!     .
//!     ├── block.rs                # Block locator and mode detector
//!     ├── conversion.rs           # Mode + Conversion trait
//!     ├── toggle.rs               # Locate, detect, convert
//!     ├── keys.rs                 # Key token spans for editor helpers
//!     ├── document.rs             # Plain text host binding
//!     ├── escape.rs               # Pipes, soft breaks, quoting, dotted keys
//!     ├── options.rs
//!     ├── error.rs
//!     ├── formats
//!     │   ├── list                # List parser
//!     │   └── table               # Table parser and renderer
//!     └── common                  # List <-> row mapping
//!
//! Testing
//!
//!     Unit tests sit next to the code. tests/ holds the scenario suites and the property
//!     tests; tests/lib.rs declares them as modules.
//!
//! Round trips
//!
//!     List to table to list is lossless for lists whose children are plain `key: value` items.
//!     Unkeyed children end up in unnamed value columns, and dotted column keys are not nested
//!     again on the way back, so deeper lists come back flatter than they went in.

pub mod block;
pub mod common;
pub mod conversion;
pub mod document;
pub mod error;
pub mod escape;
pub mod formats;
pub mod keys;
pub mod options;
pub mod toggle;

pub use block::{detect_mode, locate_block, BlockRange};
pub use conversion::{Conversion, Mode};
pub use document::{toggle_document, LineEnding, TextDocument};
pub use error::{ToggleError, UnknownVariant};
pub use keys::{key_occurrences_in_block, key_range_in_line, KeyOccurrence, KeyRange};
pub use options::{ListMarkerStyle, ToggleOptions, ValueEscapeStyle};
pub use toggle::{toggle, try_toggle, ToggleResult};

/// Converts the lines of a list block into table lines.
///
/// Every produced line starts with `base_indent`.
pub fn convert_list_to_table<S: AsRef<str>>(
    lines: &[S],
    options: &ToggleOptions,
    base_indent: &str,
) -> Vec<String> {
    common::nested_to_flat::list_to_table(lines, options, base_indent)
}

/// Converts the lines of a table block into list lines.
///
/// A block without any table row comes back unchanged.
pub fn convert_table_to_list<S: AsRef<str>>(
    lines: &[S],
    options: &ToggleOptions,
    base_indent: &str,
) -> Vec<String> {
    common::flat_to_nested::table_to_list(lines, options, base_indent)
}
