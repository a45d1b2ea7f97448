//! Pipe-delimited Markdown tables.

pub mod parser;
pub mod serializer;

pub use parser::{parse_table, TableData};
pub use serializer::render_table;
