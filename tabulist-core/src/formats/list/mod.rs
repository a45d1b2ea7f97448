//! Nested bulleted/numbered lists.

pub mod parser;

pub use parser::{parse_list, ListNode};
