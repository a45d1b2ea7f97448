//! The two Markdown representations a block can take.
//!
//! Each format has a parser that reads a block into a structural model; the
//! table format also has a serializer. Turning one model into the other
//! representation lives in [`crate::common`].

pub mod list;
pub mod table;
