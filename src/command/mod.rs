//! Slash-command text handling
//!
//! Turns the raw `text` field of a slash-command request into a [`Command`],
//! and encodes caption text for memegen's URL path dialect.

pub mod escape;
pub mod parser;

pub use escape::escape_caption;
pub use parser::{parse_command, Command, ParsedCommand, FIELD_SEPARATOR};
