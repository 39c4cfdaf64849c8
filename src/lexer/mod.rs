//! Line lexing for the record format
//!
//! ## Modules
//!
//! - `tokens` - logos-derived token definitions for a single input line
//! - `classify` - ordered classification of a line's tokens into a record

pub mod classify;
pub mod tokens;

pub use classify::{classify_line, Record};
pub use tokens::{tokenize, Token};
