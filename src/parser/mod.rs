//! Parsing for the record format
//!
//! ## Modules
//!
//! - `builder` - the incremental tree builder (insertion cursor, level checks)
//! - `api` - public parse entry points

pub mod api;
pub mod builder;

pub use api::{parse, parse_str, DEFAULT_DOCUMENT_NAME};
