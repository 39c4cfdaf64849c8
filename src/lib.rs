//! # outliner
//!
//! A parser for the record document format: line-oriented `HEADING` and
//! `PARAGRAPH` records, plus whitespace-led continuation lines, parsed into
//! a document tree and rendered as an indented, auto-numbered outline.
//!
//! ```text
//! HEADING 1 All About Birds
//! HEADING 2 Kinds of Birds
//! HEADING 3 The Finch
//! PARAGRAPH The true finches are small to medium-sized passerine birds
//!           in the family Fringillidae.
//! ```
//!
//! The pipeline is line-based: each line is lexed into tokens ([`lexer`]),
//! classified into a record ([`lexer::classify`]), and fed to the tree
//! builder ([`parser`]), which maintains an insertion cursor down the
//! heading chain. The resulting [`Document`](ast::Document) can be rendered
//! through the [`formats`] module.

pub mod ast;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;

pub use ast::{Document, Node, NodeId, NodeKind};
pub use error::{ParseError, TokenizeReason};
pub use parser::{parse, parse_str, DEFAULT_DOCUMENT_NAME};
