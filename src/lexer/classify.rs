//! Line classification
//!
//! Determines what one raw line means. Classification follows a fixed check
//! order (important for correctness):
//!
//! 1. First word is `HEADING` -> heading record (level token, then content)
//! 2. First word is `PARAGRAPH` -> paragraph record
//! 3. Line starts with whitespace -> continuation of the previous record
//! 4. Anything else fails tokenization
//!
//! Because the keyword checks run first, an indented line whose first word
//! is a record keyword still opens a record rather than a continuation.
//! Content is reconstructed by joining the remaining words with single
//! spaces, so multi-space runs in the source are not preserved.

use crate::error::TokenizeReason;
use crate::lexer::tokens::{tokenize, Token};

/// Keyword opening a heading record.
pub const HEADING_KEYWORD: &str = "HEADING";
/// Keyword opening a paragraph record.
pub const PARAGRAPH_KEYWORD: &str = "PARAGRAPH";

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `HEADING <level> <text...>`: opens a new heading node.
    Heading { level: u32, text: String },
    /// `PARAGRAPH <text...>`: opens a new paragraph node.
    Paragraph { text: String },
    /// Whitespace-led line: more content for the most recent node.
    Continuation { text: String },
}

/// Classify a single line (without its trailing newline).
pub fn classify_line(line: &str) -> Result<Record, TokenizeReason> {
    let tokens = tokenize(line);
    let first_word = tokens.iter().filter_map(Token::word).next();

    match first_word {
        Some(HEADING_KEYWORD) => {
            let mut words = tokens.iter().filter_map(Token::word).skip(1);
            let level = parse_level(words.next())?;
            Ok(Record::Heading {
                level,
                text: join_words(words),
            })
        }
        Some(PARAGRAPH_KEYWORD) => {
            let words = tokens.iter().filter_map(Token::word).skip(1);
            Ok(Record::Paragraph {
                text: join_words(words),
            })
        }
        _ if starts_with_whitespace(&tokens) => {
            let words = tokens.iter().filter_map(Token::word);
            Ok(Record::Continuation {
                text: join_words(words),
            })
        }
        Some(other) => Err(TokenizeReason::UnrecognizedRecord {
            found: other.to_string(),
        }),
        None => Err(TokenizeReason::EmptyLine),
    }
}

fn parse_level(word: Option<&str>) -> Result<u32, TokenizeReason> {
    let text = word.ok_or(TokenizeReason::MissingHeadingLevel)?;
    match text.parse::<u32>() {
        Ok(level) if level >= 1 => Ok(level),
        _ => Err(TokenizeReason::InvalidHeadingLevel {
            found: text.to_string(),
        }),
    }
}

fn starts_with_whitespace(tokens: &[Token]) -> bool {
    matches!(tokens.first(), Some(Token::Whitespace))
}

fn join_words<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.collect::<Vec<_>>().join(" ")
}
