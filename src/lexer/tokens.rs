//! Token definitions for record lines
//!
//! Records are whitespace-delimited, so a line lexes into an alternation of
//! whitespace runs and word runs. The tokens are defined using the logos
//! derive macro; classification of the resulting sequence lives in
//! [`super::classify`].

use logos::Logos;

/// Tokens produced from a single input line (no trailing newline).
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of spaces and/or tabs.
    #[regex(r"[ \t]+")]
    Whitespace,

    /// A run of non-whitespace characters.
    #[regex(r"[^ \t]+", |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// The word's text, if this is a word token.
    pub fn word(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word),
            Token::Whitespace => None,
        }
    }
}

/// Tokenize one line into its token sequence. The two patterns cover every
/// character, so lexing cannot fail.
pub fn tokenize(line: &str) -> Vec<Token> {
    Token::lexer(line).filter_map(|result| result.ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Token {
        Token::Word(text.to_string())
    }

    #[test]
    fn test_words_and_whitespace_alternate() {
        let tokens = tokenize("HEADING 1 All About Birds");
        assert_eq!(
            tokens,
            vec![
                word("HEADING"),
                Token::Whitespace,
                word("1"),
                Token::Whitespace,
                word("All"),
                Token::Whitespace,
                word("About"),
                Token::Whitespace,
                word("Birds"),
            ]
        );
    }

    #[test]
    fn test_whitespace_runs_collapse_to_one_token() {
        let tokens = tokenize("a   \t  b");
        assert_eq!(tokens, vec![word("a"), Token::Whitespace, word("b")]);
    }

    #[test]
    fn test_leading_whitespace_is_first_token() {
        let tokens = tokenize("   continued text");
        assert_eq!(
            tokens,
            vec![
                Token::Whitespace,
                word("continued"),
                Token::Whitespace,
                word("text"),
            ]
        );
        assert!(tokens[0].is_whitespace());
    }

    #[test]
    fn test_empty_line_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_word_accessor() {
        assert_eq!(word("PARAGRAPH").word(), Some("PARAGRAPH"));
        assert_eq!(Token::Whitespace.word(), None);
    }
}
