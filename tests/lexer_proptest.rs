//! Property-based tests for line classification and outline prefixes
//!
//! These ensure the lexer handles arbitrary input lines without panicking
//! and that well-formed records round-trip through classification, and pin
//! down the algebraic properties of the prefix generator.

use proptest::prelude::*;

use outliner::ast::{outline_prefix, PrefixStyle};
use outliner::lexer::{classify_line, Record};

proptest! {
    #[test]
    fn classification_never_panics(line in "[ -~\t]{0,120}") {
        let _ = classify_line(&line);
    }

    #[test]
    fn heading_records_roundtrip(
        level in 1u32..=50,
        words in proptest::collection::vec("[A-Za-z]{1,8}", 1..6),
    ) {
        let line = format!("HEADING {} {}", level, words.join(" "));
        let record = classify_line(&line).unwrap();
        prop_assert_eq!(
            record,
            Record::Heading { level, text: words.join(" ") }
        );
    }

    #[test]
    fn paragraph_content_collapses_whitespace_runs(
        words in proptest::collection::vec("[A-Za-z]{1,8}", 1..6),
        gap in " {2,5}",
    ) {
        let line = format!("PARAGRAPH{}{}", gap, words.join(&gap));
        let record = classify_line(&line).unwrap();
        prop_assert_eq!(
            record,
            Record::Paragraph { text: words.join(" ") }
        );
    }

    #[test]
    fn indented_lines_without_keywords_are_continuations(
        words in proptest::collection::vec("[a-z]{1,8}", 1..6),
    ) {
        let line = format!("  {}", words.join(" "));
        let record = classify_line(&line).unwrap();
        prop_assert_eq!(
            record,
            Record::Continuation { text: words.join(" ") }
        );
    }

    #[test]
    fn prefix_family_cycles_every_six_levels(level in 1u32..=60, position in 0usize..40) {
        prop_assert_eq!(
            outline_prefix(level, position),
            outline_prefix(level + 6, position)
        );
    }

    #[test]
    fn roman_prefixes_use_roman_symbols(position in 0usize..500) {
        let prefix = PrefixStyle::Roman.render(position);
        prop_assert!(!prefix.is_empty());
        prop_assert!(prefix.chars().all(|c| "MDCLXVI".contains(c)));
    }

    #[test]
    fn alpha_prefixes_stay_alphabetic_past_the_wrap(position in 0usize..2000) {
        let upper = PrefixStyle::UpperAlpha.render(position);
        prop_assert!(upper.chars().all(|c| c.is_ascii_uppercase()));
        let lower = PrefixStyle::LowerAlpha.render(position);
        prop_assert!(lower.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn decimal_prefixes_are_one_based(position in 0usize..10_000) {
        prop_assert_eq!(
            PrefixStyle::Decimal.render(position),
            (position + 1).to_string()
        );
    }
}
