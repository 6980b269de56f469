//! Property-based tests for the lexer engine.
//!
//! Random inputs over a small alphabet check that:
//! 1. Lossless: skipped delimiter runs and token contents, in the order the
//!    observer sees them, reproduce the input exactly.
//! 2. Bounded bulks are invisible: any `bulk_limit` yields the same tokens
//!    and final state as an unbounded lexer, with overlapping patterns too.
//! 3. Words joined by delimiters come back as exactly those words.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::num::NonZeroUsize;

use morphi_lexer::{
    LexObserver, Lexer, LexerConfig, LexerState, StrSource, Token, TokenType,
};
use proptest::prelude::*;

/// Words, numbers and single symbols, separated by spaces or `--`.
///
/// The three patterns are disjoint, so no input is ambiguous.
fn catch_all(bulk_limit: Option<usize>) -> LexerConfig {
    let mut builder = LexerConfig::builder()
        .delimiter_chars([' '])
        .delimiter_literals(["--"])
        .fixed("==", TokenType::new("EQEQ"))
        .regex("[a-z]+", TokenType::new("WORD"))
        .regex("[0-9]+", TokenType::new("NUM"))
        .regex("[^a-z0-9]", TokenType::new("SYM"));
    if let Some(limit) = bulk_limit.and_then(NonZeroUsize::new) {
        builder = builder.bulk_limit(limit);
    }
    builder.build().expect("valid config")
}

/// Patterns that share prefixes: `[a-c]` against `abc` and `a+b`.
///
/// Lengths never tie, so every input lexes without error.
fn overlapping(bulk_limit: Option<usize>) -> LexerConfig {
    let mut builder = LexerConfig::builder()
        .delimiter_chars([' '])
        .regex("[a-c]", TokenType::new("LETTER"))
        .regex("abc", TokenType::new("ABC"))
        .regex("a+b", TokenType::new("AB"))
        .regex("[0-9]+", TokenType::new("NUM"))
        .regex("[^a-c0-9]", TokenType::new("SYM"));
    if let Some(limit) = bulk_limit.and_then(NonZeroUsize::new) {
        builder = builder.bulk_limit(limit);
    }
    builder.build().expect("valid config")
}

#[derive(Default)]
struct Pieces(Vec<String>);

impl LexObserver for Pieces {
    fn delimiter_confirmed(&mut self, run: &str) {
        self.0.push(run.to_owned());
    }

    fn token_emitted(&mut self, token: &Token) {
        self.0.push(token.content().to_owned());
    }
}

fn tokens(config: &LexerConfig, input: &str) -> Vec<String> {
    Lexer::new(config, StrSource::new(input))
        .map(|token| token.to_string())
        .collect()
}

fn outcome(config: &LexerConfig, input: &str) -> (Vec<String>, LexerState) {
    let mut lexer = Lexer::new(config, StrSource::new(input));
    let tokens = lexer.by_ref().map(|token| token.to_string()).collect();
    (tokens, lexer.state())
}

fn input_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c0-2 =*-]{0,40}").expect("valid regex")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn lexing_is_lossless(input in input_strategy(), limit in prop::option::of(1usize..6)) {
        let config = catch_all(limit);
        let mut lexer = Lexer::with_observer(&config, StrSource::new(&input), Pieces::default());
        while lexer.next_token().is_some() {}

        prop_assert_eq!(lexer.state(), LexerState::Exhausted);
        prop_assert!(lexer.current_error().is_none());
        let (_, pieces) = lexer.into_parts();
        prop_assert_eq!(pieces.0.concat(), input);
    }

    #[test]
    fn bulk_limit_does_not_change_tokens(input in input_strategy(), limit in 1usize..8) {
        let unbounded = tokens(&catch_all(None), &input);
        let bounded = tokens(&catch_all(Some(limit)), &input);
        prop_assert_eq!(bounded, unbounded);
    }

    #[test]
    fn bulk_limit_keeps_longest_overlapping_match(input in input_strategy(), limit in 1usize..8) {
        let unbounded = outcome(&overlapping(None), &input);
        prop_assert_eq!(&unbounded.1, &LexerState::Exhausted);
        prop_assert_eq!(outcome(&overlapping(Some(limit)), &input), unbounded);
    }

    #[test]
    fn delimited_words_round_trip(
        words in prop::collection::vec("[a-z]{1,6}", 0..8),
        separators in prop::collection::vec(prop::sample::select(vec![" ", "--", "  ", " -- "]), 8),
    ) {
        let mut input = String::new();
        for (word, separator) in words.iter().zip(&separators) {
            input.push_str(separator);
            input.push_str(word);
        }

        let expected: Vec<String> = words.iter().map(|word| format!("WORD ({word})")).collect();
        prop_assert_eq!(tokens(&catch_all(None), &input), expected);
    }
}
