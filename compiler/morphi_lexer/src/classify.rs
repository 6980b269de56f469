//! Classification of a bulk prefix into a token.
//!
//! Pure function of the configuration, the unclassified text and whether
//! that text can still grow. The engine acts on the verdict.
//!
//! Order of decisions:
//! 1. If the bulk can grow and is a strict prefix of a longer fixed
//!    literal, wait for more input.
//! 2. The longest fixed literal prefixing the bulk wins outright, even if
//!    a pattern would match a longer span.
//! 3. If the bulk can grow and any pattern may still extend past it, wait
//!    for more input. Any pattern match is provisional until then, even
//!    one ending well inside the bulk, since a longer one may yet appear.
//! 4. Every pattern is tried; the strictly longest match wins. Intervals
//!    that do not start at 0 or do not fit the bulk are ignored.
//! 5. A tie on the longest match is ambiguous.

use crate::config::LexerConfig;
use crate::TokenType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Verdict<'c> {
    /// Consume `len` bytes as a token of `kind`.
    Matched { len: usize, kind: &'c TokenType },
    /// The decision depends on input not read yet.
    NeedMore,
    /// Several patterns share the longest match.
    Ambiguous {
        len: usize,
        candidates: Vec<TokenType>,
    },
    /// No rule matches the start of the bulk.
    Unmatched,
}

/// Classify the start of `bulk`.
///
/// `terminated` tells whether the right edge of `bulk` is final (a
/// confirmed delimiter or end of input follows it).
pub(crate) fn classify<'c>(config: &'c LexerConfig, bulk: &str, terminated: bool) -> Verdict<'c> {
    debug_assert!(!bulk.is_empty(), "classification needs input");

    let fixed = config.fixed_tokens();
    if !terminated
        && fixed
            .iter()
            .any(|token| token.literal().len() > bulk.len() && token.literal().starts_with(bulk))
    {
        return Verdict::NeedMore;
    }
    // Longest first, so the first hit is the longest literal.
    if let Some(token) = fixed.iter().find(|token| bulk.starts_with(token.literal())) {
        return Verdict::Matched {
            len: token.literal().len(),
            kind: token.kind(),
        };
    }

    if !terminated
        && config
            .patterns()
            .iter()
            .any(|binding| binding.pattern().may_extend(bulk))
    {
        return Verdict::NeedMore;
    }

    let mut best_end = 0;
    let mut winners: Vec<&'c TokenType> = Vec::new();
    for binding in config.patterns() {
        let Some(found) = binding
            .pattern()
            .matches(bulk)
            .filter(|found| found.start == 0 && !found.is_empty() && found.fits(bulk))
        else {
            continue;
        };
        if found.end > best_end {
            best_end = found.end;
            winners.clear();
            winners.push(binding.kind());
        } else if found.end == best_end {
            winners.push(binding.kind());
        }
    }

    match winners.len() {
        0 => Verdict::Unmatched,
        1 => Verdict::Matched {
            len: best_end,
            kind: winners[0],
        },
        _ => Verdict::Ambiguous {
            len: best_end,
            candidates: winners.into_iter().cloned().collect(),
        },
    }
}
