//! Lexer configuration: delimiters, fixed tokens and patterns.
//!
//! A [`LexerConfig`] is immutable once built and can be shared read-only
//! by any number of [`Lexer`](crate::Lexer)s. All validation (pattern
//! compilation included) happens in [`LexerConfigBuilder::build`], so
//! tokenization never fails because of a bad rule.

use std::num::NonZeroUsize;

use morphi_lexer_core::{
    CharSetDelimiters, DelimiterMatcher, LiteralDelimiters, RegexPattern, TokenPattern,
};
use rustc_hash::FxHashMap;

use crate::TokenType;

/// Error raised while building a [`LexerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("pattern `{pattern}` for token type {kind} does not compile")]
    InvalidPattern {
        pattern: String,
        kind: TokenType,
        #[source]
        source: regex::Error,
    },

    #[error("fixed token of type {kind} has an empty literal")]
    EmptyFixedToken { kind: TokenType },

    #[error("fixed literal `{literal}` is bound to both {first} and {second}")]
    DuplicateFixedToken {
        literal: String,
        first: TokenType,
        second: TokenType,
    },

    #[error("delimiter strings must not be empty")]
    EmptyDelimiter,

    #[error("a custom delimiter matcher cannot be combined with delimiter characters or strings")]
    ConflictingDelimiters,
}

/// A literal string bound to a token type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedToken {
    literal: String,
    kind: TokenType,
}

impl FixedToken {
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn kind(&self) -> &TokenType {
        &self.kind
    }
}

/// A pattern bound to a token type.
#[derive(Debug)]
pub struct PatternBinding {
    pattern: Box<dyn TokenPattern>,
    kind: TokenType,
}

impl PatternBinding {
    pub fn pattern(&self) -> &dyn TokenPattern {
        self.pattern.as_ref()
    }

    pub fn kind(&self) -> &TokenType {
        &self.kind
    }
}

/// Immutable rule set driving a lexer.
#[derive(Debug)]
pub struct LexerConfig {
    delimiters: Box<dyn DelimiterMatcher>,
    /// Longest literal first, so the first prefix hit is the longest one.
    fixed: Vec<FixedToken>,
    patterns: Vec<PatternBinding>,
    bulk_limit: Option<NonZeroUsize>,
}

impl LexerConfig {
    /// Build a configuration from a delimiter alphabet, a literal table and
    /// an ordered list of regex patterns.
    ///
    /// Fails if any pattern does not compile or the literal table is
    /// malformed.
    pub fn build<D, F, L, P, R>(delimiters: D, fixed: F, patterns: P) -> Result<Self, ConfigError>
    where
        D: IntoIterator<Item = char>,
        F: IntoIterator<Item = (L, TokenType)>,
        L: Into<String>,
        P: IntoIterator<Item = (R, TokenType)>,
        R: Into<String>,
    {
        let mut builder = Self::builder().delimiter_chars(delimiters);
        for (literal, kind) in fixed {
            builder = builder.fixed(literal, kind);
        }
        for (raw, kind) in patterns {
            builder = builder.regex(raw, kind);
        }
        builder.build()
    }

    pub fn builder() -> LexerConfigBuilder {
        LexerConfigBuilder::default()
    }

    pub fn delimiters(&self) -> &dyn DelimiterMatcher {
        self.delimiters.as_ref()
    }

    /// Fixed tokens, longest literal first.
    pub fn fixed_tokens(&self) -> &[FixedToken] {
        &self.fixed
    }

    /// Pattern bindings in configuration order.
    pub fn patterns(&self) -> &[PatternBinding] {
        &self.patterns
    }

    /// Maximum number of characters one bulk read may take without finding
    /// a delimiter. `None` reads up to the next delimiter or end of input.
    pub fn bulk_limit(&self) -> Option<NonZeroUsize> {
        self.bulk_limit
    }
}

/// A pattern waiting to be compiled by [`LexerConfigBuilder::build`].
#[derive(Debug)]
enum PendingPattern {
    Regex(String),
    Custom(Box<dyn TokenPattern>),
}

/// Incremental construction of a [`LexerConfig`].
///
/// Errors are deferred to [`build`](Self::build), which reports the first
/// problem in the order rules were added.
#[derive(Debug, Default)]
pub struct LexerConfigBuilder {
    delimiter_chars: Vec<char>,
    delimiter_literals: Vec<String>,
    custom_delimiters: Option<Box<dyn DelimiterMatcher>>,
    fixed: Vec<(String, TokenType)>,
    patterns: Vec<(PendingPattern, TokenType)>,
    bulk_limit: Option<NonZeroUsize>,
}

impl LexerConfigBuilder {
    /// Add single-character delimiters.
    #[must_use]
    pub fn delimiter_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.delimiter_chars.extend(chars);
        self
    }

    /// Add delimiter strings, which may be several characters long.
    #[must_use]
    pub fn delimiter_literals<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delimiter_literals
            .extend(literals.into_iter().map(Into::into));
        self
    }

    /// Use a custom delimiter matcher instead of characters or strings.
    #[must_use]
    pub fn delimiter_matcher(mut self, matcher: impl DelimiterMatcher + 'static) -> Self {
        self.custom_delimiters = Some(Box::new(matcher));
        self
    }

    /// Bind a literal to a token type.
    #[must_use]
    pub fn fixed(mut self, literal: impl Into<String>, kind: TokenType) -> Self {
        self.fixed.push((literal.into(), kind));
        self
    }

    /// Bind a regular expression to a token type.
    #[must_use]
    pub fn regex(mut self, raw: impl Into<String>, kind: TokenType) -> Self {
        self.patterns.push((PendingPattern::Regex(raw.into()), kind));
        self
    }

    /// Bind a custom pattern to a token type.
    #[must_use]
    pub fn pattern(mut self, pattern: impl TokenPattern + 'static, kind: TokenType) -> Self {
        self.patterns
            .push((PendingPattern::Custom(Box::new(pattern)), kind));
        self
    }

    /// Cap how many characters a single bulk read may take.
    #[must_use]
    pub fn bulk_limit(mut self, limit: NonZeroUsize) -> Self {
        self.bulk_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<LexerConfig, ConfigError> {
        let delimiters = build_delimiters(
            self.delimiter_chars,
            self.delimiter_literals,
            self.custom_delimiters,
        )?;
        let fixed = build_fixed(self.fixed)?;

        let patterns = self
            .patterns
            .into_iter()
            .map(|(pending, kind)| {
                let pattern: Box<dyn TokenPattern> = match pending {
                    PendingPattern::Regex(raw) => match RegexPattern::new(raw.as_str()) {
                        Ok(compiled) => Box::new(compiled),
                        Err(source) => {
                            return Err(ConfigError::InvalidPattern {
                                pattern: raw,
                                kind,
                                source,
                            })
                        }
                    },
                    PendingPattern::Custom(pattern) => pattern,
                };
                Ok(PatternBinding { pattern, kind })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            fixed = fixed.len(),
            patterns = patterns.len(),
            bulk_limit = self.bulk_limit.map(NonZeroUsize::get),
            "lexer config built"
        );

        Ok(LexerConfig {
            delimiters,
            fixed,
            patterns,
            bulk_limit: self.bulk_limit,
        })
    }
}

/// Pick the cheapest matcher that covers every configured delimiter.
fn build_delimiters(
    chars: Vec<char>,
    literals: Vec<String>,
    custom: Option<Box<dyn DelimiterMatcher>>,
) -> Result<Box<dyn DelimiterMatcher>, ConfigError> {
    if let Some(custom) = custom {
        if !chars.is_empty() || !literals.is_empty() {
            return Err(ConfigError::ConflictingDelimiters);
        }
        return Ok(custom);
    }
    if literals.iter().any(String::is_empty) {
        return Err(ConfigError::EmptyDelimiter);
    }
    if literals.iter().all(|literal| literal.chars().count() == 1) {
        let singles = literals.iter().filter_map(|literal| literal.chars().next());
        return Ok(Box::new(CharSetDelimiters::new(chars.into_iter().chain(singles))));
    }
    let strings = chars.into_iter().map(String::from).chain(literals);
    Ok(Box::new(LiteralDelimiters::new(strings)))
}

fn build_fixed(entries: Vec<(String, TokenType)>) -> Result<Vec<FixedToken>, ConfigError> {
    let mut seen: FxHashMap<&str, &TokenType> = FxHashMap::default();
    for (literal, kind) in &entries {
        if literal.is_empty() {
            return Err(ConfigError::EmptyFixedToken { kind: kind.clone() });
        }
        match seen.get(literal.as_str()) {
            // Re-binding a literal to the same type is harmless.
            Some(&first) if first != kind => {
                return Err(ConfigError::DuplicateFixedToken {
                    literal: literal.clone(),
                    first: first.clone(),
                    second: kind.clone(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(literal, kind);
            }
        }
    }

    let mut fixed: Vec<FixedToken> = entries
        .into_iter()
        .map(|(literal, kind)| FixedToken { literal, kind })
        .collect();
    fixed.sort_by(|a, b| {
        b.literal
            .len()
            .cmp(&a.literal.len())
            .then_with(|| a.literal.cmp(&b.literal))
    });
    fixed.dedup();
    Ok(fixed)
}
