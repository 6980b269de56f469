//! Token values produced by the lexer.

use std::fmt;
use std::sync::Arc;

/// Opaque identifier of the rule that produced a token.
///
/// Bound at configuration time to a fixed literal or a pattern. Cloning is
/// a reference-count bump, so every emitted token can carry its own copy.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenType(Arc<str>);

impl TokenType {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        TokenType(name.into())
    }

    /// The name this type was created with.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TokenType {
    fn from(name: &str) -> Self {
        TokenType::new(name)
    }
}

impl From<String> for TokenType {
    fn from(name: String) -> Self {
        TokenType::new(name)
    }
}

impl fmt::Debug for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A classified span of input.
///
/// Only the engine creates tokens; ownership passes to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    content: String,
    kind: TokenType,
}

impl Token {
    pub(crate) fn new(content: String, kind: TokenType) -> Self {
        Token { content, kind }
    }

    /// The exact input text this token was classified from.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The type bound to the rule that matched.
    #[inline]
    pub fn kind(&self) -> &TokenType {
        &self.kind
    }

    pub fn into_parts(self) -> (String, TokenType) {
        (self.content, self.kind)
    }
}

/// Renders as `<type> (<content>)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.content)
    }
}

#[cfg(test)]
mod tests;
