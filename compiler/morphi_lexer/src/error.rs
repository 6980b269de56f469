//! Errors recorded by the lexer while tokenizing.
//!
//! The engine never panics or aborts on these. It records the error, stops
//! producing tokens, and leaves the decision to the caller, who observes
//! the error through [`Lexer::current_error`](crate::Lexer::current_error)
//! after `next_token` returns `None`.

use std::io;

use crate::TokenType;

#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// The character source failed. Fatal.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// Two or more patterns tied on the longest final match. Fatal.
    #[error(
        "ambiguous input `{fragment}`: {} all match {len} bytes",
        join_kinds(.candidates)
    )]
    Ambiguous {
        fragment: String,
        len: usize,
        candidates: Vec<TokenType>,
    },

    /// No fixed token or pattern matches the start of the current bulk.
    ///
    /// Recoverable with [`Lexer::drop_bulk`](crate::Lexer::drop_bulk).
    #[error("no token matches `{fragment}`")]
    Unrecognized { fragment: String },
}

impl LexError {
    /// Whether the lexer can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LexError::Unrecognized { .. })
    }
}

fn join_kinds(kinds: &[TokenType]) -> String {
    kinds
        .iter()
        .map(TokenType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests;
