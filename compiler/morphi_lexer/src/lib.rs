//! Configurable streaming lexer.
//!
//! Turns a character stream into classified [`Token`]s according to a
//! [`LexerConfig`]: literal *fixed* tokens, regex *patterns*, and
//! *delimiter* runs that separate tokens without producing any.
//!
//! # Pipeline
//!
//! ```text
//! RuneSource
//!     │  one char at a time
//!     ▼
//! bulk acquisition ── skip leading delimiters, find the trailing one,
//!     │               push it back to the source
//!     ▼
//! classification ──── fixed literal (longest) ► patterns (longest match)
//!     │
//!     ▼
//! Token
//! ```
//!
//! The engine pulls from the source only when the caller asks for a token,
//! so memory use is bounded by the longest delimiter-free run of input.
//!
//! # Example
//!
//! ```
//! use morphi_lexer::{Lexer, LexerConfig, StrSource, TokenType};
//!
//! let num = TokenType::new("NUM");
//! let plus = TokenType::new("PLUS");
//! let config = LexerConfig::build([' '], [("+", plus)], [("[0-9]+", num)])?;
//!
//! let tokens: Vec<String> = Lexer::new(&config, StrSource::new("1 + 22"))
//!     .map(|token| token.to_string())
//!     .collect();
//! assert_eq!(tokens, ["NUM (1)", "PLUS (+)", "NUM (22)"]);
//! # Ok::<(), morphi_lexer::ConfigError>(())
//! ```

mod classify;
mod config;
mod error;
mod lexer;
mod observer;
mod token;

pub use config::{ConfigError, FixedToken, LexerConfig, LexerConfigBuilder, PatternBinding};
pub use error::LexError;
pub use lexer::{Lexer, LexerState};
pub use observer::{LexObserver, TracingObserver};
pub use token::{Token, TokenType};

// The core primitives are part of this crate's public surface.
pub use morphi_lexer_core::{
    CharSetDelimiters, DelimiterMatcher, Interval, LiteralDelimiters, ReaderSource, RegexPattern,
    RuneSource, StrSource, TokenPattern,
};
