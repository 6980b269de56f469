//! Low-level building blocks for the morphi streaming lexer.
//!
//! This crate has no knowledge of token types or lexer state. It provides
//! the pieces the engine in `morphi_lexer` is assembled from:
//!
//! - [`Interval`]: half-open match extent reported by every matcher
//! - [`RuneSource`]: pull-based character supply with unbounded pushback,
//!   plus the [`StrSource`] and [`ReaderSource`] adapters
//! - [`DelimiterMatcher`]: separator detection that can tell a run which
//!   might still grow from one that is complete
//! - [`TokenPattern`]: anchored token-shape matching, with the regex-backed
//!   [`RegexPattern`]
//!
//! # Architecture
//!
//! ```text
//! RuneSource ──chars──► engine candidate buffer
//!                           │
//!                           ├── DelimiterMatcher::may_match / full_match
//!                           │
//!                           └── TokenPattern::matches ──► Interval
//! ```

mod delimiter;
mod interval;
mod pattern;
mod source;

pub use delimiter::{CharSetDelimiters, DelimiterMatcher, LiteralDelimiters};
pub use interval::Interval;
pub use pattern::{RegexPattern, TokenPattern};
pub use source::{ReaderSource, RuneSource, StrSource};
