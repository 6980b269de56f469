//! The streaming lexer engine.
//!
//! # State machine
//!
//! ```text
//!            ┌──────────── drop_bulk ────────────┐
//!            ▼                                   │
//!        Running ──── no rule matches ────► Stalled
//!         │    │
//!         │    └── I/O failure / ambiguity ──► Errored   (terminal)
//!         │
//!         └── source drained, bulk empty ────► Exhausted (terminal)
//! ```
//!
//! In every state except `Running`, [`Lexer::next_token`] returns `None`
//! without touching the source.
//!
//! # Bulk
//!
//! The *bulk* is the delimiter-free text currently being classified. It
//! is stored as a `String` plus a cursor past the already-emitted prefix,
//! so emitting a token never shifts the remaining text. The bulk is
//! *terminated* when its right edge is final: either a confirmed delimiter
//! follows it, or the source is drained. Only a terminated bulk can be
//! classified with certainty; see [`classify`](crate::classify).

mod acquire;

use tracing::debug;

use morphi_lexer_core::RuneSource;

use crate::classify::{classify, Verdict};
use crate::{LexError, LexObserver, LexerConfig, Token, TracingObserver};

/// Lifecycle of a [`Lexer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexerState {
    /// Tokens may still be produced.
    Running,
    /// The start of the current bulk matches no rule. The caller may
    /// [`drop_bulk`](Lexer::drop_bulk) to continue.
    Stalled,
    /// All input has been consumed. Terminal.
    Exhausted,
    /// A fatal error was recorded. Terminal.
    Errored,
}

/// Pull-based tokenizer over a [`RuneSource`].
///
/// Bound to one configuration and one source for its whole life. Not
/// meant for concurrent use: callers that share a lexer must serialize
/// access themselves.
pub struct Lexer<'c, S, O = TracingObserver> {
    config: &'c LexerConfig,
    source: S,
    observer: O,
    bulk: String,
    /// Bytes of `bulk` already emitted as tokens.
    cursor: usize,
    /// The right edge of `bulk` is final.
    terminated: bool,
    /// The source returned end of input and nothing was pushed back since.
    drained: bool,
    state: LexerState,
    error: Option<LexError>,
}

impl<'c, S: RuneSource> Lexer<'c, S> {
    /// Create a lexer reporting checkpoints through `tracing`.
    pub fn new(config: &'c LexerConfig, source: S) -> Self {
        Self::with_observer(config, source, TracingObserver)
    }
}

impl<'c, S: RuneSource, O: LexObserver> Lexer<'c, S, O> {
    pub fn with_observer(config: &'c LexerConfig, source: S, observer: O) -> Self {
        Lexer {
            config,
            source,
            observer,
            bulk: String::new(),
            cursor: 0,
            // No bulk yet, so there is nothing left to grow.
            terminated: true,
            drained: false,
            state: LexerState::Running,
            error: None,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `None` when input is exhausted, when an error was recorded
    /// (see [`current_error`](Self::current_error)), or while stalled on
    /// unrecognized input.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.state != LexerState::Running {
                return None;
            }

            if self.pending().is_empty() {
                if let Err(err) = self.acquire_bulk() {
                    self.fail(err);
                    return None;
                }
                if self.pending().is_empty() {
                    self.state = LexerState::Exhausted;
                    debug!("input exhausted");
                    return None;
                }
            }

            match classify(self.config, self.pending(), self.terminated) {
                Verdict::Matched { len, kind } => {
                    let content = self.pending()[..len].to_owned();
                    self.cursor += len;
                    let token = Token::new(content, kind.clone());
                    self.observer.token_emitted(&token);
                    return Some(token);
                }
                Verdict::NeedMore => {
                    if let Err(err) = self.refill() {
                        self.fail(err);
                        return None;
                    }
                }
                Verdict::Ambiguous { len, candidates } => {
                    let fragment = self.pending().to_owned();
                    self.observer
                        .ambiguity_detected(&fragment, len, &candidates);
                    self.fail(LexError::Ambiguous {
                        fragment: fragment[..len].to_owned(),
                        len,
                        candidates,
                    });
                    return None;
                }
                Verdict::Unmatched => {
                    let fragment = self.pending().to_owned();
                    debug!(fragment = fragment.as_str(), "lexer stalled");
                    self.state = LexerState::Stalled;
                    self.error = Some(LexError::Unrecognized { fragment });
                    return None;
                }
            }
        }
    }

    /// Discard the unclassifiable remainder of the current delimiter-free
    /// run and load the next bulk.
    ///
    /// Recovery policy for input that matches no rule. Has no effect once
    /// the lexer is [`Errored`](LexerState::Errored) or
    /// [`Exhausted`](LexerState::Exhausted). Returns whether the lexer is
    /// running afterwards.
    pub fn drop_bulk(&mut self) -> bool {
        if matches!(self.state, LexerState::Errored | LexerState::Exhausted) {
            return false;
        }
        self.state = LexerState::Running;
        self.error = None;

        if let Err(err) = self.discard_run() {
            self.fail(err);
            return false;
        }
        if let Err(err) = self.acquire_bulk() {
            self.fail(err);
            return false;
        }
        if self.pending().is_empty() {
            self.state = LexerState::Exhausted;
            debug!("input exhausted");
            return false;
        }
        true
    }

    pub fn state(&self) -> LexerState {
        self.state
    }

    /// The error that stopped the lexer, if any.
    pub fn current_error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    pub fn into_error(self) -> Option<LexError> {
        self.error
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_parts(self) -> (S, O) {
        (self.source, self.observer)
    }

    /// Unclassified part of the bulk.
    #[inline]
    fn pending(&self) -> &str {
        &self.bulk[self.cursor..]
    }

    /// Record a fatal error. The lexer never changes state afterwards.
    fn fail(&mut self, err: LexError) {
        debug!(error = %err, "lexer failed");
        self.state = LexerState::Errored;
        self.error = Some(err);
    }
}

impl<S: RuneSource, O: LexObserver> Iterator for Lexer<'_, S, O> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl<S, O> std::fmt::Debug for Lexer<'_, S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("state", &self.state)
            .field("pending", &&self.bulk[self.cursor..])
            .field("terminated", &self.terminated)
            .field("drained", &self.drained)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
