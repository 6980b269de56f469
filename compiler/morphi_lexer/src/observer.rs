//! Observability hook for the scanning algorithm.
//!
//! The engine reports every checkpoint through a [`LexObserver`] instead of
//! logging inline. The default [`TracingObserver`] turns checkpoints into
//! `tracing` events; `()` discards them; tests plug in recorders.
//!
//! Checkpoints are reported in input order: for any run of the lexer, the
//! concatenation of confirmed delimiter runs, emitted token contents and
//! dropped bulks reproduces the input that was read.

use tracing::{debug, trace};

use crate::{Token, TokenType};

/// Receives scanning checkpoints. All methods default to doing nothing.
pub trait LexObserver {
    /// A new delimiter-free bulk is ready for classification.
    fn bulk_acquired(&mut self, _bulk: &str) {}

    /// A delimiter run was confirmed and skipped.
    fn delimiter_confirmed(&mut self, _run: &str) {}

    fn token_emitted(&mut self, _token: &Token) {}

    /// Several patterns tied on the longest match of `bulk`.
    fn ambiguity_detected(&mut self, _bulk: &str, _len: usize, _candidates: &[TokenType]) {}

    /// Unclassifiable text was discarded by recovery.
    fn bulk_dropped(&mut self, _fragment: &str) {}
}

impl LexObserver for () {}

impl<O: LexObserver + ?Sized> LexObserver for &mut O {
    fn bulk_acquired(&mut self, bulk: &str) {
        (**self).bulk_acquired(bulk);
    }

    fn delimiter_confirmed(&mut self, run: &str) {
        (**self).delimiter_confirmed(run);
    }

    fn token_emitted(&mut self, token: &Token) {
        (**self).token_emitted(token);
    }

    fn ambiguity_detected(&mut self, bulk: &str, len: usize, candidates: &[TokenType]) {
        (**self).ambiguity_detected(bulk, len, candidates);
    }

    fn bulk_dropped(&mut self, fragment: &str) {
        (**self).bulk_dropped(fragment);
    }
}

/// Emits every checkpoint as a `tracing` event.
///
/// Enable with `RUST_LOG=morphi_lexer=trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl LexObserver for TracingObserver {
    fn bulk_acquired(&mut self, bulk: &str) {
        trace!(bulk, "bulk acquired");
    }

    fn delimiter_confirmed(&mut self, run: &str) {
        trace!(run = ?run, "delimiter confirmed");
    }

    fn token_emitted(&mut self, token: &Token) {
        trace!(kind = %token.kind(), content = token.content(), "token emitted");
    }

    fn ambiguity_detected(&mut self, bulk: &str, len: usize, candidates: &[TokenType]) {
        debug!(bulk, len, ?candidates, "ambiguous pattern match");
    }

    fn bulk_dropped(&mut self, fragment: &str) {
        debug!(fragment, "bulk dropped");
    }
}
