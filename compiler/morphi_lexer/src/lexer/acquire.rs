//! Bulk acquisition: reading the source up to the next delimiter.
//!
//! Two phases. First the delimiter run at the current position, if any, is
//! skipped. Then characters are read until a delimiter run is confirmed
//! after the content; the run is pushed back so that the next acquisition
//! starts on it. Without a `bulk_limit` the bulk always ends terminated.

use morphi_lexer_core::{DelimiterMatcher, Interval, RuneSource};

use super::Lexer;
use crate::{LexError, LexObserver};

impl<S: RuneSource, O: LexObserver> Lexer<'_, S, O> {
    /// Replace the (fully consumed) bulk with the next delimiter-free run.
    ///
    /// Leaves the bulk empty only when the source is drained.
    pub(super) fn acquire_bulk(&mut self) -> Result<(), LexError> {
        self.bulk.clear();
        self.cursor = 0;
        self.terminated = false;
        let candidate = self.skip_leading_delimiters()?;
        self.scan_trailing(candidate)
    }

    /// Extend the unterminated bulk with more input.
    pub(super) fn refill(&mut self) -> Result<(), LexError> {
        debug_assert!(!self.terminated, "a terminated bulk cannot grow");
        let mut candidate = std::mem::take(&mut self.bulk);
        candidate.drain(..self.cursor);
        self.cursor = 0;
        self.scan_trailing(candidate)
    }

    /// Throw away the rest of the current delimiter-free run, reading on
    /// until its end if the bulk is not terminated yet.
    pub(super) fn discard_run(&mut self) -> Result<(), LexError> {
        loop {
            if self.cursor < self.bulk.len() {
                self.observer.bulk_dropped(&self.bulk[self.cursor..]);
            }
            self.bulk.clear();
            self.cursor = 0;
            if self.terminated {
                return Ok(());
            }
            self.scan_trailing(String::new())?;
        }
    }

    /// Read one character into `candidate`. Returns `false` once the
    /// source is drained.
    fn read_into(&mut self, candidate: &mut String) -> Result<bool, LexError> {
        if self.drained {
            return Ok(false);
        }
        match self.source.next_rune()? {
            Some(c) => {
                candidate.push(c);
                Ok(true)
            }
            None => {
                self.drained = true;
                Ok(false)
            }
        }
    }

    /// Consume the delimiter run at the current position.
    ///
    /// Returns the characters read past it, which start the next bulk.
    fn skip_leading_delimiters(&mut self) -> Result<String, LexError> {
        let config = self.config;
        let delimiters = config.delimiters();
        let mut candidate = String::new();

        let leading = loop {
            if !self.read_into(&mut candidate)? {
                break full_match(delimiters, &candidate).filter(|run| run.start == 0);
            }
            match may_match(delimiters, &candidate) {
                Some(run) if run.start == 0 => {
                    if run.reaches(candidate.len()) {
                        continue;
                    }
                    break full_match(delimiters, &candidate).filter(|full| full.start == 0);
                }
                _ => break None,
            }
        };

        if let Some(run) = leading {
            self.observer.delimiter_confirmed(run.slice(&candidate));
            candidate.drain(..run.end);
        }
        Ok(candidate)
    }

    /// Grow `candidate` up to the next confirmed delimiter and install it
    /// as the bulk.
    ///
    /// With a `bulk_limit`, stops after that many fresh characters and
    /// leaves the bulk unterminated. The cut never lands inside a possible
    /// delimiter, and always leaves the bulk longer than `candidate` was.
    fn scan_trailing(&mut self, mut candidate: String) -> Result<(), LexError> {
        let config = self.config;
        let delimiters = config.delimiters();
        let limit = config.bulk_limit().map(|limit| limit.get());
        let base = candidate.len();
        let mut fresh = 0usize;

        let (split, terminated) = loop {
            if self.drained {
                let split =
                    full_match(delimiters, &candidate).map_or(candidate.len(), |run| run.start);
                break (split, true);
            }

            let limited = limit.is_some_and(|limit| fresh >= limit);
            match may_match(delimiters, &candidate) {
                Some(run) if !run.reaches(candidate.len()) => {
                    let split =
                        full_match(delimiters, &candidate).map_or(run.start, |full| full.start);
                    break (split, true);
                }
                Some(run) if limited && run.start > base => break (run.start, false),
                None if limited => break (candidate.len(), false),
                _ => {}
            }

            if self.read_into(&mut candidate)? {
                fresh += 1;
            }
        };

        if split < candidate.len() {
            self.source.push_back(&candidate[split..]);
            self.drained = false;
            candidate.truncate(split);
        }
        self.bulk = candidate;
        self.cursor = 0;
        self.terminated = terminated;
        if !self.bulk.is_empty() {
            self.observer.bulk_acquired(&self.bulk);
        }
        Ok(())
    }
}

// Runs from a custom matcher are only trusted when they are non-empty and
// fit the buffer; anything else counts as no delimiter.

fn may_match(delimiters: &dyn DelimiterMatcher, buffer: &str) -> Option<Interval> {
    delimiters
        .may_match(buffer)
        .filter(|run| run.fits(buffer) && !run.is_empty())
}

fn full_match(delimiters: &dyn DelimiterMatcher, buffer: &str) -> Option<Interval> {
    delimiters
        .full_match(buffer)
        .filter(|run| run.fits(buffer) && !run.is_empty())
}
