//! Delimiter detection over a growing candidate buffer.
//!
//! The engine reads one character at a time and asks a [`DelimiterMatcher`]
//! after every read whether the buffer contains a delimiter run. Two
//! questions are asked:
//!
//! - [`may_match`](DelimiterMatcher::may_match): is there a run that might
//!   still extend if more characters were appended? An interval that
//!   reaches the end of the buffer is treated as *open*.
//! - [`full_match`](DelimiterMatcher::full_match): where exactly is the run,
//!   assuming the buffer will not grow any further?
//!
//! For a plain character alphabet the two answers coincide. Multi-character
//! delimiters need the distinction: after reading `a*` with delimiter `**`,
//! the trailing `*` cannot be confirmed or rejected until the next
//! character arrives.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::Interval;

/// Detects delimiter runs inside a candidate buffer.
///
/// Both operations scan from the start of `buffer` and report the first
/// run found, or `None` if the buffer contains no (prefix of a) delimiter.
pub trait DelimiterMatcher: fmt::Debug + Send + Sync {
    /// Report the first delimiter occurrence, treating a buffer tail that
    /// could still become (or extend) a delimiter as part of the run.
    ///
    /// A returned interval with `end == buffer.len()` is open.
    fn may_match(&self, buffer: &str) -> Option<Interval>;

    /// Report the first delimiter occurrence assuming the buffer is final.
    fn full_match(&self, buffer: &str) -> Option<Interval>;
}

/// A set of single-character delimiters.
///
/// A run is a maximal contiguous sequence of alphabet characters. Single
/// characters cannot be partial delimiters, so `may_match` and
/// `full_match` always agree.
#[derive(Clone, Debug, Default)]
pub struct CharSetDelimiters {
    chars: FxHashSet<char>,
}

impl CharSetDelimiters {
    /// Build an alphabet from the given characters.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        CharSetDelimiters {
            chars: chars.into_iter().collect(),
        }
    }

    /// Whether `c` belongs to the alphabet.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct delimiter characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if no character is a delimiter.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    fn first_run(&self, buffer: &str) -> Option<Interval> {
        let (start, _) = buffer.char_indices().find(|&(_, c)| self.contains(c))?;
        let end = buffer[start..]
            .char_indices()
            .find(|&(_, c)| !self.contains(c))
            .map_or(buffer.len(), |(offset, _)| start + offset);
        Some(Interval::new(start, end))
    }
}

impl DelimiterMatcher for CharSetDelimiters {
    #[inline]
    fn may_match(&self, buffer: &str) -> Option<Interval> {
        self.first_run(buffer)
    }

    #[inline]
    fn full_match(&self, buffer: &str) -> Option<Interval> {
        self.first_run(buffer)
    }
}

/// A set of delimiter strings, possibly several characters long.
///
/// Adjacent delimiter occurrences merge into one run. At each position the
/// longest literal wins, so with `*` and `**` configured the input `***`
/// is one run either way, while with only `**` configured the third `*` is
/// left over as content.
#[derive(Clone, Debug, Default)]
pub struct LiteralDelimiters {
    /// Non-empty literals, longest first.
    literals: Vec<String>,
}

impl LiteralDelimiters {
    /// Build a matcher from delimiter strings. Empty strings are ignored.
    pub fn new<I, S>(literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut literals: Vec<String> = literals
            .into_iter()
            .map(Into::into)
            .filter(|literal| !literal.is_empty())
            .collect();
        literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        literals.dedup();
        LiteralDelimiters { literals }
    }

    /// The configured literals, longest first.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Length of the longest literal that `rest` starts with.
    fn longest_at(&self, rest: &str) -> Option<usize> {
        self.literals
            .iter()
            .find(|literal| rest.starts_with(literal.as_str()))
            .map(String::len)
    }

    /// Whether `rest` is a non-empty strict prefix of some literal.
    fn is_open_prefix(&self, rest: &str) -> bool {
        !rest.is_empty()
            && self
                .literals
                .iter()
                .any(|literal| literal.len() > rest.len() && literal.starts_with(rest))
    }

    /// End of the run of adjacent literals beginning at `start`.
    fn run_end(&self, buffer: &str, start: usize) -> usize {
        let mut end = start;
        while let Some(len) = self.longest_at(&buffer[end..]) {
            end += len;
        }
        end
    }
}

impl DelimiterMatcher for LiteralDelimiters {
    fn may_match(&self, buffer: &str) -> Option<Interval> {
        for (start, _) in buffer.char_indices() {
            let rest = &buffer[start..];
            if self.longest_at(rest).is_some() {
                let end = self.run_end(buffer, start);
                // A run followed by the beginning of another literal may still grow.
                let end = if self.is_open_prefix(&buffer[end..]) {
                    buffer.len()
                } else {
                    end
                };
                return Some(Interval::new(start, end));
            }
            if self.is_open_prefix(rest) {
                return Some(Interval::new(start, buffer.len()));
            }
        }
        None
    }

    fn full_match(&self, buffer: &str) -> Option<Interval> {
        buffer.char_indices().find_map(|(start, _)| {
            self.longest_at(&buffer[start..])?;
            Some(Interval::new(start, self.run_end(buffer, start)))
        })
    }
}
