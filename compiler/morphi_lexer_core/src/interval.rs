//! Half-open match extents.

use std::fmt;

/// Half-open `[start, end)` byte range into a matcher's input buffer.
///
/// The built-in matchers only hand out intervals that [`fit`](Self::fits)
/// the buffer they were computed for. Intervals from other matchers are
/// checked before use.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    /// Create a new interval.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Interval { start, end }
    }

    /// Length of the interval in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the interval is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the interval runs up to the end of a buffer of length `len`.
    ///
    /// A delimiter occurrence touching the end of the candidate buffer may
    /// still grow once more input arrives.
    #[inline]
    pub const fn reaches(&self, len: usize) -> bool {
        self.end == len
    }

    /// Whether `start <= end <= buffer.len()` with both ends on `char`
    /// boundaries, i.e. whether [`slice`](Self::slice) is safe.
    pub fn fits(&self, buffer: &str) -> bool {
        self.start <= self.end
            && buffer.is_char_boundary(self.start)
            && buffer.is_char_boundary(self.end)
    }

    /// The text this interval covers in `buffer`.
    ///
    /// Panics unless the interval [`fits`](Self::fits) the buffer.
    #[inline]
    pub fn slice<'a>(&self, buffer: &'a str) -> &'a str {
        &buffer[self.start..self.end]
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
