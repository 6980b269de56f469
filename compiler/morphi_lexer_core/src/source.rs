//! Character sources with unbounded pushback.
//!
//! The engine pulls characters one at a time and, after it has confirmed
//! where a delimiter starts, hands everything it read past that point back
//! to the source. Pushed-back text is returned before any new input, in
//! its original order, and may itself be pushed back again.
//!
//! Pushback is stored in a `VecDeque<char>`: prepending `n` characters is
//! O(n) and every subsequent read is O(1), so many small pushbacks never
//! degrade into repeated string reallocation.

use std::collections::VecDeque;
use std::io::{self, BufReader, Read};
use std::str::Chars;

/// Pull-based character supply.
///
/// Once `next_rune` has returned `Ok(None)` it keeps doing so until
/// something is pushed back.
pub trait RuneSource {
    /// Produce the next character, or `None` at end of input.
    fn next_rune(&mut self) -> io::Result<Option<char>>;

    /// Prepend `text` so the following reads return its characters first.
    fn push_back(&mut self, text: &str);
}

impl<S: RuneSource + ?Sized> RuneSource for &mut S {
    #[inline]
    fn next_rune(&mut self) -> io::Result<Option<char>> {
        (**self).next_rune()
    }

    #[inline]
    fn push_back(&mut self, text: &str) {
        (**self).push_back(text);
    }
}

impl<S: RuneSource + ?Sized> RuneSource for Box<S> {
    #[inline]
    fn next_rune(&mut self) -> io::Result<Option<char>> {
        (**self).next_rune()
    }

    #[inline]
    fn push_back(&mut self, text: &str) {
        (**self).push_back(text);
    }
}

/// Characters waiting to be re-read, front first.
#[derive(Clone, Debug, Default)]
struct Pushback {
    pending: VecDeque<char>,
}

impl Pushback {
    #[inline]
    fn pop(&mut self) -> Option<char> {
        self.pending.pop_front()
    }

    fn prepend(&mut self, text: &str) {
        self.pending.reserve(text.len());
        for c in text.chars().rev() {
            self.pending.push_front(c);
        }
    }
}

/// A [`RuneSource`] over an in-memory string.
#[derive(Clone, Debug)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
    pushback: Pushback,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        StrSource {
            chars: text.chars(),
            pushback: Pushback::default(),
        }
    }
}

impl RuneSource for StrSource<'_> {
    #[inline]
    fn next_rune(&mut self) -> io::Result<Option<char>> {
        Ok(self.pushback.pop().or_else(|| self.chars.next()))
    }

    fn push_back(&mut self, text: &str) {
        self.pushback.prepend(text);
    }
}

/// A [`RuneSource`] decoding UTF-8 from any [`Read`] implementation.
///
/// Bytes are pulled through a [`BufReader`], so reading one character at
/// a time does not translate into one system call per character.
/// Malformed UTF-8 surfaces as [`io::ErrorKind::InvalidData`], a sequence
/// cut short by end of input as [`io::ErrorKind::UnexpectedEof`].
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: BufReader<R>,
    pushback: Pushback,
    finished: bool,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader: BufReader::new(reader),
            pushback: Pushback::default(),
            finished: false,
        }
    }

    /// Read one byte into `slot`; `false` at end of input.
    fn read_byte(&mut self, slot: &mut u8) -> io::Result<bool> {
        loop {
            match self.reader.read(std::slice::from_mut(slot)) {
                Ok(0) => return Ok(false),
                Ok(_) => return Ok(true),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    fn decode_next(&mut self) -> io::Result<Option<char>> {
        if self.finished {
            return Ok(None);
        }

        let mut bytes = [0u8; 4];
        if !self.read_byte(&mut bytes[0])? {
            self.finished = true;
            return Ok(None);
        }

        let width = utf8_width(bytes[0]).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid UTF-8 leading byte 0x{:02X}", bytes[0]),
            )
        })?;
        for slot in &mut bytes[1..width] {
            if !self.read_byte(slot)? {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ends inside a UTF-8 sequence",
                ));
            }
        }

        let text = std::str::from_utf8(&bytes[..width])
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(text.chars().next())
    }
}

impl<R: Read> RuneSource for ReaderSource<R> {
    fn next_rune(&mut self) -> io::Result<Option<char>> {
        match self.pushback.pop() {
            Some(c) => Ok(Some(c)),
            None => self.decode_next(),
        }
    }

    fn push_back(&mut self, text: &str) {
        self.pushback.prepend(text);
    }
}

/// Encoded length of a UTF-8 sequence from its leading byte.
///
/// Continuation bytes, overlong two-byte leads and leads above U+10FFFF
/// are rejected here; the remaining malformations are caught by
/// `str::from_utf8` once the whole sequence has been read.
fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
