use super::*;
use pretty_assertions::assert_eq;

/// Drain a source into a string, stopping at end of input.
fn drain(source: &mut impl RuneSource) -> String {
    let mut out = String::new();
    while let Ok(Some(c)) = source.next_rune() {
        out.push(c);
    }
    out
}

// === StrSource ===

#[test]
fn str_source_yields_chars_in_order() {
    let mut source = StrSource::new("héllo");
    assert_eq!(drain(&mut source), "héllo");
    assert_eq!(source.next_rune().ok(), Some(None));
}

#[test]
fn empty_str_source() {
    let mut source = StrSource::new("");
    assert_eq!(source.next_rune().ok(), Some(None));
}

#[test]
fn pushback_is_read_before_new_input() {
    let mut source = StrSource::new("abcd");
    assert_eq!(source.next_rune().ok(), Some(Some('a')));
    assert_eq!(source.next_rune().ok(), Some(Some('b')));
    source.push_back("xy");
    assert_eq!(drain(&mut source), "xycd");
}

#[test]
fn pushback_can_be_pushed_back_again() {
    let mut source = StrSource::new("tail");
    source.push_back("abc");
    assert_eq!(source.next_rune().ok(), Some(Some('a')));
    // Re-push what was consumed plus the unread remainder stays in order.
    source.push_back("a");
    source.push_back("01");
    assert_eq!(drain(&mut source), "01abctail");
}

#[test]
fn pushback_after_end_of_input() {
    let mut source = StrSource::new("a");
    assert_eq!(drain(&mut source), "a");
    source.push_back(" b");
    assert_eq!(drain(&mut source), " b");
    assert_eq!(source.next_rune().ok(), Some(None));
}

#[test]
fn long_pushback() {
    let mut source = StrSource::new("");
    let text = "x".repeat(10_000);
    source.push_back(&text);
    assert_eq!(drain(&mut source), text);
}

#[test]
fn mutable_reference_is_a_source() {
    fn first_then_push(mut source: impl RuneSource) -> Option<char> {
        let first = source.next_rune().ok().flatten();
        source.push_back("z");
        first
    }

    let mut source = StrSource::new("ab");
    assert_eq!(first_then_push(&mut source), Some('a'));
    assert_eq!(drain(&mut source), "zb");
}

#[test]
fn boxed_source() {
    let mut source: Box<dyn RuneSource> = Box::new(StrSource::new("ok"));
    assert_eq!(drain(&mut source), "ok");
}

// === ReaderSource ===

#[test]
fn reader_source_decodes_utf8() {
    let text = "a é € \u{1F600}";
    let mut source = ReaderSource::new(text.as_bytes());
    assert_eq!(drain(&mut source), text);
    assert_eq!(source.next_rune().ok(), Some(None));
}

#[test]
fn reader_source_pushback() {
    let mut source = ReaderSource::new("one two".as_bytes());
    for _ in 0..4 {
        let _ = source.next_rune();
    }
    source.push_back(" ");
    assert_eq!(drain(&mut source), " two");
}

#[test]
fn reader_source_rejects_invalid_leading_byte() {
    let mut source = ReaderSource::new(&[b'a', 0xFF, b'b'][..]);
    assert_eq!(source.next_rune().ok(), Some(Some('a')));
    let err = source.next_rune().err();
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::InvalidData));
}

#[test]
fn reader_source_rejects_bad_continuation() {
    // 0xC3 expects one continuation byte in 0x80..=0xBF.
    let mut source = ReaderSource::new(&[0xC3, b'a'][..]);
    let err = source.next_rune().err();
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::InvalidData));
}

#[test]
fn reader_source_truncated_sequence() {
    let mut source = ReaderSource::new(&[0xE2, 0x82][..]);
    let err = source.next_rune().err();
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::UnexpectedEof));
}

/// Reader that is interrupted once, then yields its bytes, then fails.
struct FlakyReader {
    interrupted: bool,
    bytes: &'static [u8],
}

impl Read for FlakyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        }
        if self.bytes.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "transport gone"));
        }
        let n = buf.len().min(self.bytes.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes = &self.bytes[n..];
        Ok(n)
    }
}

#[test]
fn reader_source_retries_interrupted_and_reports_failures() {
    let mut source = ReaderSource::new(FlakyReader {
        interrupted: false,
        bytes: b"hi",
    });
    assert_eq!(source.next_rune().ok(), Some(Some('h')));
    assert_eq!(source.next_rune().ok(), Some(Some('i')));
    let err = source.next_rune().err();
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::BrokenPipe));
}

#[test]
fn utf8_width_table() {
    assert_eq!(utf8_width(b'a'), Some(1));
    assert_eq!(utf8_width(0xC3), Some(2));
    assert_eq!(utf8_width(0xE2), Some(3));
    assert_eq!(utf8_width(0xF0), Some(4));
    assert_eq!(utf8_width(0x80), None); // continuation byte
    assert_eq!(utf8_width(0xC0), None); // overlong lead
    assert_eq!(utf8_width(0xF5), None); // beyond U+10FFFF
}
