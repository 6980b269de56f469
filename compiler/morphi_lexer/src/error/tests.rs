use super::*;
use pretty_assertions::assert_eq;

#[test]
fn ambiguous_message_lists_candidates() {
    let err = LexError::Ambiguous {
        fragment: "abc".to_string(),
        len: 3,
        candidates: vec![TokenType::new("IDENT"), TokenType::new("WORD")],
    };
    assert_eq!(
        err.to_string(),
        "ambiguous input `abc`: IDENT, WORD all match 3 bytes"
    );
    assert!(!err.is_recoverable());
}

#[test]
fn unrecognized_is_recoverable() {
    let err = LexError::Unrecognized {
        fragment: "<?>".to_string(),
    };
    assert_eq!(err.to_string(), "no token matches `<?>`");
    assert!(err.is_recoverable());
}

#[test]
fn io_error_converts() {
    let err = LexError::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
    assert_eq!(err.to_string(), "failed to read input: gone");
    assert!(!err.is_recoverable());
    assert!(std::error::Error::source(&err).is_some());
}
