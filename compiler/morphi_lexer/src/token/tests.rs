use super::*;
use pretty_assertions::assert_eq;

#[test]
fn token_type_equality_is_by_name() {
    let a = TokenType::new("NUM");
    let b = TokenType::from("NUM".to_string());
    let c = TokenType::from("WORD");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.as_str(), "NUM");
}

#[test]
fn token_type_formatting() {
    let kind = TokenType::new("PLUS");
    assert_eq!(kind.to_string(), "PLUS");
    assert_eq!(format!("{kind:?}"), "PLUS");
}

#[test]
fn token_type_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(TokenType::new("EQ"));
    set.insert(TokenType::new("EQ")); // duplicate
    set.insert(TokenType::new("NUM"));
    assert_eq!(set.len(), 2);
}

#[test]
fn token_accessors() {
    let token = Token::new("42".to_string(), TokenType::new("NUM"));
    assert_eq!(token.content(), "42");
    assert_eq!(token.kind(), &TokenType::new("NUM"));
    assert_eq!(token.to_string(), "NUM (42)");

    let (content, kind) = token.into_parts();
    assert_eq!(content, "42");
    assert_eq!(kind.as_str(), "NUM");
}
