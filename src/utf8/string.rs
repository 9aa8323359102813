use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string and produces no value
///
/// Succeeds iff the remaining input starts with the expected text, consuming
/// exactly that text. An empty literal always succeeds without consuming.
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.expected
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        if !cursor.starts_with(&self.expected) {
            return None;
        }
        let cursor = cursor.advance(self.expected.len())?;
        Some(((), cursor))
    }
}

impl From<&'static str> for Literal {
    fn from(expected: &'static str) -> Self {
        Literal::new(expected)
    }
}

impl From<String> for Literal {
    fn from(expected: String) -> Self {
        Literal::new(expected)
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::char::char;

    #[test]
    fn test_exact_match() {
        let (_, rest) = literal("hello").parse(Cursor::new("hello")).unwrap();
        assert!(rest.eos());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let (_, rest) = literal("hello").parse(Cursor::new("hello world")).unwrap();

        let (next_char, _) = char().parse(rest).unwrap();
        assert_eq!(next_char, ' ');
    }

    #[test]
    fn test_unicode_string() {
        let (_, rest) = literal("こんにちは").parse(Cursor::new("こんにちは世界")).unwrap();
        assert_eq!(rest.remaining(), "世界");
    }

    #[test]
    fn test_empty_literal() {
        let cursor = Cursor::new("hello");
        let (_, rest) = literal("").parse(cursor).unwrap();
        assert_eq!(rest.position(), cursor.position());
    }

    #[test]
    fn test_mismatch_fails() {
        assert!(literal("hello").parse(Cursor::new("help")).is_none());
        assert!(literal("hello").parse(Cursor::new("world")).is_none());
    }

    #[test]
    fn test_insufficient_input() {
        assert!(literal("hello").parse(Cursor::new("hel")).is_none());
        assert!(literal("hello").parse(Cursor::new("")).is_none());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(literal("hello").parse(Cursor::new("Hello")).is_none());
    }

    #[test]
    fn test_from_conversions() {
        let from_static: Literal = "::".into();
        let from_owned: Literal = String::from("->").into();

        assert_eq!(from_static.text(), "::");
        assert!(from_static.parse(Cursor::new("::x")).is_some());
        assert!(from_owned.parse(Cursor::new("->x")).is_some());
    }

    #[test]
    fn test_operators_and_symbols() {
        let test_cases = ["<-", "->", "==", "!=", "<=", ">=", "::", "}}", "{{"];

        for symbol in test_cases {
            let (_, rest) = literal(symbol).parse(Cursor::new(symbol)).unwrap();
            assert!(rest.eos(), "Failed for symbol: {}", symbol);
        }
    }
}
