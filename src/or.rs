use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both alternatives start from the same cursor. This is ordered choice: when
/// both could match, the first one wins.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        self.parser1
            .parse(cursor)
            .or_else(|| self.parser2.parse(cursor))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::utf8::string::literal;

    fn word(text: &'static str) -> impl Parser<'static, Output = &'static str> {
        literal(text).map(move |_| text)
    }

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(word("a"), word("b"));

        let (value, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(value, "a");
        assert_eq!(cursor.value(), Some('b'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(word("a"), word("b"));

        let (value, cursor) = parser.parse(Cursor::new("bcd")).unwrap();
        assert_eq!(value, "b");
        assert_eq!(cursor.value(), Some('c'));
    }

    #[test]
    fn test_or_both_fail() {
        let parser = or(word("a"), word("b"));
        assert!(parser.parse(Cursor::new("xyz")).is_none());
    }

    #[test]
    fn test_or_prefers_first_over_longer() {
        let parser = word("<").or(word("<="));

        let (value, cursor) = parser.parse(Cursor::new("<=")).unwrap();
        assert_eq!(value, "<");
        assert_eq!(cursor.remaining(), "=");
    }

    #[test]
    fn test_or_method_chain() {
        let parser = word("a").or(word("b")).or(word("c")).or(word("d"));

        let (value, cursor) = parser.parse(Cursor::new("d")).unwrap();
        assert_eq!(value, "d");
        assert!(cursor.eos());
    }
}
