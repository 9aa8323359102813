use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};
use crate::pure::{Always, always};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Elements may be separated by a separator parser; without one they are
/// simply adjacent. The cursor is only ever committed to the position right
/// after the last successful element, so a dangling separator (one not
/// followed by another element) is left unconsumed rather than failing the
/// repetition. Never fails: zero matches yields an empty vector.
///
/// An iteration that consumes nothing (element and separator both empty)
/// ends the repetition after recording that element.
pub struct ZeroOrMore<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> ZeroOrMore<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        ZeroOrMore { parser, separator }
    }
}

impl<'code, P, S> Parser<'code> for ZeroOrMore<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut last_good = cursor;
        let mut current = cursor;

        while let Some((value, after_element)) = self.parser.parse(current) {
            results.push(value);
            last_good = after_element;

            match self.separator.parse(after_element) {
                Some((_, after_separator)) if after_separator.position() > current.position() => {
                    current = after_separator;
                }
                _ => break,
            }
        }

        Some((results, last_good))
    }
}

/// Convenience function to create a ZeroOrMore parser without a separator
pub fn zero_or_more<'code, P>(parser: P) -> ZeroOrMore<P, Always<()>>
where
    P: Parser<'code>,
{
    ZeroOrMore::new(parser, always(()))
}

/// Convenience function to create a ZeroOrMore parser with a separator
pub fn zero_or_more_sep<'code, P, S>(parser: P, separator: S) -> ZeroOrMore<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    ZeroOrMore::new(parser, separator)
}

/// Parser combinator like [`ZeroOrMore`] that requires at least one match
pub struct OneOrMore<P, S> {
    inner: ZeroOrMore<P, S>,
}

impl<'code, P, S> Parser<'code> for OneOrMore<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let (results, cursor) = self.inner.parse(cursor)?;
        if results.is_empty() {
            return None;
        }
        Some((results, cursor))
    }
}

/// Extension trait to add repetition methods to all parsers
pub trait ZeroOrMoreExt<'code>: Parser<'code> + Sized {
    fn zero_or_more(self) -> ZeroOrMore<Self, Always<()>> {
        ZeroOrMore::new(self, always(()))
    }

    fn zero_or_more_sep<S>(self, separator: S) -> ZeroOrMore<Self, S>
    where
        S: Parser<'code>,
    {
        ZeroOrMore::new(self, separator)
    }

    fn one_or_more(self) -> OneOrMore<Self, Always<()>> {
        OneOrMore {
            inner: ZeroOrMore::new(self, always(())),
        }
    }

    fn one_or_more_sep<S>(self, separator: S) -> OneOrMore<Self, S>
    where
        S: Parser<'code>,
    {
        OneOrMore {
            inner: ZeroOrMore::new(self, separator),
        }
    }
}

impl<'code, P> ZeroOrMoreExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::int;
    use crate::pure::never;
    use crate::utf8::char::char;
    use crate::utf8::prefix::prefix_while;
    use crate::utf8::string::literal;

    #[test]
    fn test_zero_matches() {
        let cursor = Cursor::new("xyz");
        let (results, rest) = zero_or_more(int()).parse(cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_never_parser_identity() {
        for input in ["", "abc", "123"] {
            let cursor = Cursor::new(input);
            let (results, rest) = zero_or_more(never::<()>()).parse(cursor).unwrap();
            assert!(results.is_empty());
            assert_eq!(rest, cursor);
        }
    }

    #[test]
    fn test_adjacent_elements() {
        let (results, rest) = literal("ab")
            .zero_or_more()
            .parse(Cursor::new("ababax"))
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(rest.remaining(), "ax");
    }

    #[test]
    fn test_with_separator() {
        let (results, rest) = int()
            .zero_or_more_sep(literal(","))
            .parse(Cursor::new("1,-2,3 extra"))
            .unwrap();
        assert_eq!(results, vec![1, -2, 3]);
        assert_eq!(rest.remaining(), " extra");
    }

    #[test]
    fn test_trailing_separator_not_consumed() {
        let (results, rest) = int()
            .zero_or_more_sep(literal(","))
            .parse(Cursor::new("1,2,"))
            .unwrap();
        assert_eq!(results, vec![1, 2]);
        assert_eq!(rest.remaining(), ",");
    }

    #[test]
    fn test_separator_followed_by_junk() {
        let (results, rest) = int()
            .zero_or_more_sep(literal(", "))
            .parse(Cursor::new("1, 2, x"))
            .unwrap();
        assert_eq!(results, vec![1, 2]);
        assert_eq!(rest.remaining(), ", x");
    }

    #[test]
    fn test_non_matching_separator() {
        let (results, rest) = zero_or_more_sep(int(), literal(","))
            .parse(Cursor::new("1;2;3"))
            .unwrap();
        assert_eq!(results, vec![1]);
        assert_eq!(rest.value(), Some(';'));
    }

    #[test]
    fn test_all_input() {
        let (results, rest) = char().zero_or_more().parse(Cursor::new("héllo")).unwrap();
        assert_eq!(results, vec!['h', 'é', 'l', 'l', 'o']);
        assert!(rest.eos());
    }

    #[test]
    fn test_empty_element_terminates() {
        let (results, rest) = prefix_while(|ch: char| ch == 'a')
            .zero_or_more()
            .parse(Cursor::new("bbb"))
            .unwrap();
        assert_eq!(results, vec![""]);
        assert_eq!(rest.remaining(), "bbb");
    }

    #[test]
    fn test_empty_element_with_separator_progresses() {
        let (results, rest) = prefix_while(|ch: char| ch.is_ascii_digit())
            .zero_or_more_sep(literal(","))
            .parse(Cursor::new("1,,22,x"))
            .unwrap();
        assert_eq!(results, vec!["1", "", "22", ""]);
        assert_eq!(rest.remaining(), "x");
    }

    #[test]
    fn test_one_or_more() {
        let parser = int().one_or_more_sep(literal("+"));

        let (results, _) = parser.parse(Cursor::new("1+2")).unwrap();
        assert_eq!(results, vec![1, 2]);

        let (results, _) = parser.parse(Cursor::new("+1")).unwrap();
        assert_eq!(results, vec![1]);

        assert!(parser.parse(Cursor::new("+x")).is_none());
        assert!(char().one_or_more().parse(Cursor::new("")).is_none());
    }
}
