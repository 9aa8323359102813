use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value fails the parse without consuming input.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.predicate)(&value).then_some((value, cursor))
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> + Sized {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}
