use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that tries a list of parsers in order
///
/// Every alternative starts from the same entry cursor; the first success
/// wins even if a later alternative would have consumed more. Fails when the
/// list is exhausted (including an empty list). Alternatives of different
/// types can share a list through [`BoxedParser`](crate::parser::BoxedParser).
pub struct OneOf<P> {
    parsers: Vec<P>,
}

impl<P> OneOf<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        OneOf { parsers }
    }
}

impl<'code, P> Parser<'code> for OneOf<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        self.parsers.iter().find_map(|parser| parser.parse(cursor))
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<'code, P>(parsers: impl IntoIterator<Item = P>) -> OneOf<P>
where
    P: Parser<'code>,
{
    OneOf::new(parsers.into_iter().collect())
}
