use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator whose second parser is built from the first parser's output
///
/// The composite fails if either step fails. Since the entry cursor is never
/// touched, a failure in the second step leaves the caller exactly where the
/// first step started.
pub struct FlatMap<P, F> {
    parser: P,
    next: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        FlatMap { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let (value, after_first) = self.parser.parse(cursor)?;
        (self.next)(value).parse(after_first)
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'code, P, F, Q>(parser: P, next: F) -> FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    FlatMap::new(parser, next)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, Q>(self, next: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        FlatMap::new(self, next)
    }
}

impl<'code, P> FlatMapExt<'code> for P where P: Parser<'code> {}
