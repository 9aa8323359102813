use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Yields `Some(value)` when the inner parser succeeds and `None` without
/// consuming anything when it fails. Never fails itself.
pub struct Optional<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Some((value, cursor)) => Some((Some(value), cursor)),
            None => Some((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional { parser }
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional { parser: self }
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
