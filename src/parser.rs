use crate::cursor::Cursor;

/// Result of a parse attempt: the value and the advanced cursor, or nothing
///
/// Failure carries no payload. Because cursors are passed by value, the
/// caller still holds its own untouched cursor when `None` comes back.
pub type PResult<'code, T> = Option<(T, Cursor<'code>)>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success, or `None`
    /// if the parse fails. Failures never consume input.
    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output>;
}

/// A type-erased parser that can be stored in collections or statics
pub type BoxedParser<'a, 'code, T> = Box<dyn Parser<'code, Output = T> + Send + Sync + 'a>;

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, 'code, Self::Output>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

/// Parser backed by a plain function or closure
pub struct FromFn<F> {
    function: F,
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(Cursor<'code>) -> PResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        (self.function)(cursor)
    }
}

/// Wrap a closure as a parser
///
/// The closure must uphold the parser contract itself: on failure it returns
/// `None` and on success the cursor it returns must come from the one it was
/// given.
pub fn from_fn<'code, F, T>(function: F) -> FromFn<F>
where
    F: Fn(Cursor<'code>) -> PResult<'code, T>,
{
    FromFn { function }
}
