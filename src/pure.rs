use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of its value, consuming nothing
#[derive(Debug, Clone)]
pub struct Always<T> {
    value: T,
}

impl<'code, T> Parser<'code> for Always<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        Some((self.value.clone(), cursor))
    }
}

/// Convenience function to create an Always parser
pub fn always<T: Clone>(value: T) -> Always<T> {
    Always { value }
}

/// Parser that never succeeds
pub struct Never<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<'code, T> Parser<'code> for Never<T> {
    type Output = T;

    fn parse(&self, _cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        None
    }
}

/// Convenience function to create a Never parser
pub fn never<T>() -> Never<T> {
    Never {
        _phantom: PhantomData,
    }
}

/// Parser that succeeds only when no input remains
pub struct End;

impl<'code> Parser<'code> for End {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        cursor.eos().then_some(((), cursor))
    }
}

/// Convenience function to create an End parser
pub fn end() -> End {
    End
}
