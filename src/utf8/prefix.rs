use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};
use std::borrow::Cow;

/// Parser that consumes the maximal run of characters satisfying a predicate
///
/// Never fails; an empty run yields an empty slice.
pub struct PrefixWhile<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        Some(cursor.take_while(&self.predicate))
    }
}

/// Convenience function to create a PrefixWhile parser
pub fn prefix_while<F>(predicate: F) -> PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    PrefixWhile { predicate }
}

/// Whether the delimiter itself is consumed and returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Before,
    After,
}

/// Parser that consumes input up to (or through) the first occurrence of a delimiter
///
/// Fails without consuming if the delimiter never occurs. An empty delimiter
/// never matches.
#[derive(Debug, Clone)]
pub struct Delimited {
    delimiter: Cow<'static, str>,
    boundary: Boundary,
}

impl<'code> Parser<'code> for Delimited {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        if self.delimiter.is_empty() {
            return None;
        }
        let rest = cursor.remaining();
        let found = rest.find(&*self.delimiter)?;
        let len = match self.boundary {
            Boundary::Before => found,
            Boundary::After => found + self.delimiter.len(),
        };
        let advanced = cursor.advance(len)?;
        Some((&rest[..len], advanced))
    }
}

/// Parser returning everything before the first `delimiter`, leaving the delimiter unconsumed
pub fn prefix_up_to(delimiter: impl Into<Cow<'static, str>>) -> Delimited {
    Delimited {
        delimiter: delimiter.into(),
        boundary: Boundary::Before,
    }
}

/// Parser returning everything up to and including the first `delimiter`
pub fn prefix_through(delimiter: impl Into<Cow<'static, str>>) -> Delimited {
    Delimited {
        delimiter: delimiter.into(),
        boundary: Boundary::After,
    }
}
