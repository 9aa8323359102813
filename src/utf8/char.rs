use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser that consumes and returns a single character
pub struct CharParser;

impl<'code> Parser<'code> for CharParser {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let ch = cursor.value()?;
        Some((ch, cursor.next()))
    }
}

/// Convenience function to create a CharParser
pub fn char() -> CharParser {
    CharParser
}
