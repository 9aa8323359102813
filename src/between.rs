use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value with
/// the delimiters discarded. Does not skip whitespace.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"{{flag|US}}"` → `"flag|US"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Some((value, cursor))
    }
}

/// Creates a parser that matches content between two delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between {
        open,
        content,
        close,
    }
}
