use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

pub mod double;
pub mod int;

pub use double::double;
pub use int::int;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Double(f64),
}

/// Parser that matches either an integer or a decimal number
///
/// Text without a decimal point becomes `Number::Int`; anything the integer
/// parser cannot represent falls back to `Number::Double`.
pub fn number() -> NumberParser {
    NumberParser
}

pub struct NumberParser;

impl<'code> Parser<'code> for NumberParser {
    type Output = Number;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        if let Some((value, rest)) = int().parse(cursor) {
            if rest.value() != Some('.') {
                return Some((Number::Int(value), rest));
            }
        }
        let (value, rest) = double().parse(cursor)?;
        Some((Number::Double(value), rest))
    }
}
