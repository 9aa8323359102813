use super::int::sign;
use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser that matches ASCII floating point numbers
///
/// Takes an optional sign followed by the maximal run of digits and decimal
/// points, where only the first `.` belongs to the number. A second `.` ends
/// the run and is left unconsumed. The scanned text must parse to a finite
/// `f64`.
pub fn double() -> DoubleParser {
    DoubleParser
}

pub struct DoubleParser;

impl<'code> Parser<'code> for DoubleParser {
    type Output = f64;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let mut seen_point = false;
        let (_, end) = sign(cursor).take_while(|ch| match ch {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        });

        let value = cursor.consumed_until(&end).parse::<f64>().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some((value, end))
    }
}
