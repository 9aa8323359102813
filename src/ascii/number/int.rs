use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Consume an optional leading `+` or `-`
pub(super) fn sign(cursor: Cursor<'_>) -> Cursor<'_> {
    match cursor.value() {
        Some('+') | Some('-') => cursor.next(),
        _ => cursor,
    }
}

/// Parser that matches ASCII integer numbers (positive or negative)
///
/// Takes an optional sign followed by the maximal run of decimal digits. At
/// least one digit is required, and values outside the `i64` range fail.
pub fn int() -> IntParser {
    IntParser
}

pub struct IntParser;

impl<'code> Parser<'code> for IntParser {
    type Output = i64;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let (digits, end) = sign(cursor).take_while(|ch| ch.is_ascii_digit());
        if digits.is_empty() {
            return None;
        }

        let value = cursor.consumed_until(&end).parse::<i64>().ok()?;
        Some((value, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_integer() {
        let (value, cursor) = int().parse(Cursor::new("123abc")).unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor.value(), Some('a'));
    }

    #[test]
    fn test_negative_integer() {
        let (value, cursor) = int().parse(Cursor::new("-456xyz")).unwrap();
        assert_eq!(value, -456);
        assert_eq!(cursor.value(), Some('x'));
    }

    #[test]
    fn test_integer_with_plus() {
        let (value, cursor) = int().parse(Cursor::new("+789")).unwrap();
        assert_eq!(value, 789);
        assert!(cursor.eos());
    }

    #[test]
    fn test_zero_and_leading_zeros() {
        assert_eq!(int().parse(Cursor::new("0")).unwrap().0, 0);
        assert_eq!(int().parse(Cursor::new("007")).unwrap().0, 7);
        assert_eq!(int().parse(Cursor::new("-0")).unwrap().0, 0);
    }

    #[test]
    fn test_no_digit_fails() {
        assert!(int().parse(Cursor::new("abc")).is_none());
        assert!(int().parse(Cursor::new("")).is_none());
    }

    #[test]
    fn test_sign_only_fails() {
        assert!(int().parse(Cursor::new("-abc")).is_none());
        assert!(int().parse(Cursor::new("+")).is_none());
    }

    #[test]
    fn test_double_sign_fails() {
        assert!(int().parse(Cursor::new("--5")).is_none());
        assert!(int().parse(Cursor::new("+-5")).is_none());
    }

    #[test]
    fn test_stops_at_decimal_point() {
        let (value, cursor) = int().parse(Cursor::new("12.5")).unwrap();
        assert_eq!(value, 12);
        assert_eq!(cursor.remaining(), ".5");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            int().parse(Cursor::new("9223372036854775807")).unwrap().0,
            i64::MAX
        );
        assert_eq!(
            int().parse(Cursor::new("-9223372036854775808")).unwrap().0,
            i64::MIN
        );
    }

    #[test]
    fn test_overflow_fails() {
        assert!(int().parse(Cursor::new("9223372036854775808")).is_none());
        assert!(int().parse(Cursor::new("-99999999999999999999")).is_none());
    }

    #[test]
    fn test_non_ascii_digits_not_consumed() {
        // Arabic-Indic digit three
        assert!(int().parse(Cursor::new("\u{0663}")).is_none());
    }
}
