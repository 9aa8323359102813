use crate::cursor::Cursor;
use crate::parser::{PResult, Parser};

/// Parser combinator that runs a tuple of parsers strictly left to right
///
/// Succeeds with a flat tuple of every output, so `zip((a, b, c))` produces
/// `(A, B, C)` rather than nested pairs. If any member fails the whole
/// sequence fails, and the caller's cursor is still where the first member
/// started.
///
/// Example:
/// ```
/// use parsistr::ascii::int;
/// use parsistr::utf8::string::literal;
/// use parsistr::zip::zip;
/// use parsistr::{Cursor, Parser};
///
/// let cursor = Cursor::new("12:30");
/// let ((hours, (), minutes), rest) = zip((int(), literal(":"), int()))
///     .parse(cursor)
///     .unwrap();
/// assert_eq!((hours, minutes), (12, 30));
/// assert!(rest.eos());
/// ```
pub struct Zip<T> {
    parsers: T,
}

impl<T> Zip<T> {
    pub fn new(parsers: T) -> Self {
        Zip { parsers }
    }
}

/// Create a Zip parser from a tuple of 2 to 8 parsers
pub fn zip<T>(parsers: T) -> Zip<T> {
    Zip::new(parsers)
}

macro_rules! impl_zip {
    ($($parser:ident $binding:ident $value:ident),+) => {
        impl<'code, $($parser),+> Parser<'code> for Zip<($($parser,)+)>
        where
            $($parser: Parser<'code>),+
        {
            type Output = ($($parser::Output,)+);

            fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
                let ($($binding,)+) = &self.parsers;
                $(let ($value, cursor) = $binding.parse(cursor)?;)+
                Some((($($value,)+), cursor))
            }
        }
    };
}

impl_zip!(P1 p1 v1, P2 p2 v2);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7);
impl_zip!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8);

/// Sequence two parsers and keep the left output
pub struct Skip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let (kept, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Some((kept, cursor))
    }
}

/// Sequence two parsers and keep the right output
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> PResult<'code, Self::Output> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Extension trait adding sequencing methods to all parsers
pub trait ZipExt<'code>: Parser<'code> + Sized {
    /// Run `other` after `self` and keep both outputs as a pair
    fn take<P>(self, other: P) -> Zip<(Self, P)>
    where
        P: Parser<'code>,
    {
        Zip::new((self, other))
    }

    /// Run `other` after `self` and discard its output
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<'code>,
    {
        Skip {
            parser1: self,
            parser2: other,
        }
    }

    /// Run `other` after `self` and keep only its output
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then {
            parser1: self,
            parser2: other,
        }
    }
}

impl<'code, P> ZipExt<'code> for P where P: Parser<'code> {}
