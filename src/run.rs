use crate::cursor::Cursor;
use crate::error::{CodeLoc, FailureKind, ParseFailure};
use crate::parser::Parser;
use log::{debug, trace};

/// Run a parser once against a whole input
///
/// Returns the result together with the residue, the part of the input left
/// unconsumed. On failure the residue is the full input.
pub fn run<'code, P>(parser: &P, input: &'code str) -> (Option<P::Output>, &'code str)
where
    P: Parser<'code> + ?Sized,
{
    trace!("running parser over {} bytes", input.len());
    let cursor = Cursor::new(input);

    match parser.parse(cursor) {
        Some((value, rest)) => {
            trace!("parser stopped at byte {}", rest.position());
            (Some(value), rest.remaining())
        }
        None => {
            debug!("parser did not match input of {} bytes", input.len());
            (None, cursor.remaining())
        }
    }
}

/// Run a parser and require it to consume the whole input
pub fn parse_complete<'code, P>(parser: &P, input: &'code str) -> Result<P::Output, ParseFailure<'code>>
where
    P: Parser<'code> + ?Sized,
{
    let (value, residue) = run(parser, input);
    let position = input.len() - residue.len();
    let loc = CodeLoc::new(input, position);

    match value {
        None => Err(ParseFailure::new(FailureKind::NoMatch, loc)),
        Some(_) if !residue.is_empty() => {
            debug!("parser left {} unconsumed bytes at {}", residue.len(), position);
            Err(ParseFailure::new(FailureKind::TrailingInput, loc))
        }
        Some(value) => Ok(value),
    }
}
