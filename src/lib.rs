//! # ParsiStr - Backtracking Parser Combinators over Text
//!
//! ParsiStr provides small parsers over an in-memory string that combine into
//! larger ones. The library emphasizes:
//!
//! - **Atomic failure**: a parser that fails never consumes input. Cursors are
//!   `Copy` values threaded through each parser, so backtracking is free
//! - **Ordered choice**: alternatives are tried in order and the first match wins
//! - **Payload-free failure**: parsers return `Option`; the only diagnostic is
//!   where a top-level parse stopped (see [`parse_complete`])
//! - **Shareable parsers**: parsers hold no mutable state and can be reused
//!   across inputs and threads
//!
//! ```
//! use parsistr::prelude::*;
//!
//! let entry = zip((literal("| ").then(int()), literal(" = ").then(double())));
//! let (value, residue) = run(&entry, "| 3 = 1.5 rest");
//! assert_eq!(value, Some((3, 1.5)));
//! assert_eq!(residue, " rest");
//! ```

pub mod ascii;
pub mod between;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod flat_map;
pub mod lazy;
pub mod map;
pub mod one_of;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pure;
pub mod record;
pub mod run;
pub mod utf8;
pub mod zero_or_more;
pub mod zip;

pub use cursor::Cursor;
pub use error::{CodeLoc, FailureKind, ParseFailure};
pub use parser::{BoxedParser, PResult, Parser, from_fn};
pub use run::{parse_complete, run};

/// Everything needed to build and run a grammar
pub mod prelude {
    pub use crate::ascii::number::{Number, double, int, number};
    pub use crate::between::between;
    pub use crate::cursor::Cursor;
    pub use crate::filter::FilterExt;
    pub use crate::flat_map::FlatMapExt;
    pub use crate::lazy::lazy;
    pub use crate::map::MapExt;
    pub use crate::one_of::one_of;
    pub use crate::optional::{OptionalExt, optional};
    pub use crate::or::OrExt;
    pub use crate::parser::{BoxedExt, BoxedParser, PResult, Parser, from_fn};
    pub use crate::pure::{always, end, never};
    pub use crate::run::{parse_complete, run};
    pub use crate::utf8::char::char;
    pub use crate::utf8::prefix::{prefix_through, prefix_up_to, prefix_while};
    pub use crate::utf8::string::{Literal, literal};
    pub use crate::zero_or_more::{ZeroOrMoreExt, zero_or_more, zero_or_more_sep};
    pub use crate::zip::{ZipExt, zip};
}
