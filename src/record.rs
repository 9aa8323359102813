//! A tabular record grammar built only from the core combinators
//!
//! Each record is a group of table-cell lines:
//!
//! ```text
//! | 1
//! | {{flag|US}}
//! | 78.5
//! | 81.2
//! | 79.9
//! ```
//!
//! The first line holds the numeric id, the second the name wrapped in a
//! `{{flag|…}}` template and the last three one numeric value each. Records
//! in a table are separated by a `|-` row line.

use crate::ascii::{double, int};
use crate::between::between;
use crate::error::ParseFailure;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::run::parse_complete;
use crate::utf8::prefix::prefix_up_to;
use crate::utf8::string::literal;
use crate::zero_or_more::ZeroOrMoreExt;
use crate::zip::{ZipExt, zip};

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub values: [f64; 3],
}

/// One `| <content>` cell line
fn cell<'code, P>(content: P) -> impl Parser<'code, Output = P::Output>
where
    P: Parser<'code>,
{
    literal("| ").then(content).skip(literal("\n"))
}

fn name<'code>() -> impl Parser<'code, Output = String> {
    cell(between(literal("{{flag|"), prefix_up_to("}}"), literal("}}")))
        .map(|name| name.trim().to_string())
}

/// Parser for a single record with exactly three value lines
pub fn record<'code>() -> impl Parser<'code, Output = Record> {
    zip((
        cell(int()),
        name(),
        cell(double()),
        cell(double()),
        cell(double()),
    ))
    .map(|(id, name, first, second, third)| Record {
        id,
        name,
        values: [first, second, third],
    })
}

/// Parser for a table of records separated by `|-` lines
pub fn records<'code>() -> impl Parser<'code, Output = Vec<Record>> {
    record().zero_or_more_sep(literal("|-\n"))
}

impl Record {
    /// Parse a table that must consist of nothing but records
    pub fn parse_all(input: &str) -> Result<Vec<Record>, ParseFailure<'_>> {
        parse_complete(&records(), input)
    }
}
