//! Helper functions for parsing meal plan text
//!
//! Low-level nom parsers shared by the line classifier and the ingredient parser.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, digit1, space0, space1},
    combinator::{eof, map_res, opt, recognize},
    error::context,
    IResult, Parser,
};
use nom_language::error::VerboseError;

pub(crate) type Res<T, U> = IResult<T, U, VerboseError<T>>;

/// Parse a plain decimal number such as `175`, `1.5` or `.5`
pub(crate) fn decimal(input: &str) -> Res<&str, f64> {
    context(
        "decimal",
        map_res(
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
            |s: &str| s.parse::<f64>(),
        ),
    )
    .parse(input)
}

/// Parse a positive integer, used for `Day N` and `Meal N` headers
pub(crate) fn header_number(input: &str) -> Res<&str, u32> {
    context(
        "header_number",
        map_res(digit1, |s: &str| s.parse::<u32>()),
    )
    .parse(input)
}

/// Parse a run of alphabetic characters, e.g. a unit or the first word of a name
pub(crate) fn word(input: &str) -> Res<&str, &str> {
    take_while1(|c: char| c.is_alphabetic()).parse(input)
}

/// Parse one of the accepted bullet markers
pub(crate) fn bullet(input: &str) -> Res<&str, char> {
    context("bullet", alt((char('-'), char('*'), char('•')))).parse(input)
}

/// Parse the `of` connector between a unit and the ingredient name, e.g. `175g of rice`
pub(crate) fn connector(input: &str) -> Res<&str, &str> {
    context(
        "connector",
        recognize((space0, tag_no_case("of"), alt((space1, eof)))),
    )
    .parse(input)
}
