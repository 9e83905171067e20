//! Leading quantities: decimals, slash fractions and unicode vulgar fractions

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{space0, space1},
    combinator::{consumed, opt, verify},
    error::{context, ParseError},
    Parser,
};
use nom_language::error::VerboseError;

use super::helpers::{decimal, Res};

fn v_frac_to_num(input: char) -> Option<f64> {
    // https://www.compart.com/en/unicode/search?q=vulgar+fraction#characters
    let (n, d): (i32, i32) = match input {
        '¾' => (3, 4),
        '⅛' => (1, 8),
        '¼' => (1, 4),
        '⅓' => (1, 3),
        '½' => (1, 2),
        '⅔' => (2, 3),
        '⅕' => (1, 5),
        '⅖' => (2, 5),
        '⅗' => (3, 5),
        '⅘' => (4, 5),
        '⅙' => (1, 6),
        '⅚' => (5, 6),
        '⅜' => (3, 8),
        '⅝' => (5, 8),
        '⅞' => (7, 8),
        _ => return None,
    };
    Some(n as f64 / d as f64)
}

/// parses unicode vulgar fractions
fn v_fraction(input: &str) -> Res<&str, f64> {
    match input.chars().next() {
        Some(c) => match v_frac_to_num(c) {
            Some(val) => Ok((&input[c.len_utf8()..], val)),
            None => Err(nom::Err::Error(VerboseError::from_error_kind(
                input,
                nom::error::ErrorKind::Satisfy,
            ))),
        },
        None => Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            nom::error::ErrorKind::Eof,
        ))),
    }
}

fn n_fraction(input: &str) -> Res<&str, f64> {
    context(
        "n_fraction",
        verify(
            (decimal, tag("/"), decimal),
            |parts: &(f64, &str, f64)| parts.2 != 0.0,
        ),
    )
    .parse(input)
    .map(|(next_input, (n, _, d))| (next_input, n / d))
}

/// Parses mixed number formats like `1 ⅛`, `1⅛` or `1 1/8` into `1.125`
pub(crate) fn fraction_number(input: &str) -> Res<&str, f64> {
    let vulgar_fraction_parser = (opt((decimal, space0)), v_fraction);
    let slash_fraction_parser = (opt((decimal, space1)), n_fraction);

    context(
        "fraction_number",
        alt((vulgar_fraction_parser, slash_fraction_parser)),
    )
    .parse(input)
    .map(|(next_input, (whole_number, fractional_part))| {
        let whole_value = whole_number.map_or(0.0, |(num, _)| num);
        (next_input, whole_value + fractional_part)
    })
}

/// Parse a leading quantity, returning the text as written alongside its value
pub(crate) fn quantity(input: &str) -> Res<&str, (&str, f64)> {
    context("quantity", consumed(alt((fraction_number, decimal)))).parse(input)
}
