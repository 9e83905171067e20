//! Parses the text after a bullet marker into a [`ParsedIngredient`]

use std::collections::HashSet;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, space1},
    combinator::{opt, recognize, verify},
    Parser,
};
use tracing::debug;

use super::helpers::{connector, word, Res};
use super::quantity::quantity;
use crate::unit::{singular, Unit};
use crate::util::collapse_whitespace;
use crate::{MealPlanError, MealPlanResult, ParsedIngredient};

/// What followed the leading quantity
#[derive(Clone, Copy, PartialEq, Debug)]
enum UnitToken<'a> {
    /// A unit with an SI conversion, with its text as written
    Convertible(Unit, &'a str),
    /// A count noun such as `slices`; kept for display, never converted
    Count(&'a str),
    None,
}

pub(crate) struct IngredientLineParser<'a> {
    count_units: &'a HashSet<String>,
}

impl<'a> IngredientLineParser<'a> {
    pub(crate) fn new(count_units: &'a HashSet<String>) -> Self {
        Self { count_units }
    }

    /// Parse the content of an ingredient line (bullet already removed).
    ///
    /// Order of extraction: quantity, unit, `of` connector, then everything
    /// left over is the name.
    pub(crate) fn parse(&self, content: &str) -> MealPlanResult<ParsedIngredient> {
        let content = content.trim();
        if content.is_empty() {
            return Err(MealPlanError::ingredient(content, "nothing after the bullet"));
        }

        let (after_quantity, (quantity_text, value)) = match quantity(content) {
            Ok(parsed) => parsed,
            Err(_) => {
                // no leading quantity: the whole line is the name
                return Ok(ParsedIngredient::unquantified(&collapse_whitespace(content)));
            }
        };

        if !value.is_finite() {
            return Err(MealPlanError::ingredient(content, "quantity is too large"));
        }

        let (remaining, unit) = self
            .unit_token(after_quantity)
            .map_err(|reason| MealPlanError::ingredient(content, reason))?;
        let remaining = match connector(remaining) {
            Ok((after_connector, _)) => after_connector,
            Err(_) => remaining,
        };

        let name = collapse_whitespace(remaining);
        if name.is_empty() {
            return Err(MealPlanError::ingredient(content, "missing ingredient name"));
        }

        let quantity_text = collapse_whitespace(quantity_text);
        let ingredient = match unit {
            UnitToken::Convertible(unit, text) => {
                let si = unit.to_si(value);
                if !si.value.is_finite() {
                    return Err(MealPlanError::ingredient(content, "quantity is too large"));
                }
                ParsedIngredient::new(
                    &name,
                    Some(&format!("{quantity_text} {}", collapse_whitespace(text))),
                    Some(si),
                )
            }
            UnitToken::Count(text) => {
                ParsedIngredient::new(&name, Some(&format!("{quantity_text} {text}")), None)
            }
            UnitToken::None => ParsedIngredient::new(&name, Some(&quantity_text), None),
        };
        debug!("parsed ingredient {:?} from {:?}", ingredient, content);
        Ok(ingredient)
    }

    /// Work out what directly follows the quantity.
    ///
    /// A quantity glued to letters (`175g`) must be glued to a known unit; a
    /// spaced word is only taken as a unit when it is one, otherwise it stays
    /// part of the name.
    fn unit_token<'b>(&self, input: &'b str) -> Result<(&'b str, UnitToken<'b>), String> {
        let glued = match input.chars().next() {
            None => return Ok((input, UnitToken::None)),
            Some(c) => !c.is_whitespace(),
        };
        let candidate = input.trim_start();

        if let Ok((rest, text)) = convertible_unit(candidate) {
            if let Ok(unit) = Unit::from_str(text) {
                return Ok((rest, UnitToken::Convertible(unit, text)));
            }
        }

        match word(candidate) {
            Ok((rest, text)) if self.is_count_unit(text) || (!glued && followed_by_of(rest)) => {
                Ok((rest, UnitToken::Count(text)))
            }
            Ok((_, text)) if glued => Err(format!("unrecognized unit \"{text}\"")),
            Err(_) if glued => Err(format!("unexpected \"{input}\" after quantity")),
            _ => Ok((candidate, UnitToken::None)),
        }
    }

    fn is_count_unit(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.count_units.contains(&lowered) || self.count_units.contains(&*singular(&lowered))
    }
}

/// Parse a token that [`Unit::from_str`] accepts, including two-word `fl oz` forms
fn convertible_unit(input: &str) -> Res<&str, &str> {
    verify(
        alt((
            recognize((
                alt((tag_no_case("fluid"), tag_no_case("fl"))),
                opt(char('.')),
                space1,
                word,
                opt(char('.')),
            )),
            recognize((word, opt(char('.')))),
        )),
        |text: &str| Unit::from_str(text).is_ok(),
    )
    .parse(input)
}

fn followed_by_of(rest: &str) -> bool {
    rest.starts_with(char::is_whitespace) && connector(rest).is_ok()
}
