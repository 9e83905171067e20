//! Classifies a single line of pasted text before any interpretation happens

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while},
    character::complete::{char, space0, space1},
    combinator::{eof, opt, peek, recognize, rest, verify},
    error::context,
    Parser,
};

use super::helpers::{bullet, header_number, Res};

/// What a line of pasted text is, independent of where it appears
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Line<'a> {
    Blank,
    /// `Day N`, optionally followed by a separator and a label that is ignored
    DayHeader(u32),
    /// `Meal N`, optionally followed by a separator and a meal-type label
    MealHeader { number: u32, label: Option<&'a str> },
    /// A bulleted line; holds the trimmed text after the marker
    Ingredient(&'a str),
    Unrecognized(&'a str),
}

fn separator(input: &str) -> Res<&str, char> {
    alt((char(':'), char('-'), char('–'), char('—'), char('.'))).parse(input)
}

/// Parse `<keyword> N [sep] [label]`, tolerating leading markdown heading marks
fn header<'a>(keyword: &'static str, input: &'a str) -> Res<&'a str, (u32, &'a str)> {
    context(
        "header",
        (
            take_while(|c: char| c == '#'),
            space0,
            tag_no_case(keyword),
            space0,
            verify(header_number, |n: &u32| *n >= 1),
            // the number must end here: "Meal 1x" is not a header
            peek(alt((eof, space1, recognize(separator)))),
            space0,
            opt(separator),
            rest,
        ),
    )
    .parse(input)
    .map(|(next_input, (_, _, _, _, number, _, _, _, label))| (next_input, (number, label)))
}

/// `(Dinner)` keeps its contents, `Breakfast (7am)` drops the trailing note
fn clean_label(label: &str) -> Option<&str> {
    let label = label.trim_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '*'));
    let label = match label.strip_prefix('(') {
        Some(inner) => inner.split_once(')').map_or(inner, |(head, _)| head),
        None => label.split_once('(').map_or(label, |(head, _)| head),
    };
    let label = label.trim_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '*'));
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Classify one line of pasted text.
///
/// Surrounding whitespace is ignored. Headers win over bullets, and anything
/// that is neither is reported as [`Line::Unrecognized`].
pub fn classify_line(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if let Ok((_, (number, _))) = header("day", line) {
        return Line::DayHeader(number);
    }
    if let Ok((_, (number, label))) = header("meal", line) {
        return Line::MealHeader {
            number,
            label: clean_label(label),
        };
    }
    match bullet(line) {
        Ok((content, _)) => Line::Ingredient(content.trim()),
        Err(_) => Line::Unrecognized(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("Day 1", 1)]
    #[case::lower("day 2", 2)]
    #[case::label("Day 3 - Monday", 3)]
    #[case::colon("DAY 4:", 4)]
    #[case::markdown("## Day 5", 5)]
    #[case::no_space("Day6", 6)]
    fn test_day_headers(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(classify_line(input), Line::DayHeader(expected));
    }

    #[rstest]
    #[case::bare("Meal 1", 1, None)]
    #[case::colon("Meal 1: Breakfast", 1, Some("Breakfast"))]
    #[case::hyphen("Meal 2 - Lunch", 2, Some("Lunch"))]
    #[case::trailing_colon("Meal 3:", 3, None)]
    #[case::spaced("  meal   4   -   Pre Workout  ", 4, Some("Pre Workout"))]
    #[case::parens("Meal 5 (Dinner)", 5, Some("Dinner"))]
    #[case::en_dash("Meal 6 – Snack", 6, Some("Snack"))]
    #[case::markdown("### Meal 7: Supper", 7, Some("Supper"))]
    #[case::note("Meal 1: Breakfast (7am)", 1, Some("Breakfast"))]
    #[case::parens_note("Meal 2 (Lunch) 12pm", 2, Some("Lunch"))]
    #[case::empty_parens("Meal 3 ()", 3, None)]
    #[case::bold("Meal 4: **Dinner**", 4, Some("Dinner"))]
    fn test_meal_headers(
        #[case] input: &str,
        #[case] number: u32,
        #[case] label: Option<&str>,
    ) {
        assert_eq!(classify_line(input), Line::MealHeader { number, label });
    }

    #[rstest]
    #[case::dash("-175g of Jasmine Rice", "175g of Jasmine Rice")]
    #[case::star("*  2 eggs", "2 eggs")]
    #[case::dot("• 1 banana ", "1 banana")]
    #[case::indented("   - Salt to taste", "Salt to taste")]
    #[case::empty("-", "")]
    fn test_ingredient_lines(#[case] input: &str, #[case] content: &str) {
        assert_eq!(classify_line(input), Line::Ingredient(content));
    }

    #[rstest]
    #[case("Invalid line with no dash")]
    #[case("Meal prep notes")]
    #[case("Meal 0")]
    #[case("Day 0")]
    #[case("Meal 1x")]
    #[case("Daylight 2")]
    fn test_unrecognized_lines(#[case] input: &str) {
        assert_eq!(classify_line(input), Line::Unrecognized(input));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), Line::Blank);
        assert_eq!(classify_line(" \t "), Line::Blank);
    }
}
