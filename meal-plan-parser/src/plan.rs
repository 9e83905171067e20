//! Day and meal assembly for pasted meal plans

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::parser::{classify_line, IngredientLineParser, Line};
use crate::util::collapse_whitespace;
use crate::{
    ManualMealPlanInput, MealPlanError, MealPlanResult, ParseResult, ParsedIngredient, ParsedMeal,
};

/// `mealType` of a meal whose header carried no label
pub const UNSPECIFIED_MEAL_TYPE: &str = "unspecified";

/// Customizable meal plan parser
///
/// * `count_units` - count nouns kept in the display quantity but never converted
///   (`2 slices of bread`). Stored lower-case and singular.
/// * `meal_types` - lower-case meal label aliases mapped onto canonical meal types
///
/// # Examples
///
/// ```
/// use meal_plan::{ManualMealPlanInput, MealPlanParser};
///
/// let mut parser = MealPlanParser::new();
/// parser.count_units.insert("rasher".to_string());
/// parser
///     .meal_types
///     .insert("second breakfast".to_string(), "breakfast".to_string());
///
/// let input = ManualMealPlanInput::from_text("Meal 1: Second Breakfast\n- 2 rashers bacon");
/// let result = parser.parse(&input).unwrap();
/// assert_eq!(result.meals[0].meal_type, "breakfast");
/// assert_eq!(
///     result.meals[0].ingredients[0].display_quantity.as_deref(),
///     Some("2 rashers")
/// );
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct MealPlanParser {
    pub count_units: HashSet<String>,
    pub meal_types: HashMap<String, String>,
}

impl Default for MealPlanParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MealPlanParser {
    /// Create a parser with the default count units and meal-type aliases
    pub fn new() -> Self {
        let count_units = [
            // not convertible to a mass or volume without knowing the food
            "slice", "piece", "scoop", "clove", "can", "stick", "handful", "pinch", "dash",
            "serving", "bunch", "head", "packet", "package", "pack", "tin", "sprig", "bar", "jar",
            "sachet", "whole",
        ]
        .iter()
        .map(|&s| s.to_string())
        .collect();

        let meal_types = [
            ("breakfast", "breakfast"),
            ("lunch", "lunch"),
            ("dinner", "dinner"),
            ("supper", "dinner"),
            ("snack", "snack"),
            ("snacks", "snack"),
            ("brunch", "brunch"),
            ("dessert", "dessert"),
            ("pre-workout", "pre-workout"),
            ("pre workout", "pre-workout"),
            ("preworkout", "pre-workout"),
            ("post-workout", "post-workout"),
            ("post workout", "post-workout"),
            ("postworkout", "post-workout"),
        ]
        .iter()
        .map(|&(alias, canonical)| (alias.to_string(), canonical.to_string()))
        .collect();

        MealPlanParser {
            count_units,
            meal_types,
        }
    }

    /// Parse pasted meal plan text into meals and warnings.
    ///
    /// Malformed ingredient lines and stray text inside a meal are skipped
    /// and reported in [`ParseResult::parse_warnings`]. Fails with
    /// [`MealPlanError::NoValidMeals`] when no `Meal N` header is found.
    #[tracing::instrument(
        name = "parse_manual_meal_plan",
        skip_all,
        fields(plan = %input.plan_name)
    )]
    pub fn parse(&self, input: &ManualMealPlanInput) -> MealPlanResult<ParseResult> {
        let text = input.pasted_text.replace("\r\n", "\n").replace('\r', "\n");
        let ingredients = IngredientLineParser::new(&self.count_units);
        let mut builder = PlanBuilder::default();

        for (index, raw) in text.lines().enumerate() {
            let line_number = index + 1;
            match classify_line(raw) {
                Line::Blank => {}
                Line::DayHeader(day) => builder.start_day(day),
                Line::MealHeader { number, label } => {
                    let meal_type = self.meal_type(label);
                    debug!(line_number, number, %meal_type, "meal header");
                    builder.start_meal(meal_type);
                }
                Line::Ingredient(content) => match ingredients.parse(content) {
                    Ok(ingredient) => builder.add_ingredient(line_number, ingredient),
                    Err(e) => builder.warn(format!("Line {line_number}: {e}")),
                },
                Line::Unrecognized(text) => builder.unrecognized(line_number, text),
            }
        }

        let result = builder.finish()?;
        check_declared_shape(input, &result);
        Ok(result)
    }

    /// Parse a single ingredient line, with or without its bullet marker
    pub fn parse_ingredient_line(&self, line: &str) -> MealPlanResult<ParsedIngredient> {
        let content = match classify_line(line) {
            Line::Ingredient(content) => content,
            _ => line.trim(),
        };
        IngredientLineParser::new(&self.count_units).parse(content)
    }

    /// Map a header label onto a meal type: known aliases become their
    /// canonical name, anything else is kept lower-cased.
    pub fn meal_type(&self, label: Option<&str>) -> String {
        let Some(label) = label else {
            return UNSPECIFIED_MEAL_TYPE.to_string();
        };
        let normalized = collapse_whitespace(label).to_lowercase();
        match self.meal_types.get(&normalized) {
            Some(canonical) => canonical.clone(),
            None => {
                debug!("unknown meal label {:?}, keeping as-is", normalized);
                normalized
            }
        }
    }
}

/// Parse pasted meal plan text with the default [`MealPlanParser`]
pub fn parse_manual_meal_plan(input: &ManualMealPlanInput) -> MealPlanResult<ParseResult> {
    MealPlanParser::new().parse(input)
}

/// Accumulator for a single parse call
struct PlanBuilder {
    day: u32,
    meals_in_day: u32,
    meals: Vec<ParsedMeal>,
    current: Option<ParsedMeal>,
    warnings: Vec<String>,
}

impl Default for PlanBuilder {
    fn default() -> Self {
        PlanBuilder {
            day: 1,
            meals_in_day: 0,
            meals: Vec::new(),
            current: None,
            warnings: Vec::new(),
        }
    }
}

impl PlanBuilder {
    fn close_meal(&mut self) {
        if let Some(meal) = self.current.take() {
            self.meals.push(meal);
        }
    }

    fn start_day(&mut self, day: u32) {
        self.close_meal();
        self.day = day;
        self.meals_in_day = 0;
    }

    fn start_meal(&mut self, meal_type: String) {
        self.close_meal();
        self.meals_in_day += 1;
        self.current = Some(ParsedMeal {
            day: self.day,
            meal_number: self.meals_in_day,
            meal_type,
            ingredients: Vec::new(),
        });
    }

    fn add_ingredient(&mut self, line_number: usize, ingredient: ParsedIngredient) {
        match self.current.as_mut() {
            Some(meal) => meal.ingredients.push(ingredient),
            None => self.warn(format!(
                "Line {line_number}: ingredient \"{}\" appears before any meal header",
                ingredient.name
            )),
        }
    }

    fn unrecognized(&mut self, line_number: usize, text: &str) {
        if self.current.is_some() {
            self.warn(format!("Line {line_number}: skipped unrecognized line \"{text}\""));
        } else {
            debug!(line_number, "ignoring text outside of a meal: {:?}", text);
        }
    }

    fn warn(&mut self, warning: String) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    fn finish(mut self) -> MealPlanResult<ParseResult> {
        self.close_meal();
        if self.meals.is_empty() {
            return Err(MealPlanError::NoValidMeals);
        }
        Ok(ParseResult {
            meals: self.meals,
            parse_warnings: self.warnings,
        })
    }
}

/// `days` and `mealsPerDay` are informational; a mismatch is only logged
fn check_declared_shape(input: &ManualMealPlanInput, result: &ParseResult) {
    let days: HashSet<u32> = result.meals.iter().map(|m| m.day).collect();
    if days.len() != input.days as usize {
        info!(
            "plan declares {} day(s) but {} were parsed",
            input.days,
            days.len()
        );
    }
    let expected = input.days as usize * input.meals_per_day as usize;
    if result.meals.len() != expected {
        info!(
            "plan declares {} meal(s) but {} were parsed",
            expected,
            result.meals.len()
        );
    }
}
