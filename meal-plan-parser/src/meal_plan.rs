//! Plan-level data model: parser input, parse results and the converted [`MealPlan`]

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{MealPlanError, MealPlanResult, ParsedIngredient};

/// Caller-supplied request to parse a pasted meal plan
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualMealPlanInput {
    pub plan_name: String,
    /// Free-form tag such as `muscle_gain`
    pub fitness_goal: String,
    /// Expected number of days; metadata only
    pub days: u32,
    /// Expected meals per day; metadata only
    pub meals_per_day: u32,
    pub pasted_text: String,
    #[serde(default)]
    pub generate_images: bool,
}

impl Default for ManualMealPlanInput {
    fn default() -> Self {
        ManualMealPlanInput {
            plan_name: "Manual Meal Plan".to_string(),
            fitness_goal: "general".to_string(),
            days: 1,
            meals_per_day: 3,
            pasted_text: String::new(),
            generate_images: false,
        }
    }
}

impl ManualMealPlanInput {
    /// Input with default metadata around `pasted_text`
    pub fn from_text(pasted_text: &str) -> Self {
        ManualMealPlanInput {
            pasted_text: pasted_text.to_string(),
            ..Default::default()
        }
    }

    /// Check the plan metadata the way the API layer does before parsing.
    ///
    /// Parsing itself does not call this; it only fails when no meals are found.
    pub fn validate(&self) -> MealPlanResult<()> {
        if self.plan_name.trim().is_empty() {
            return Err(MealPlanError::invalid("planName", "must not be blank"));
        }
        if self.days < 1 {
            return Err(MealPlanError::invalid("days", "must be at least 1"));
        }
        if self.meals_per_day < 1 {
            return Err(MealPlanError::invalid("mealsPerDay", "must be at least 1"));
        }
        if self.pasted_text.trim().is_empty() {
            return Err(MealPlanError::invalid("pastedText", "must not be empty"));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMeal {
    /// 1-based, from the most recent `Day N` header
    pub day: u32,
    /// 1-based, restarts at every day
    pub meal_number: u32,
    pub meal_type: String,
    pub ingredients: Vec<ParsedIngredient>,
}

impl ParsedMeal {
    /// Key used to look up this meal's image, e.g. `day1-meal2`
    pub fn image_key(&self) -> String {
        image_key(self.day, self.meal_number)
    }
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub meals: Vec<ParsedMeal>,
    /// Non-fatal problems, one per skipped line
    pub parse_warnings: Vec<String>,
}

impl ParseResult {
    pub fn ingredient_count(&self) -> usize {
        self.meals.iter().map(|m| m.ingredients.len()).sum()
    }

    /// Whether every line was understood
    pub fn is_clean(&self) -> bool {
        self.parse_warnings.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    Manual,
}

/// A meal of a manual plan. Manual meals carry their ingredients directly and
/// never reference a recipe.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanMeal {
    pub day: u32,
    pub meal_number: u32,
    pub meal_type: String,
    pub manual: bool,
    pub manual_ingredients: Vec<ParsedIngredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// `manual-<unix millis>-<random suffix>`
    pub id: String,
    pub plan_name: String,
    pub fitness_goal: String,
    pub days: u32,
    pub meals_per_day: u32,
    pub source: PlanSource,
    pub generate_images: bool,
    pub created_at: DateTime<Utc>,
    pub meals: Vec<MealPlanMeal>,
}

/// Image map key for a meal, e.g. `day1-meal2`
pub fn image_key(day: u32, meal_number: u32) -> String {
    format!("day{day}-meal{meal_number}")
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn generate_plan_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("manual-{}-{}", now.timestamp_millis(), suffix)
}

/// Build a [`MealPlan`] from parsed meals.
///
/// `image_urls` is keyed by [`image_key`]; meals without an entry get no image.
///
/// ```
/// use std::collections::HashMap;
/// use meal_plan::{convert_to_meal_plan, parse_manual_meal_plan, ManualMealPlanInput};
///
/// let input = ManualMealPlanInput::from_text("Meal 1\n- 2 eggs\nMeal 2\n- 1 banana");
/// let parsed = parse_manual_meal_plan(&input).unwrap();
/// let images = HashMap::from([("day1-meal1".to_string(), "http://x/1.jpg".to_string())]);
///
/// let plan = convert_to_meal_plan(&input, &parsed.meals, Some(&images));
/// assert!(plan.id.starts_with("manual-"));
/// assert_eq!(plan.meals[0].image_url.as_deref(), Some("http://x/1.jpg"));
/// assert_eq!(plan.meals[1].image_url, None);
/// ```
#[tracing::instrument(skip_all, fields(plan = %input.plan_name, meals = meals.len()))]
pub fn convert_to_meal_plan(
    input: &ManualMealPlanInput,
    meals: &[ParsedMeal],
    image_urls: Option<&HashMap<String, String>>,
) -> MealPlan {
    let created_at = Utc::now();
    let meals: Vec<MealPlanMeal> = meals
        .iter()
        .map(|meal| MealPlanMeal {
            day: meal.day,
            meal_number: meal.meal_number,
            meal_type: meal.meal_type.clone(),
            manual: true,
            manual_ingredients: meal.ingredients.clone(),
            image_url: image_urls.and_then(|urls| urls.get(&meal.image_key()).cloned()),
        })
        .collect();

    let plan = MealPlan {
        id: generate_plan_id(created_at),
        plan_name: input.plan_name.clone(),
        fitness_goal: input.fitness_goal.clone(),
        days: input.days,
        meals_per_day: input.meals_per_day,
        source: PlanSource::Manual,
        generate_images: input.generate_images,
        created_at,
        meals,
    };
    debug!(
        "converted plan {} with {} image(s)",
        plan.id,
        plan.meals.iter().filter(|m| m.image_url.is_some()).count()
    );
    plan
}
