//! # Meal Plan Parser
//!
//! Turns pasted, free-text meal plans into structured per-day, per-meal
//! ingredient lists, normalizing quantities to grams or milliliters. Built on
//! [nom](https://github.com/Geal/nom) parser combinators.
//!
//! ## Input format
//!
//! ```text
//! Day 1
//! Meal 1: Breakfast
//! -175g of Jasmine Rice
//! * 2 slices of whole wheat bread
//! • 1 tbsp olive oil
//! Meal 2 - Lunch
//! - Salt to taste
//! ```
//!
//! - `Day N` starts a new day and restarts meal numbering
//! - `Meal N`, optionally followed by `:` or `-` and a label, starts a meal
//! - `-`, `*` and `•` bullets introduce ingredients
//!
//! ## Quick Start
//!
//! ```
//! use meal_plan::{parse_manual_meal_plan, ManualMealPlanInput, SiUnit};
//!
//! let input = ManualMealPlanInput::from_text("Meal 1: Breakfast\n-4 eggs\n-1 tbsp olive oil");
//! let result = parse_manual_meal_plan(&input).unwrap();
//!
//! let breakfast = &result.meals[0];
//! assert_eq!(breakfast.meal_type, "breakfast");
//! assert_eq!(breakfast.ingredients[0].display_quantity.as_deref(), Some("4"));
//! assert_eq!(breakfast.ingredients[0].quantity_si(), None);
//! assert_eq!(breakfast.ingredients[1].quantity_si(), Some(15.0));
//! assert_eq!(breakfast.ingredients[1].unit_si(), Some(SiUnit::Milliliter));
//! ```
//!
//! ## Error Handling
//!
//! Lines that cannot be understood inside a meal are skipped and reported in
//! [`ParseResult::parse_warnings`]. Text without a single `Meal N` header fails
//! with [`MealPlanError::NoValidMeals`]:
//!
//! ```
//! use meal_plan::{parse_manual_meal_plan, ManualMealPlanInput, MealPlanError};
//!
//! let input = ManualMealPlanInput::from_text("- 2 eggs");
//! assert_eq!(parse_manual_meal_plan(&input), Err(MealPlanError::NoValidMeals));
//! ```

pub use crate::error::{MealPlanError, MealPlanResult};
pub use crate::ingredient::ParsedIngredient;
pub use crate::meal_plan::{
    convert_to_meal_plan, image_key, ManualMealPlanInput, MealPlan, MealPlanMeal, ParseResult,
    ParsedMeal, PlanSource,
};
pub use crate::plan::{parse_manual_meal_plan, MealPlanParser, UNSPECIFIED_MEAL_TYPE};
pub use crate::unit::{SiQuantity, SiUnit};

pub mod error;
pub mod ingredient;
pub mod meal_plan;
pub mod parser;
pub mod plan;
pub mod unit;
pub mod util;
