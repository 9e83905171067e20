//! Parser modules for meal plan text
//!
//! Line classification is kept apart from interpretation: [`classify_line`]
//! only says what a line looks like, and the plan builder decides what it
//! means in context.

pub(crate) mod helpers;
pub(crate) mod ingredient_line;
pub mod line;
pub(crate) mod quantity;

pub(crate) use ingredient_line::IngredientLineParser;
pub use line::{classify_line, Line};
