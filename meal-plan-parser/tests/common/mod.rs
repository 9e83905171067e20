//! Shared test macros for meal-plan tests

#![allow(clippy::unwrap_used, dead_code)]

use meal_plan::{parse_manual_meal_plan, ManualMealPlanInput, ParseResult};

/// Parse `text` with default plan metadata, panicking on failure
pub fn parse_text(text: &str) -> ParseResult {
    parse_manual_meal_plan(&ManualMealPlanInput::from_text(text)).unwrap()
}

/// Unified macro for single-ingredient tests
///
/// # Variants
///
/// ## Converted to SI
/// ```ignore
/// test_ingredient!(oil, "-1 tbsp olive oil", "olive oil", "1 tbsp", 15.0, SiUnit::Milliliter);
/// ```
///
/// ## Count quantity, never converted
/// ```ignore
/// test_ingredient!(count: test_name, "-4 eggs", "eggs", "4");
/// ```
///
/// ## Two inputs parse to equal results
/// ```ignore
/// test_ingredient!(eq: test_name, "-175g rice", "*  175 g   rice");
/// ```
#[macro_export]
macro_rules! test_ingredient {
    ($test_name:ident, $input:expr, $name:expr, $display:expr, $si:expr, $unit:expr) => {
        #[test]
        fn $test_name() {
            let parsed = meal_plan::MealPlanParser::new()
                .parse_ingredient_line($input)
                .unwrap();
            assert_eq!(parsed.name, $name);
            assert_eq!(parsed.display_quantity.as_deref(), Some($display));
            let si = parsed.quantity_si().unwrap();
            assert!(
                (si - $si).abs() < 0.05,
                "{} converted to {si}, expected {}",
                $input,
                $si
            );
            assert_eq!(parsed.unit_si(), Some($unit));
        }
    };

    (count: $test_name:ident, $input:expr, $name:expr, $display:expr) => {
        #[test]
        fn $test_name() {
            let parsed = meal_plan::MealPlanParser::new()
                .parse_ingredient_line($input)
                .unwrap();
            assert_eq!(parsed.name, $name);
            assert_eq!(parsed.display_quantity.as_deref(), Some($display));
            assert_eq!(parsed.quantity_si(), None);
            assert_eq!(parsed.unit_si(), None);
        }
    };

    (eq: $test_name:ident, $left:expr, $right:expr) => {
        #[test]
        fn $test_name() {
            let parser = meal_plan::MealPlanParser::new();
            assert_eq!(
                parser.parse_ingredient_line($left).unwrap(),
                parser.parse_ingredient_line($right).unwrap(),
            );
        }
    };
}
