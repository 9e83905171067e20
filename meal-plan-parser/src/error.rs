use std::fmt;

/// Error types for meal plan parsing operations
#[derive(Debug, Clone, PartialEq)]
pub enum MealPlanError {
    /// The pasted text did not contain a single `Meal N` header
    NoValidMeals,
    /// Caller-supplied plan metadata failed validation
    InvalidInput { field: String, reason: String },
    /// A single ingredient line could not be parsed
    IngredientParse { input: String, reason: String },
}

impl fmt::Display for MealPlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealPlanError::NoValidMeals => write!(
                f,
                "No valid meals found. Start each meal with a header such as \
                 \"Meal 1\" or \"Meal 1: Breakfast\""
            ),
            MealPlanError::InvalidInput { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            MealPlanError::IngredientParse { input, reason } => {
                write!(f, "could not parse ingredient \"{}\": {}", input, reason)
            }
        }
    }
}

impl std::error::Error for MealPlanError {}

/// Result type for meal plan parsing operations
pub type MealPlanResult<T> = Result<T, MealPlanError>;

impl MealPlanError {
    pub(crate) fn ingredient(input: &str, reason: impl Into<String>) -> Self {
        MealPlanError::IngredientParse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MealPlanError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_plan_error_display() {
        assert!(MealPlanError::NoValidMeals
            .to_string()
            .contains("No valid meals found"));

        let err = MealPlanError::InvalidInput {
            field: "days".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for 'days': must be at least 1");

        let err = MealPlanError::ingredient("2xyz chicken", "unrecognized unit \"xyz\"");
        assert_eq!(
            err.to_string(),
            "could not parse ingredient \"2xyz chicken\": unrecognized unit \"xyz\""
        );
    }

    #[test]
    fn test_meal_plan_error_clone_and_partial_eq() {
        let err1 = MealPlanError::invalid("planName", "must not be blank");
        let err2 = err1.clone();
        assert_eq!(err1, err2);
        assert_ne!(err1, MealPlanError::NoValidMeals);
    }

    #[test]
    fn test_meal_plan_result_type() {
        let result: MealPlanResult<i32> = Err(MealPlanError::NoValidMeals);
        assert!(result.is_err());
    }
}
