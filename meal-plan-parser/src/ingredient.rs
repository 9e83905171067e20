use std::fmt;

use serde::{Deserialize, Serialize};

use crate::unit::{SiQuantity, SiUnit};

/// One ingredient of a manually entered meal
///
/// * `name` - ingredient name with quantity, unit and connector words stripped
/// * `display_quantity` - the quantity as written, e.g. `175 g`, `2 slices` or `4`
/// * `si` - the quantity in grams or milliliters, present only for convertible units
///
/// # Examples
///
/// ```
/// use meal_plan::MealPlanParser;
///
/// let parser = MealPlanParser::new();
/// let rice = parser.parse_ingredient_line("-175g of Jasmine Rice").unwrap();
/// assert_eq!(rice.name, "Jasmine Rice");
/// assert_eq!(rice.display_quantity.as_deref(), Some("175 g"));
/// assert_eq!(rice.quantity_si(), Some(175.0));
///
/// let eggs = parser.parse_ingredient_line("-4 eggs").unwrap();
/// assert_eq!(eggs.display_quantity.as_deref(), Some("4"));
/// assert_eq!(eggs.quantity_si(), None);
/// ```
#[derive(Clone, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_quantity: Option<String>,
    /// Flattened into `quantitySI` / `unitSI`
    #[serde(flatten)]
    pub si: Option<SiQuantity>,
}

impl ParsedIngredient {
    pub fn new(name: &str, display_quantity: Option<&str>, si: Option<SiQuantity>) -> Self {
        ParsedIngredient {
            name: name.to_string(),
            display_quantity: display_quantity.map(str::to_string),
            si,
        }
    }

    /// An ingredient written without any quantity, e.g. `Salt to taste`
    pub fn unquantified(name: &str) -> Self {
        ParsedIngredient::new(name, None, None)
    }

    pub fn quantity_si(&self) -> Option<f64> {
        self.si.map(|q| q.value)
    }

    pub fn unit_si(&self) -> Option<SiUnit> {
        self.si.map(|q| q.unit)
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(display) = &self.display_quantity {
            write!(f, "{display} ")?;
        }
        write!(f, "{}", self.name)?;
        match self.si {
            Some(si) if self.display_quantity.as_deref() != Some(si.to_string().as_str()) => {
                write!(f, " ({si})")
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_display() {
        let oil = ParsedIngredient::new(
            "olive oil",
            Some("1 tbsp"),
            Some(SiQuantity::milliliters(15.0)),
        );
        assert_eq!(oil.to_string(), "1 tbsp olive oil (15 ml)");

        let rice = ParsedIngredient::new("rice", Some("175 g"), Some(SiQuantity::grams(175.0)));
        assert_eq!(rice.to_string(), "175 g rice");

        let bread = ParsedIngredient::new("whole wheat bread", Some("2 slices"), None);
        assert_eq!(bread.to_string(), "2 slices whole wheat bread");

        assert_eq!(
            ParsedIngredient::unquantified("Salt to taste").to_string(),
            "Salt to taste"
        );
    }

    #[test]
    fn test_si_accessors_move_together() {
        let milk = ParsedIngredient::new(
            "milk",
            Some("200 ml"),
            Some(SiQuantity::milliliters(200.0)),
        );
        assert_eq!(milk.quantity_si(), Some(200.0));
        assert_eq!(milk.unit_si(), Some(SiUnit::Milliliter));

        let banana = ParsedIngredient::new("banana", Some("1"), None);
        assert_eq!(banana.quantity_si(), None);
        assert_eq!(banana.unit_si(), None);
    }

    #[test]
    fn test_ingredient_json_shape() {
        let rice = ParsedIngredient::new(
            "Jasmine Rice",
            Some("175 g"),
            Some(SiQuantity::grams(175.0)),
        );
        let json = serde_json::to_value(&rice).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jasmine Rice",
                "displayQuantity": "175 g",
                "quantitySI": 175.0,
                "unitSI": "g"
            })
        );

        let salt = serde_json::to_value(ParsedIngredient::unquantified("Salt")).unwrap();
        assert_eq!(salt, serde_json::json!({ "name": "Salt" }));
    }

    #[test]
    fn test_ingredient_json_roundtrip() {
        let parsed: ParsedIngredient = serde_json::from_str(
            r#"{"name":"olive oil","displayQuantity":"1 tbsp","quantitySI":15.0,"unitSI":"ml"}"#,
        )
        .unwrap();
        assert_eq!(parsed.quantity_si(), Some(15.0));
        assert_eq!(parsed.unit_si(), Some(SiUnit::Milliliter));

        let parsed: ParsedIngredient = serde_json::from_str(r#"{"name":"banana"}"#).unwrap();
        assert_eq!(parsed, ParsedIngredient::unquantified("banana"));
    }
}
