use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Units with a known mass or volume conversion.
///
/// Anything outside this list is either a count unit ("slices", "scoops") or
/// part of the ingredient name, and never converts.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Debug, Hash)]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Teaspoon,
    Tablespoon,
    Cup,
    FluidOunce,
    Ounce,
    Pound,
}

impl Unit {
    pub fn to_str(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Teaspoon => "tsp",
            Unit::Tablespoon => "tbsp",
            Unit::Cup => "cup",
            Unit::FluidOunce => "fl oz",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
        }
    }
}

static UNIT_MAPPINGS: &[(&str, Unit)] = &[
    ("g", Unit::Gram),
    ("gram", Unit::Gram),
    ("kg", Unit::Kilogram),
    ("kilo", Unit::Kilogram),
    ("kilogram", Unit::Kilogram),
    ("ml", Unit::Milliliter),
    ("milliliter", Unit::Milliliter),
    ("millilitre", Unit::Milliliter),
    ("l", Unit::Liter),
    ("liter", Unit::Liter),
    ("litre", Unit::Liter),
    ("tsp", Unit::Teaspoon),
    ("teaspoon", Unit::Teaspoon),
    ("tbsp", Unit::Tablespoon),
    ("tbs", Unit::Tablespoon),
    ("tbl", Unit::Tablespoon),
    ("tablespoon", Unit::Tablespoon),
    ("cup", Unit::Cup),
    ("fl oz", Unit::FluidOunce),
    ("fluid oz", Unit::FluidOunce),
    ("fluid ounce", Unit::FluidOunce),
    ("oz", Unit::Ounce),
    ("ounce", Unit::Ounce),
    ("lb", Unit::Pound),
    ("pound", Unit::Pound),
];

/// O(1) lookup from string to Unit
static UNIT_MAP: LazyLock<HashMap<&'static str, Unit>> =
    LazyLock::new(|| UNIT_MAPPINGS.iter().map(|&(s, u)| (s, u)).collect());

impl FromStr for Unit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "fl. oz." and "fl oz" are the same unit
        let lowered = s
            .split_whitespace()
            .map(|w| w.trim_end_matches('.'))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        // exact match first so "tbs" isn't singularized into "tb"
        if let Some(unit) = UNIT_MAP.get(lowered.as_str()) {
            return Ok(*unit);
        }
        UNIT_MAP.get(&*singular(&lowered)).copied().ok_or(())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Whether `s` names a convertible unit in any accepted spelling
pub fn is_valid(s: &str) -> bool {
    Unit::from_str(s).is_ok()
}

pub(crate) fn singular(s: &str) -> Cow<'_, str> {
    // Fast path: if already lowercase ASCII with no trailing 's', borrow directly
    if s.bytes().all(|b| !b.is_ascii_uppercase()) {
        match s.strip_suffix('s') {
            Some(stripped) => Cow::Borrowed(stripped),
            None => Cow::Borrowed(s),
        }
    } else {
        let lowered = s.to_lowercase();
        match lowered.strip_suffix('s') {
            Some(stripped) => Cow::Owned(stripped.to_string()),
            None => Cow::Owned(lowered),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("g", Unit::Gram)]
    #[case("grams", Unit::Gram)]
    #[case("KG", Unit::Kilogram)]
    #[case("kilograms", Unit::Kilogram)]
    #[case("mL", Unit::Milliliter)]
    #[case("millilitres", Unit::Milliliter)]
    #[case("L", Unit::Liter)]
    #[case("liters", Unit::Liter)]
    #[case("tsp", Unit::Teaspoon)]
    #[case("teaspoons", Unit::Teaspoon)]
    #[case("Tbsp.", Unit::Tablespoon)]
    #[case("tbs", Unit::Tablespoon)]
    #[case("tablespoons", Unit::Tablespoon)]
    #[case("cups", Unit::Cup)]
    #[case("fl oz", Unit::FluidOunce)]
    #[case("fl  oz", Unit::FluidOunce)]
    #[case("fl. oz.", Unit::FluidOunce)]
    #[case("fl. oz", Unit::FluidOunce)]
    #[case("fluid ounces", Unit::FluidOunce)]
    #[case("oz", Unit::Ounce)]
    #[case("ounces", Unit::Ounce)]
    #[case("lbs", Unit::Pound)]
    #[case("pounds", Unit::Pound)]
    fn test_unit_from_str(#[case] input: &str, #[case] expected: Unit) {
        assert_eq!(Unit::from_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("slices")]
    #[case("eggs")]
    #[case("banana")]
    #[case("s")]
    #[case("")]
    fn test_unknown_units(#[case] input: &str) {
        assert!(Unit::from_str(input).is_err());
        assert!(!is_valid(input));
    }

    #[test]
    fn test_unit_to_str() {
        assert_eq!(Unit::FluidOunce.to_string(), "fl oz");
        assert_eq!(Unit::from_str("pound").unwrap().to_str(), "lb");
    }

    #[test]
    fn test_singular() {
        assert_eq!(singular("cups"), "cup");
        assert_eq!(singular("Cups"), "cup");
        assert_eq!(singular("oz"), "oz");
    }
}
