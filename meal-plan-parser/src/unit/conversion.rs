//! SI normalization factors for every convertible [`Unit`].

use super::{kind::MeasureKind, measure::SiQuantity, Unit};

const G_PER_KG: f64 = 1000.0;
const ML_PER_L: f64 = 1000.0;
const ML_PER_TSP: f64 = 5.0;
const ML_PER_TBSP: f64 = 15.0;
const ML_PER_CUP: f64 = 240.0;
const ML_PER_FL_OZ: f64 = 29.5735;
const G_PER_OZ: f64 = 28.3495;
const G_PER_LB: f64 = 453.592;

/// How a unit normalizes: its measure kind and the multiplier to that kind's base unit
fn rule(unit: Unit) -> (MeasureKind, f64) {
    match unit {
        // Weight: normalize to grams
        Unit::Gram => (MeasureKind::Weight, 1.0),
        Unit::Kilogram => (MeasureKind::Weight, G_PER_KG),
        Unit::Ounce => (MeasureKind::Weight, G_PER_OZ),
        Unit::Pound => (MeasureKind::Weight, G_PER_LB),
        // Volume: normalize to milliliters
        Unit::Milliliter => (MeasureKind::Volume, 1.0),
        Unit::Liter => (MeasureKind::Volume, ML_PER_L),
        Unit::Teaspoon => (MeasureKind::Volume, ML_PER_TSP),
        Unit::Tablespoon => (MeasureKind::Volume, ML_PER_TBSP),
        Unit::Cup => (MeasureKind::Volume, ML_PER_CUP),
        Unit::FluidOunce => (MeasureKind::Volume, ML_PER_FL_OZ),
    }
}

impl Unit {
    /// Whether this unit measures mass or volume
    pub fn kind(&self) -> MeasureKind {
        rule(*self).0
    }

    /// Multiplier from this unit to its SI base unit
    pub fn si_factor(&self) -> f64 {
        rule(*self).1
    }

    /// Convert `value` of this unit into grams or milliliters.
    ///
    /// No rounding is applied beyond the floating point multiplication.
    pub fn to_si(&self, value: f64) -> SiQuantity {
        let (kind, factor) = rule(*self);
        SiQuantity::new(value * factor, kind.unit())
    }
}
