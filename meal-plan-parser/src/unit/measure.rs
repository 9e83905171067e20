use std::fmt;

use serde::{Deserialize, Serialize};

use super::SiUnit;
use crate::util::num_without_zeroes;

/// A quantity normalized to grams or milliliters.
///
/// Serialized flat as `quantitySI` / `unitSI` so the two fields always travel together.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Serialize, Deserialize)]
pub struct SiQuantity {
    #[serde(rename = "quantitySI")]
    pub value: f64,
    #[serde(rename = "unitSI")]
    pub unit: SiUnit,
}

impl SiQuantity {
    pub fn new(value: f64, unit: SiUnit) -> Self {
        SiQuantity { value, unit }
    }
    pub fn grams(value: f64) -> Self {
        SiQuantity::new(value, SiUnit::Gram)
    }
    pub fn milliliters(value: f64) -> Self {
        SiQuantity::new(value, SiUnit::Milliliter)
    }
}

impl fmt::Display for SiQuantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", num_without_zeroes(self.value), self.unit)
    }
}
