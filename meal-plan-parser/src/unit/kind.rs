use std::fmt;

use serde::{Deserialize, Serialize};

/// Base unit every convertible quantity is normalized to
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Debug, Hash, Serialize, Deserialize)]
pub enum SiUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "ml")]
    Milliliter,
}

impl SiUnit {
    pub fn to_str(&self) -> &'static str {
        match self {
            SiUnit::Gram => "g",
            SiUnit::Milliliter => "ml",
        }
    }
}

impl fmt::Display for SiUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MeasureKind {
    Weight,
    Volume,
}

impl MeasureKind {
    pub fn unit(&self) -> SiUnit {
        match self {
            MeasureKind::Weight => SiUnit::Gram,
            MeasureKind::Volume => SiUnit::Milliliter,
        }
    }
    pub fn to_str(&self) -> &'static str {
        match self {
            MeasureKind::Weight => "weight",
            MeasureKind::Volume => "volume",
        }
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
