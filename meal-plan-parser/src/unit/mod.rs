pub(crate) mod unit;
pub use unit::*;

pub mod kind;
pub use kind::*;

pub(crate) mod conversion;

pub(crate) mod measure;
pub use measure::*;
