//! Normalization of multi-month spread expenses into monthly-equivalent
//! figures.

mod spread_calculator;

pub use spread_calculator::*;
