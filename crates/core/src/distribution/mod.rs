//! Hours-weighted distribution of monthly targets across calendar days.

mod distribution_calculator;
mod distribution_model;

pub use distribution_calculator::*;
pub use distribution_model::*;
