//! Month-to-date pace, burn rate, runway, and confidence derivations.

mod pace_calculator;
mod pace_model;

pub use pace_calculator::*;
pub use pace_model::*;
