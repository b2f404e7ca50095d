//! Projection of prior-period monthly totals onto a current date window.

mod reference_model;
mod reference_projector;

pub use reference_model::*;
pub use reference_projector::*;
