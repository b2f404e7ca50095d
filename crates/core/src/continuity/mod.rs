//! The daily cash-continuity series: estimated, actual, and merged
//! balance trajectories over an arbitrary date window.

mod continuity_builder;
mod continuity_model;

pub use continuity_builder::*;
pub use continuity_model::*;
