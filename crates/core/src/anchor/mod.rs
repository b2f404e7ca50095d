//! Starting-balance inference for a continuity window.

mod anchor_inference;
mod anchor_model;

pub use anchor_inference::*;
pub use anchor_model::*;

#[cfg(test)]
mod anchor_inference_tests;
