//! Input records the engine computes over.
//!
//! Everything here arrives already validated from the surrounding
//! application's storage layer and is treated as an immutable value input
//! for the duration of one computation.

mod ledger_model;

pub use ledger_model::*;
