//! Tillflow Core - Continuity and forecasting engine.
//!
//! This crate contains the numeric heart of the Tillflow bookkeeping
//! dashboard: hours-weighted target distribution, spread-expense
//! normalization, reference projection, anchor inference, the daily
//! cash-continuity series, and the pace/burn/runway derivations.
//!
//! The engine is pure and synchronous. Every function is a deterministic
//! transformation of its explicit inputs: the surrounding application
//! fetches and validates records, invokes the engine, and serializes the
//! flat result structures it returns. Nothing here performs I/O, reads a
//! clock, or mutates shared state; time-dependent computations take an
//! explicit as-of date.

pub mod anchor;
pub mod constants;
pub mod continuity;
pub mod distribution;
pub mod errors;
pub mod ledger;
pub mod pace;
pub mod reference;
pub mod settings;
pub mod spread;
pub mod utils;

// Re-export common types from the feature modules
pub use anchor::*;
pub use continuity::*;
pub use distribution::*;
pub use ledger::*;
pub use pace::*;
pub use reference::*;
pub use settings::*;
pub use spread::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
