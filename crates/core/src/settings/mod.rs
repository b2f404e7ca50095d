//! Engine settings and their resolution.
//!
//! Figures like the monthly NUT or the store close hour come from a chain
//! of sources (stepped history, saved settings, built-in constant). Each
//! concept gets exactly one resolver with a documented precedence order.

mod settings_model;
mod settings_resolver;

pub use settings_model::*;
pub use settings_resolver::*;

#[cfg(test)]
mod settings_resolver_tests;
