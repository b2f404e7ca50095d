//! Core error types for the Tillflow engine.
//!
//! Expected degenerate inputs (zero total hours, missing reference months,
//! absent snapshots, zero denominators) never surface here; those return the
//! sentinel values documented on each operation. `Error` is reserved for
//! calls that are malformed outright, such as a reversed computation window.

use chrono::NaiveDate;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the continuity engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid computation window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("Input validation failed: {0}")]
    Validation(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
