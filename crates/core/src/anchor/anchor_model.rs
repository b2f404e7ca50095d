//! Anchor resolution result models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the starting balance was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorMethod {
    /// An explicit year-start anchor covered the window.
    Explicit,
    /// Rolled forward from a snapshot on or before the window start.
    SnapshotRolledForward,
    /// Rolled backward from a snapshot after the window start.
    SnapshotRolledBackward,
    /// No usable data; the amount is zero and the series is unanchored.
    None,
}

/// The best available starting cash balance for a requested window.
///
/// `method == None` is a deliberate "no data" signal, not an error;
/// consumers must render it distinguishably.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnchorResolution {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub method: AnchorMethod,
}
