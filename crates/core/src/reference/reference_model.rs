//! Reference projection result models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One calendar week of the projected reference series.
///
/// `is_estimate` is set only when no day of the week had reference data,
/// i.e. the value is a zero-filled placeholder rather than an allocation
/// of a recorded prior-period total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyEstimate {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub value: Decimal,
    pub is_estimate: bool,
}
