//! Continuity series domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::anchor::AnchorResolution;

/// One day of a balance series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// Week-over-week balance movement derived from the merged series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyDelta {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub delta: Decimal,
}

/// Data-availability figures for the window, consumed by the confidence
/// rubric and the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContinuityStats {
    pub days_in_window: u32,
    pub days_with_actuals: u32,
    pub first_actual_date: Option<NaiveDate>,
    pub last_actual_date: Option<NaiveDate>,
}

/// The full continuity result for one window.
///
/// `est_balance_series` and `merged_balance_series` carry one point per
/// day of the window; `actual_balance_series` carries points only for
/// days with a logged sales entry. The merged series equals the actual
/// series exactly wherever the latter is defined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContinuityResult {
    pub est_balance_series: Vec<BalancePoint>,
    pub actual_balance_series: Vec<BalancePoint>,
    pub merged_balance_series: Vec<BalancePoint>,
    pub weekly_deltas: Vec<WeeklyDelta>,
    pub anchor: AnchorResolution,
    pub stats: ContinuityStats,
}
