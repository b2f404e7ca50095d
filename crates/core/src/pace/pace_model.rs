//! Pace and burn result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Month-to-date pacing against the hours-weighted target.
/// A positive `pace_delta` means ahead of pace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaceSummary {
    pub mtd_actual: Decimal,
    pub mtd_target: Decimal,
    pub pace_delta: Decimal,
}

/// Burn and runway figures derived from the merged balance series.
///
/// `None` fields mean "unbounded": a non-negative trailing window yields
/// no burn and therefore no runway, and a threshold the velocity moves
/// away from is never reached. They serialize as `null`, which is the
/// sentinel callers check for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurnSummary {
    pub daily_burn: Option<Decimal>,
    pub runway_days: Option<Decimal>,
    pub eta_to_floor_days: Option<Decimal>,
    pub eta_to_target_days: Option<Decimal>,
    pub wow_change: Option<Decimal>,
}

/// Bucketed confidence in the figures shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

/// Confidence score in `[0, 100]` plus its level bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceReport {
    pub score: u32,
    pub level: ConfidenceLevel,
}
