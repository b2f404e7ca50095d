//! Engine settings domain model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-organization figures the surrounding application persists.
///
/// Every field is optional; the resolvers in this module supply the
/// documented fallbacks. Percentage targets are fractions (`0.30`, not 30).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    pub year_start_cash_amount: Option<Decimal>,
    pub year_start_cash_date: Option<NaiveDate>,
    pub monthly_nut: Option<Decimal>,
    pub target_cogs_pct: Option<Decimal>,
    pub target_fees_pct: Option<Decimal>,
    pub reserve_contribution: Option<Decimal>,
    pub owner_draw_goal: Option<Decimal>,
    pub store_close_hour: Option<u32>,
}
