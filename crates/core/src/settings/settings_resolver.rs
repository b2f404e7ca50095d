//! One resolution function per settings-backed concept.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::settings_model::EngineSettings;
use crate::constants::DEFAULT_STORE_CLOSE_HOUR;
use crate::ledger::{NutSnapshot, YearStartAnchor};

/// Monthly fixed overhead (NUT) in force on `as_of`.
///
/// Precedence: latest `NutSnapshot` with `effective_date <= as_of`,
/// else the settings default, else zero.
pub fn resolve_nut(
    nut_snapshots: &[NutSnapshot],
    settings: &EngineSettings,
    as_of: NaiveDate,
) -> Decimal {
    nut_snapshots
        .iter()
        .filter(|s| s.effective_date <= as_of)
        .max_by_key(|s| s.effective_date)
        .map(|s| s.amount)
        .or(settings.monthly_nut)
        .unwrap_or(Decimal::ZERO)
}

/// Store close hour. Precedence: settings value, else the built-in default.
pub fn resolve_store_close_hour(settings: &EngineSettings) -> u32 {
    settings.store_close_hour.unwrap_or(DEFAULT_STORE_CLOSE_HOUR)
}

/// Explicit year-start anchor, present only when the settings carry both
/// an amount and a date.
pub fn resolve_year_start_anchor(settings: &EngineSettings) -> Option<YearStartAnchor> {
    match (settings.year_start_cash_amount, settings.year_start_cash_date) {
        (Some(amount), Some(date)) => Some(YearStartAnchor { date, amount }),
        _ => None,
    }
}

/// Target COGS and fee rates as fractions, zero when unset.
pub fn resolve_target_rates(settings: &EngineSettings) -> (Decimal, Decimal) {
    (
        settings.target_cogs_pct.unwrap_or(Decimal::ZERO),
        settings.target_fees_pct.unwrap_or(Decimal::ZERO),
    )
}
