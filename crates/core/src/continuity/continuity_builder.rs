//! Builds the three aligned daily balance series over a date window.
//!
//! - Estimated: anchor plus the cumulative hours-weighted reference net
//!   flow — the "what if nothing were logged" trajectory.
//! - Actual: anchor plus the cumulative real flows; a point exists only
//!   for days whose sales figure was actually entered. Real dated flows
//!   (expenses, capital movements) accumulate on every day regardless.
//! - Merged: the actual value wherever one exists, otherwise the estimate
//!   re-based by the last known actual-vs-estimate offset, so the series
//!   is gapless and continuous at every handoff.

use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use super::continuity_model::{BalancePoint, ContinuityResult, ContinuityStats, WeeklyDelta};
use crate::anchor::infer_anchor;
use crate::constants::DECIMAL_PRECISION;
use crate::distribution::OpenHoursTemplate;
use crate::errors::{Error, Result};
use crate::ledger::{
    CashInjection, CashSnapshot, DayEntry, ExpenseTransaction, NutSnapshot, ReferenceMonth,
};
use crate::reference::daily_reference_values;
use crate::settings::{
    resolve_nut, resolve_target_rates, resolve_year_start_anchor, EngineSettings,
};
use crate::utils::{days_between, days_in_month, week_end};

/// Everything one continuity computation reads. All records belong to a
/// single organization; the caller guarantees isolation.
#[derive(Debug, Clone, Copy)]
pub struct ContinuityInputs<'a> {
    pub day_entries: &'a [DayEntry],
    pub expenses: &'a [ExpenseTransaction],
    pub reference_months: &'a [ReferenceMonth],
    pub snapshots: &'a [CashSnapshot],
    pub injections: &'a [CashInjection],
    pub nut_snapshots: &'a [NutSnapshot],
    pub settings: &'a EngineSettings,
    pub hours_template: &'a OpenHoursTemplate,
}

/// Produces the estimated, actual, and merged daily series plus the
/// weekly delta series over `[window_start, window_end]`.
pub fn build_continuity(
    inputs: &ContinuityInputs,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Result<ContinuityResult> {
    if window_start > window_end {
        return Err(Error::InvalidWindow {
            start: window_start,
            end: window_end,
        });
    }

    let anchor = infer_anchor(
        resolve_year_start_anchor(inputs.settings).as_ref(),
        inputs.snapshots,
        inputs.day_entries,
        inputs.expenses,
        inputs.injections,
        window_start,
    );
    debug!(
        "Building continuity {}..{} from anchor {} ({:?})",
        window_start, window_end, anchor.amount, anchor.method
    );

    let days = days_between(window_start, window_end);
    let (cogs_rate, fees_rate) = resolve_target_rates(inputs.settings);
    let reference_daily = daily_reference_values(
        inputs.reference_months,
        inputs.hours_template,
        window_start,
        window_end,
    );

    // Index the ledgers by date once.
    let sales_by_date: HashMap<NaiveDate, Decimal> = inputs
        .day_entries
        .iter()
        .filter_map(|e| e.net_sales_ex_tax.map(|v| (e.date, v)))
        .collect();
    let mut expenses_by_date: HashMap<NaiveDate, Decimal> = HashMap::new();
    for e in inputs.expenses {
        *expenses_by_date.entry(e.date).or_insert(Decimal::ZERO) += e.amount;
    }
    let mut capital_by_date: HashMap<NaiveDate, Decimal> = HashMap::new();
    for i in inputs.injections {
        *capital_by_date.entry(i.date).or_insert(Decimal::ZERO) += i.signed_amount();
    }

    // --- 1. Estimated trajectory ---
    let mut est_series = Vec::with_capacity(days.len());
    let mut est_raw: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut running_est = anchor.amount;
    for day in &days {
        let ref_sales = reference_daily.get(day).copied().unwrap_or(Decimal::ZERO);
        let burden = ref_sales * (cogs_rate + fees_rate);
        let nut = resolve_nut(inputs.nut_snapshots, inputs.settings, *day);
        let month_days = days_in_month(day.year(), day.month());
        let daily_nut = if month_days == 0 {
            Decimal::ZERO
        } else {
            nut / Decimal::from(month_days)
        };

        running_est += ref_sales - burden - daily_nut;
        est_raw.insert(*day, running_est);
        est_series.push(BalancePoint {
            date: *day,
            balance: running_est.round_dp(DECIMAL_PRECISION),
        });
    }

    // --- 2. Actual trajectory ---
    let mut actual_series = Vec::new();
    let mut actual_raw: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut running_actual = anchor.amount;
    for day in &days {
        let sales = sales_by_date.get(day).copied();
        let spent = expenses_by_date.get(day).copied().unwrap_or(Decimal::ZERO);
        let capital = capital_by_date.get(day).copied().unwrap_or(Decimal::ZERO);

        running_actual += sales.unwrap_or(Decimal::ZERO) - spent + capital;

        if sales.is_some() {
            actual_raw.insert(*day, running_actual);
            actual_series.push(BalancePoint {
                date: *day,
                balance: running_actual.round_dp(DECIMAL_PRECISION),
            });
        }
    }

    // --- 3. Merged trajectory ---
    // Actual wins where present; estimated segments are shifted by the
    // last observed actual-vs-estimate offset so there is no jump at the
    // handoff, and re-anchored whenever actual data resumes.
    let mut merged_series = Vec::with_capacity(days.len());
    let mut offset = Decimal::ZERO;
    for day in &days {
        let raw_est = est_raw[day];
        let balance = match actual_raw.get(day) {
            Some(actual) => {
                offset = actual - raw_est;
                *actual
            }
            None => raw_est + offset,
        };
        merged_series.push(BalancePoint {
            date: *day,
            balance: balance.round_dp(DECIMAL_PRECISION),
        });
    }

    let deltas = weekly_deltas(&merged_series);

    let stats = ContinuityStats {
        days_in_window: days.len() as u32,
        days_with_actuals: actual_series.len() as u32,
        first_actual_date: actual_series.first().map(|p| p.date),
        last_actual_date: actual_series.last().map(|p| p.date),
    };

    Ok(ContinuityResult {
        est_balance_series: est_series,
        actual_balance_series: actual_series,
        merged_balance_series: merged_series,
        weekly_deltas: deltas,
        anchor,
        stats,
    })
}

/// Per-week balance movement of a daily series: the balance at each
/// (clipped) Monday-week end minus the balance at the previous week end,
/// with the first week measured against the series' opening balance.
/// Summed across the window the deltas telescope exactly to
/// `series[end] - series[start]`.
pub fn weekly_deltas(series: &[BalancePoint]) -> Vec<WeeklyDelta> {
    let first = match series.first() {
        Some(p) => p,
        None => return Vec::new(),
    };
    let last_date = series[series.len() - 1].date;
    let by_date: BTreeMap<NaiveDate, Decimal> =
        series.iter().map(|p| (p.date, p.balance)).collect();

    let mut deltas = Vec::new();
    let mut previous = first.balance;
    let mut cursor = first.date;
    while cursor <= last_date {
        let week_last = week_end(cursor).min(last_date);
        // A daily series has a point at every date in its range.
        if let Some(balance) = by_date.get(&week_last).copied() {
            deltas.push(WeeklyDelta {
                week_start: cursor,
                week_end: week_last,
                delta: balance - previous,
            });
            previous = balance;
        }
        cursor = match week_last.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    deltas
}
