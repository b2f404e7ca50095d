//! Derives pace, burn, runway, threshold ETAs, and confidence from the
//! continuity output and current totals.

use chrono::NaiveDate;
use log::debug;
use num_traits::Zero;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::pace_model::{BurnSummary, ConfidenceLevel, ConfidenceReport, PaceSummary};
use crate::constants::{
    CONFIDENCE_HIGH_THRESHOLD, CONFIDENCE_MEDIUM_THRESHOLD, CONFIDENCE_WEIGHT_COVERAGE,
    CONFIDENCE_WEIGHT_HAS_SALES, CONFIDENCE_WEIGHT_RECENT_EXPENSES, RECENT_EXPENSE_HORIZON_DAYS,
};
use crate::continuity::{weekly_deltas, BalancePoint, WeeklyDelta};
use crate::distribution::{mtd_target, OpenHoursTemplate};
use crate::ledger::{DayEntry, ExpenseTransaction};
use crate::utils::days_between;

const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// The net-sales figure required to cover fixed overhead plus reserve and
/// owner-draw targets, grossed up for the expected COGS and fee rates:
/// `(nut + reserve + owner_draw) / (1 - cogs_pct - fees_pct)`.
///
/// `None` when the gross-up denominator is zero or negative — the goal is
/// unattainable at those rates, never a silent division.
pub fn survival_goal(
    nut: Decimal,
    reserve_contribution: Decimal,
    owner_draw_goal: Decimal,
    cogs_pct: Decimal,
    fees_pct: Decimal,
) -> Option<Decimal> {
    let denominator = Decimal::ONE - cogs_pct - fees_pct;
    if denominator <= Decimal::ZERO {
        debug!(
            "Survival goal unattainable: cogs {} + fees {} leave no margin",
            cogs_pct, fees_pct
        );
        return None;
    }
    Some((nut + reserve_contribution + owner_draw_goal) / denominator)
}

/// Month-to-date actual sales against the hours-weighted target for the
/// same elapsed period. Positive delta = ahead of pace.
pub fn pace_delta(
    template: &OpenHoursTemplate,
    monthly_target: Decimal,
    mtd_actual: Decimal,
    as_of: NaiveDate,
) -> PaceSummary {
    let target = mtd_target(template, monthly_target, as_of);
    PaceSummary {
        mtd_actual,
        mtd_target: target,
        pace_delta: mtd_actual - target,
    }
}

/// Trailing net daily rate from month-to-date operating totals: the
/// forward-looking movement assumption for threshold ETAs. Distinct from
/// the historical burn rate, which uses realized balance deltas.
pub fn velocity(mtd_net_total: Decimal, days_elapsed: u32) -> Decimal {
    mtd_net_total / Decimal::from(days_elapsed.max(1))
}

/// Average of the most recent `trailing_weeks` weekly deltas, converted
/// to a daily figure. Only a net-negative trailing window produces a
/// burn; a net-positive one means runway is unbounded (`None`).
pub fn daily_burn(deltas: &[WeeklyDelta], trailing_weeks: usize) -> Option<Decimal> {
    if deltas.is_empty() || trailing_weeks == 0 {
        return None;
    }
    let tail = &deltas[deltas.len().saturating_sub(trailing_weeks)..];
    let sum: Decimal = tail.iter().map(|w| w.delta).sum();
    let mean = sum / Decimal::from(tail.len() as u32);
    if mean >= Decimal::ZERO {
        return None;
    }
    Some(mean / DAYS_PER_WEEK)
}

/// Days of operating cash remaining at the current burn rate. `None`
/// (unbounded) without a negative burn; never negative.
pub fn runway_days(cash_now: Decimal, daily_burn: Option<Decimal>) -> Option<Decimal> {
    let burn = daily_burn?;
    if burn >= Decimal::ZERO {
        return None;
    }
    Some((cash_now / burn.abs()).max(Decimal::zero()))
}

/// Days until the cash level crosses `threshold` at `velocity` per day.
/// `Some(0)` when already at the threshold, `None` when the velocity
/// points away from it. Never negative.
pub fn eta_to_threshold(
    cash_now: Decimal,
    threshold: Decimal,
    velocity: Decimal,
) -> Option<Decimal> {
    if cash_now == threshold {
        return Some(Decimal::ZERO);
    }
    let gap = threshold - cash_now;
    // Crossing requires movement in the gap's direction.
    if velocity.is_zero() || (gap > Decimal::ZERO) != (velocity > Decimal::ZERO) {
        return None;
    }
    Some(gap / velocity)
}

/// The flat burn/runway result consumed by the dashboard: burn and WoW
/// from the merged series, runway from the authoritative cash balance,
/// threshold ETAs from the forward velocity.
pub fn burn_summary(
    merged_series: &[BalancePoint],
    cash_now: Decimal,
    cash_floor: Decimal,
    target_reserve: Decimal,
    velocity: Decimal,
    trailing_weeks: usize,
) -> BurnSummary {
    let deltas = weekly_deltas(merged_series);
    let burn = daily_burn(&deltas, trailing_weeks);

    BurnSummary {
        daily_burn: burn,
        runway_days: runway_days(cash_now, burn),
        eta_to_floor_days: eta_to_threshold(cash_now, cash_floor, velocity),
        eta_to_target_days: eta_to_threshold(cash_now, target_reserve, velocity),
        wow_change: deltas.last().map(|w| w.delta),
    }
}

/// Confidence score over `[window_start, as_of]`: a small weighted rubric
/// of whether any sales data exists, whether expenses were entered
/// recently, and how many elapsed days carry a logged sales figure.
pub fn confidence(
    day_entries: &[DayEntry],
    expenses: &[ExpenseTransaction],
    window_start: NaiveDate,
    as_of: NaiveDate,
) -> ConfidenceReport {
    let elapsed = days_between(window_start, as_of);

    let logged_days = elapsed
        .iter()
        .filter(|d| {
            day_entries
                .iter()
                .any(|e| e.date == **d && e.is_logged())
        })
        .count();

    let has_any_sales = day_entries
        .iter()
        .any(|e| e.is_logged() && e.date <= as_of);

    let has_recent_expenses = expenses.iter().any(|e| {
        e.date <= as_of && (as_of - e.date).num_days() <= RECENT_EXPENSE_HORIZON_DAYS
    });

    let mut score = 0u32;
    if has_any_sales {
        score += CONFIDENCE_WEIGHT_HAS_SALES;
    }
    if has_recent_expenses {
        score += CONFIDENCE_WEIGHT_RECENT_EXPENSES;
    }
    if !elapsed.is_empty() {
        let coverage =
            Decimal::from(logged_days as u32) / Decimal::from(elapsed.len() as u32);
        score += (coverage * Decimal::from(CONFIDENCE_WEIGHT_COVERAGE))
            .round()
            .to_u32()
            .unwrap_or(0);
    }
    let score = score.min(100);

    ConfidenceReport {
        score,
        level: confidence_level(score),
    }
}

/// Buckets a score into its level. Monotonic step function of the score.
pub fn confidence_level(score: u32) -> ConfidenceLevel {
    if score >= CONFIDENCE_HIGH_THRESHOLD {
        ConfidenceLevel::High
    } else if score >= CONFIDENCE_MEDIUM_THRESHOLD {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}
