//! Spreads a monthly monetary target across calendar days in proportion
//! to configured open hours.
//!
//! The weekday used for weighting is always derived from the calendar date
//! being distributed. That matters when a prior year's monthly total is
//! projected onto the current year: the same day-of-month can fall on a
//! different weekday, and the weighting must reflect the year actually
//! being estimated.

use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use super::distribution_model::{DailyShare, OpenHoursTemplate, RemainingPace};
use crate::utils::{days_between, days_in_month, first_of_month};

/// Sum of template hours over every day of the given month.
pub fn month_total_hours(template: &OpenHoursTemplate, year: i32, month: u32) -> Decimal {
    month_days(year, month)
        .iter()
        .map(|d| template.hours_for(d.weekday()))
        .sum()
}

/// Per-day share of `monthly_target` for every day of the month:
/// `share(day) = target × hours(day) / Σ hours(all days)`.
///
/// A month whose total hours are zero distributes zero to every day; that
/// is a valid configuration (fully closed month), not an error.
pub fn daily_shares(
    template: &OpenHoursTemplate,
    year: i32,
    month: u32,
    monthly_target: Decimal,
) -> Vec<DailyShare> {
    let days = month_days(year, month);
    let total_hours = month_total_hours(template, year, month);

    if total_hours.is_zero() {
        debug!(
            "Zero open hours in {}-{:02}; distributing zero to all {} days",
            year,
            month,
            days.len()
        );
    }

    days.into_iter()
        .map(|date| {
            let hours = template.hours_for(date.weekday());
            let share = if total_hours.is_zero() {
                Decimal::ZERO
            } else {
                monthly_target * hours / total_hours
            };
            DailyShare { date, hours, share }
        })
        .collect()
}

/// Hours-weighted pace target from the 1st of the month through `as_of`
/// inclusive.
pub fn mtd_target(
    template: &OpenHoursTemplate,
    monthly_target: Decimal,
    as_of: NaiveDate,
) -> Decimal {
    daily_shares(template, as_of.year(), as_of.month(), monthly_target)
        .iter()
        .filter(|s| s.date <= as_of)
        .map(|s| s.share)
        .sum()
}

/// What must be sold per remaining open day to reach `goal` from
/// `achieved`, counting `as_of` itself as remaining when it is open.
///
/// With no open days left the remaining amount is reported without a
/// division and `per_open_day` is `None`.
pub fn daily_needed(
    template: &OpenHoursTemplate,
    goal: Decimal,
    achieved: Decimal,
    as_of: NaiveDate,
) -> RemainingPace {
    let remaining = goal - achieved;

    let month_end = NaiveDate::from_ymd_opt(
        as_of.year(),
        as_of.month(),
        days_in_month(as_of.year(), as_of.month()),
    )
    .unwrap_or(as_of);

    let open_days_left = days_between(as_of, month_end)
        .iter()
        .filter(|d| template.is_open(d.weekday()))
        .count() as u32;

    let per_open_day = if open_days_left == 0 {
        None
    } else {
        Some(remaining / Decimal::from(open_days_left))
    };

    RemainingPace {
        remaining,
        open_days_left,
        per_open_day,
    }
}

fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };
    let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
        .unwrap_or_else(|| first_of_month(first));
    days_between(first, last)
}
