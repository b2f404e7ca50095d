//! Converts prior-year monthly totals into daily and weekly estimate
//! series aligned to a rolling window.
//!
//! Each day in the window looks up the reference month matching its own
//! (year, month) and takes that month's hours-weighted share. The hours
//! weighting uses the weekday of the date being estimated, not the
//! reference year's weekday, so the projection reflects the calendar of
//! the year actually being estimated.

use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap, HashSet};

use super::reference_model::WeeklyEstimate;
use crate::distribution::{daily_shares, OpenHoursTemplate};
use crate::ledger::ReferenceMonth;
use crate::utils::{days_between, week_end};

/// Per-day reference allocation over `[start, end]`.
///
/// Days whose (year, month) has no reference record map to zero. The map
/// always contains every day of the window.
pub fn daily_reference_values(
    reference_months: &[ReferenceMonth],
    template: &OpenHoursTemplate,
    start: NaiveDate,
    end: NaiveDate,
) -> BTreeMap<NaiveDate, Decimal> {
    let totals: HashMap<(i32, u32), Decimal> = reference_months
        .iter()
        .map(|r| ((r.year, r.month), r.reference_net_sales_ex_tax))
        .collect();

    // Shares are computed once per month touched by the window.
    let mut share_cache: HashMap<(i32, u32), HashMap<NaiveDate, Decimal>> = HashMap::new();

    let mut values = BTreeMap::new();
    for day in days_between(start, end) {
        let key = (day.year(), day.month());
        let value = match totals.get(&key) {
            Some(total) => {
                let shares = share_cache.entry(key).or_insert_with(|| {
                    daily_shares(template, key.0, key.1, *total)
                        .into_iter()
                        .map(|s| (s.date, s.share))
                        .collect()
                });
                shares.get(&day).copied().unwrap_or(Decimal::ZERO)
            }
            None => Decimal::ZERO,
        };
        values.insert(day, value);
    }
    values
}

/// Weekly reference series over `[start, end]`, one entry per calendar
/// week (Monday-start), with the first and last week clipped to the
/// window. Weekly values are day-level sums.
pub fn project_weeks(
    reference_months: &[ReferenceMonth],
    template: &OpenHoursTemplate,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<WeeklyEstimate> {
    if start > end {
        return Vec::new();
    }

    let covered: HashSet<(i32, u32)> = reference_months
        .iter()
        .map(|r| (r.year, r.month))
        .collect();
    let daily = daily_reference_values(reference_months, template, start, end);

    let mut weeks = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        let week_last = week_end(cursor).min(end);
        let days = days_between(cursor, week_last);

        let value: Decimal = days.iter().filter_map(|d| daily.get(d)).copied().sum();
        let any_reference_day = days
            .iter()
            .any(|d| covered.contains(&(d.year(), d.month())));

        weeks.push(WeeklyEstimate {
            week_start: cursor,
            week_end: week_last,
            value,
            is_estimate: !any_reference_day,
        });

        cursor = match week_last.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    debug!(
        "Projected {} reference weeks over {}..{}",
        weeks.len(),
        start,
        end
    );
    weeks
}
