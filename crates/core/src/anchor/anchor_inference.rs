//! Determines the best available starting cash balance for a requested
//! window when no explicit year-start anchor was recorded.
//!
//! Resolution order: an explicit year-start anchor always wins; otherwise
//! the cash snapshot closest to the window start is rolled forward or
//! backward through the logged daily cash flows; with no snapshots at all
//! the anchor is zero with `method = none`.
//!
//! A snapshot records the opening balance of its date, and the resolved
//! anchor is the opening balance of the window start. Rolling forward from
//! snapshot date S to window start W therefore applies the flows of the
//! fully elapsed days `[S, W)`; rolling backward subtracts the flows of
//! `[W, S)`. A snapshot dated exactly at the window start is used as-is.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::anchor_model::{AnchorMethod, AnchorResolution};
use crate::ledger::{CashInjection, CashSnapshot, DayEntry, ExpenseTransaction, YearStartAnchor};

/// The snapshot treated as the authoritative "now" balance: the most
/// recent by wall-clock entry, not necessarily by date.
pub fn authoritative_snapshot(snapshots: &[CashSnapshot]) -> Option<&CashSnapshot> {
    snapshots.iter().max_by_key(|s| s.recorded_at)
}

/// Resolves the starting balance for a window beginning at `window_start`.
pub fn infer_anchor(
    year_start: Option<&YearStartAnchor>,
    snapshots: &[CashSnapshot],
    day_entries: &[DayEntry],
    expenses: &[ExpenseTransaction],
    injections: &[CashInjection],
    window_start: NaiveDate,
) -> AnchorResolution {
    // Explicit always wins, regardless of snapshot availability.
    if let Some(anchor) = year_start {
        return AnchorResolution {
            amount: anchor.amount,
            date: anchor.date,
            method: AnchorMethod::Explicit,
        };
    }

    // Prefer the snapshot closest to the window start to minimize
    // compounded roll error; ties on date go to the latest entry.
    let before = snapshots
        .iter()
        .filter(|s| s.date <= window_start)
        .max_by_key(|s| (s.date, s.recorded_at));

    if let Some(snapshot) = before {
        let rolled = snapshot.amount
            + net_flow_between(
                day_entries,
                expenses,
                injections,
                snapshot.date,
                window_start,
            );
        debug!(
            "Anchor rolled forward from snapshot {} ({}) to {}: {}",
            snapshot.date, snapshot.amount, window_start, rolled
        );
        return AnchorResolution {
            amount: rolled,
            date: window_start,
            method: AnchorMethod::SnapshotRolledForward,
        };
    }

    let after = snapshots
        .iter()
        .filter(|s| s.date > window_start)
        .min_by_key(|s| s.date)
        .map(|earliest| {
            // Same date appearing twice: the latest entry is authoritative.
            snapshots
                .iter()
                .filter(|s| s.date == earliest.date)
                .max_by_key(|s| s.recorded_at)
                .unwrap_or(earliest)
        });

    if let Some(snapshot) = after {
        let rolled = snapshot.amount
            - net_flow_between(
                day_entries,
                expenses,
                injections,
                window_start,
                snapshot.date,
            );
        debug!(
            "Anchor rolled backward from snapshot {} ({}) to {}: {}",
            snapshot.date, snapshot.amount, window_start, rolled
        );
        return AnchorResolution {
            amount: rolled,
            date: window_start,
            method: AnchorMethod::SnapshotRolledBackward,
        };
    }

    // No data at all. Zero with an explicit marker so downstream can
    // render the whole estimated series as unanchored.
    AnchorResolution {
        amount: Decimal::ZERO,
        date: window_start,
        method: AnchorMethod::None,
    }
}

/// Net cash flow over the half-open day range `[start, end)`: logged
/// sales minus logged expenses plus signed capital movements. Unentered
/// sales days contribute nothing (skipped, not zero-coerced, though the
/// sum is the same either way).
fn net_flow_between(
    day_entries: &[DayEntry],
    expenses: &[ExpenseTransaction],
    injections: &[CashInjection],
    start: NaiveDate,
    end: NaiveDate,
) -> Decimal {
    if start >= end {
        return Decimal::ZERO;
    }
    let in_range = |d: NaiveDate| d >= start && d < end;

    let sales: Decimal = day_entries
        .iter()
        .filter(|e| in_range(e.date))
        .filter_map(|e| e.net_sales_ex_tax)
        .sum();
    let spent: Decimal = expenses
        .iter()
        .filter(|e| in_range(e.date))
        .map(|e| e.amount)
        .sum();
    let capital: Decimal = injections
        .iter()
        .filter(|i| in_range(i.date))
        .map(|i| i.signed_amount())
        .sum();

    sales - spent + capital
}
