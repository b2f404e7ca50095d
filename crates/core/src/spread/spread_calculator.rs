//! Converts a lump expense with a multi-month spread into a steady
//! monthly-equivalent contribution, active only within its window.
//!
//! An expense starting on date S with a spread of N months is active in
//! month (Y, M) when (Y, M) falls within the half-open window
//! [S, S + N months), measured in whole calendar months. Expenses with
//! `spread_months < 2` are one-time: never active under this test, already
//! counted at face value in their origin month.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::ledger::{ExpenseCategory, ExpenseTransaction};
use crate::utils::month_index;

/// The steady monthly-equivalent portion of a spread expense:
/// `amount / spread_months`. `None` for one-time expenses.
pub fn monthly_portion(expense: &ExpenseTransaction) -> Option<Decimal> {
    match expense.spread_months {
        Some(n) if n >= 2 => Some(expense.amount / Decimal::from(n)),
        _ => None,
    }
}

/// Whether the spread expense contributes to the given month.
pub fn is_active_in_month(expense: &ExpenseTransaction, year: i32, month: u32) -> bool {
    let n = match expense.spread_months {
        Some(n) if n >= 2 => n as i64,
        _ => return false,
    };
    let start = month_index(expense.date.year(), expense.date.month());
    let target = month_index(year, month);
    target >= start && target < start + n
}

/// Normalized monthly figure for one category: active spread portions plus
/// the face value of one-time expenses logged in that month. This is the
/// amortized view, distinct from the raw cash-basis total.
pub fn normalized_monthly_total(
    expenses: &[ExpenseTransaction],
    category: ExpenseCategory,
    year: i32,
    month: u32,
) -> Decimal {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| {
            if let Some(portion) = monthly_portion(e) {
                if is_active_in_month(e, year, month) {
                    portion
                } else {
                    Decimal::ZERO
                }
            } else if e.date.year() == year && e.date.month() == month {
                e.amount
            } else {
                Decimal::ZERO
            }
        })
        .sum()
}

/// Raw cash-basis total for one category: every expense at face value in
/// the month it was logged, spreads included.
pub fn cash_basis_monthly_total(
    expenses: &[ExpenseTransaction],
    category: ExpenseCategory,
    year: i32,
    month: u32,
) -> Decimal {
    expenses
        .iter()
        .filter(|e| {
            e.category == category && e.date.year() == year && e.date.month() == month
        })
        .map(|e| e.amount)
        .sum()
}
