//! Ledger domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day's logged sales figure.
///
/// `net_sales_ex_tax` is `None` when the day has not been entered yet,
/// which is distinct from an entered zero. Aggregations skip `None`
/// instead of coercing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub date: NaiveDate,
    pub net_sales_ex_tax: Option<Decimal>,
}

impl DayEntry {
    /// Whether the day has an entered figure (including an entered zero).
    pub fn is_logged(&self) -> bool {
        self.net_sales_ex_tax.is_some()
    }
}

/// Expense category as logged by the bookkeeping UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Cogs,
    Opex,
    OwnerDraw,
    Capex,
    Fees,
    Other,
}

/// Shape of a multi-month spread. Only linear spreads are defined today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadType {
    Linear,
}

/// A logged expense.
///
/// `spread_months >= 2` marks an amortized expense whose monthly-equivalent
/// portion is computed by the spread normalizer; absent or `< 2` means the
/// full amount counts in the month it was logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTransaction {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub spread_months: Option<u32>,
    pub spread_type: Option<SpreadType>,
}

/// One prior-period monthly sales total. At most one record per
/// (year, month) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceMonth {
    pub year: i32,
    pub month: u32,
    pub reference_net_sales_ex_tax: Decimal,
}

/// A manually recorded point-in-time cash balance.
///
/// The snapshot records the opening balance of its date. `recorded_at` is
/// the wall-clock entry time; the snapshot with the latest `recorded_at`
/// (not necessarily the latest `date`) is the authoritative "now" balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashSnapshot {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub recorded_at: DateTime<Utc>,
}

/// Direction of an external capital movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionKind {
    Injection,
    Withdrawal,
    OwnerDraw,
}

/// An external capital movement. Excluded from operating burn, but it
/// still moves the cash balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashInjection {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub kind: InjectionKind,
}

impl CashInjection {
    /// The movement's effect on the cash balance: injections add,
    /// withdrawals and owner draws subtract.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            InjectionKind::Injection => self.amount,
            InjectionKind::Withdrawal | InjectionKind::OwnerDraw => -self.amount,
        }
    }
}

/// One step in the monthly fixed-overhead (NUT) history. The NUT in force
/// on a date is the latest snapshot with `effective_date` on or before it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutSnapshot {
    pub effective_date: NaiveDate,
    pub amount: Decimal,
}

/// An explicit starting cash balance for a fiscal year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearStartAnchor {
    pub date: NaiveDate,
    pub amount: Decimal,
}
