//! Unit tests for anchor inference.

use super::*;
use crate::ledger::{
    CashInjection, CashSnapshot, DayEntry, ExpenseCategory, ExpenseTransaction, InjectionKind,
    YearStartAnchor,
};
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn snapshot(d: NaiveDate, amount: Decimal, entry_seq: u32) -> CashSnapshot {
    CashSnapshot {
        date: d,
        amount,
        recorded_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, entry_seq).unwrap(),
    }
}

fn entry(d: NaiveDate, sales: Option<Decimal>) -> DayEntry {
    DayEntry {
        date: d,
        net_sales_ex_tax: sales,
    }
}

fn expense(d: NaiveDate, amount: Decimal) -> ExpenseTransaction {
    ExpenseTransaction {
        date: d,
        category: ExpenseCategory::Opex,
        amount,
        spread_months: None,
        spread_type: None,
    }
}

#[test]
fn explicit_anchor_always_wins() {
    let year_start = YearStartAnchor {
        date: date(2024, 1, 1),
        amount: dec!(25000),
    };
    let snapshots = vec![snapshot(date(2024, 1, 5), dec!(99999), 0)];

    let anchor = infer_anchor(
        Some(&year_start),
        &snapshots,
        &[],
        &[],
        &[],
        date(2024, 1, 1),
    );

    assert_eq!(anchor.method, AnchorMethod::Explicit);
    assert_eq!(anchor.amount, dec!(25000));
    assert_eq!(anchor.date, date(2024, 1, 1));
}

#[test]
fn snapshot_before_window_rolls_forward_through_flows() {
    let snapshots = vec![snapshot(date(2024, 1, 10), dec!(10000), 0)];
    let entries = vec![
        entry(date(2024, 1, 10), Some(dec!(500))),
        entry(date(2024, 1, 12), Some(dec!(300))),
        // Day on the window start itself: not yet elapsed, excluded.
        entry(date(2024, 1, 15), Some(dec!(999))),
        // Unentered day contributes nothing.
        entry(date(2024, 1, 13), None),
    ];
    let expenses = vec![expense(date(2024, 1, 11), dec!(200))];

    let anchor = infer_anchor(None, &snapshots, &entries, &expenses, &[], date(2024, 1, 15));

    assert_eq!(anchor.method, AnchorMethod::SnapshotRolledForward);
    // 10000 + 500 + 300 - 200
    assert_eq!(anchor.amount, dec!(10600));
    assert_eq!(anchor.date, date(2024, 1, 15));
}

#[test]
fn snapshot_after_window_rolls_backward() {
    let snapshots = vec![snapshot(date(2024, 1, 10), dec!(10000), 0)];
    let entries = vec![entry(date(2024, 1, 5), Some(dec!(400)))];
    let expenses = vec![expense(date(2024, 1, 8), dec!(150))];

    let anchor = infer_anchor(None, &snapshots, &entries, &expenses, &[], date(2024, 1, 1));

    assert_eq!(anchor.method, AnchorMethod::SnapshotRolledBackward);
    // 10000 - (400 - 150)
    assert_eq!(anchor.amount, dec!(9750));
    assert_eq!(anchor.date, date(2024, 1, 1));
}

#[test]
fn backward_roll_with_no_flows_is_unchanged() {
    // One $10,000 snapshot on 2024-01-10, window starts 2024-01-01,
    // nothing logged before the snapshot.
    let snapshots = vec![snapshot(date(2024, 1, 10), dec!(10000), 0)];

    let anchor = infer_anchor(None, &snapshots, &[], &[], &[], date(2024, 1, 1));

    assert_eq!(anchor.method, AnchorMethod::SnapshotRolledBackward);
    assert_eq!(anchor.amount, dec!(10000));
    assert_eq!(anchor.date, date(2024, 1, 1));
}

#[test]
fn snapshot_on_window_start_is_used_verbatim() {
    let snapshots = vec![snapshot(date(2024, 2, 1), dec!(7500), 0)];
    let entries = vec![entry(date(2024, 2, 1), Some(dec!(600)))];

    let anchor = infer_anchor(None, &snapshots, &entries, &[], &[], date(2024, 2, 1));

    assert_eq!(anchor.method, AnchorMethod::SnapshotRolledForward);
    assert_eq!(anchor.amount, dec!(7500));
}

#[test]
fn closest_straddling_snapshot_wins() {
    let snapshots = vec![
        snapshot(date(2023, 11, 1), dec!(5000), 0),
        snapshot(date(2024, 1, 28), dec!(8000), 1),
        snapshot(date(2024, 2, 20), dec!(9000), 2),
    ];

    let anchor = infer_anchor(None, &snapshots, &[], &[], &[], date(2024, 2, 1));

    // 2024-01-28 is closer to the window start than 2023-11-01, and a
    // snapshot on-or-before beats a later one.
    assert_eq!(anchor.method, AnchorMethod::SnapshotRolledForward);
    assert_eq!(anchor.amount, dec!(8000));
}

#[test]
fn same_date_snapshots_prefer_latest_entry() {
    let snapshots = vec![
        snapshot(date(2024, 1, 15), dec!(4000), 0),
        snapshot(date(2024, 1, 15), dec!(4200), 5),
    ];

    let anchor = infer_anchor(None, &snapshots, &[], &[], &[], date(2024, 2, 1));
    assert_eq!(anchor.amount, dec!(4200));
}

#[test]
fn capital_movements_participate_in_the_roll() {
    let snapshots = vec![snapshot(date(2024, 1, 1), dec!(1000), 0)];
    let injections = vec![
        CashInjection {
            date: date(2024, 1, 5),
            amount: dec!(5000),
            kind: InjectionKind::Injection,
        },
        CashInjection {
            date: date(2024, 1, 8),
            amount: dec!(700),
            kind: InjectionKind::OwnerDraw,
        },
    ];

    let anchor = infer_anchor(None, &snapshots, &[], &[], &injections, date(2024, 1, 10));
    assert_eq!(anchor.amount, dec!(5300));
}

#[test]
fn no_data_resolves_to_zero_with_none_method() {
    let anchor = infer_anchor(None, &[], &[], &[], &[], date(2024, 1, 1));

    assert_eq!(anchor.method, AnchorMethod::None);
    assert_eq!(anchor.amount, Decimal::ZERO);
    assert_eq!(anchor.date, date(2024, 1, 1));
}

#[test]
fn authoritative_snapshot_is_latest_by_entry_not_date() {
    let snapshots = vec![
        // Dated later but entered earlier.
        snapshot(date(2024, 3, 1), dec!(9999), 0),
        // Dated earlier but entered later: authoritative.
        snapshot(date(2024, 2, 1), dec!(8888), 9),
    ];

    let now = authoritative_snapshot(&snapshots).unwrap();
    assert_eq!(now.amount, dec!(8888));
    assert!(authoritative_snapshot(&[]).is_none());
}

#[test]
fn anchor_method_wire_form_is_kebab_case() {
    let anchor = infer_anchor(None, &[], &[], &[], &[], date(2024, 1, 1));
    let value = serde_json::to_value(&anchor).unwrap();
    assert_eq!(value["method"], "none");

    let rolled = serde_json::to_value(AnchorMethod::SnapshotRolledBackward).unwrap();
    assert_eq!(rolled, "snapshot-rolled-backward");
}
