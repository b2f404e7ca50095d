//! Unit tests for settings resolution precedence.

use super::*;
use crate::constants::DEFAULT_STORE_CLOSE_HOUR;
use crate::ledger::NutSnapshot;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn nut(date: (i32, u32, u32), amount: Decimal) -> NutSnapshot {
    NutSnapshot {
        effective_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        amount,
    }
}

#[test]
fn nut_uses_latest_step_on_or_before_as_of() {
    let history = vec![
        nut((2024, 1, 1), dec!(4000)),
        nut((2024, 6, 1), dec!(4500)),
        nut((2025, 1, 1), dec!(5000)),
    ];
    let settings = EngineSettings {
        monthly_nut: Some(dec!(3000)),
        ..Default::default()
    };

    let as_of = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
    assert_eq!(resolve_nut(&history, &settings, as_of), dec!(4500));

    // Exactly on a step boundary the new figure applies.
    let boundary = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert_eq!(resolve_nut(&history, &settings, boundary), dec!(4500));
}

#[test]
fn nut_falls_back_to_settings_then_zero() {
    let settings = EngineSettings {
        monthly_nut: Some(dec!(3000)),
        ..Default::default()
    };
    let as_of = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();

    // History exists but starts after as_of: settings default wins.
    let future_only = vec![nut((2025, 1, 1), dec!(5000))];
    assert_eq!(resolve_nut(&future_only, &settings, as_of), dec!(3000));

    // Nothing anywhere: zero.
    assert_eq!(
        resolve_nut(&[], &EngineSettings::default(), as_of),
        Decimal::ZERO
    );
}

#[test]
fn store_close_hour_defaults() {
    assert_eq!(
        resolve_store_close_hour(&EngineSettings::default()),
        DEFAULT_STORE_CLOSE_HOUR
    );
    let settings = EngineSettings {
        store_close_hour: Some(21),
        ..Default::default()
    };
    assert_eq!(resolve_store_close_hour(&settings), 21);
}

#[test]
fn year_start_anchor_needs_both_fields() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let complete = EngineSettings {
        year_start_cash_amount: Some(dec!(12000)),
        year_start_cash_date: Some(date),
        ..Default::default()
    };
    let anchor = resolve_year_start_anchor(&complete).unwrap();
    assert_eq!(anchor.amount, dec!(12000));
    assert_eq!(anchor.date, date);

    let amount_only = EngineSettings {
        year_start_cash_amount: Some(dec!(12000)),
        ..Default::default()
    };
    assert!(resolve_year_start_anchor(&amount_only).is_none());
}

#[test]
fn target_rates_default_to_zero() {
    assert_eq!(
        resolve_target_rates(&EngineSettings::default()),
        (Decimal::ZERO, Decimal::ZERO)
    );
    let settings = EngineSettings {
        target_cogs_pct: Some(dec!(0.32)),
        target_fees_pct: Some(dec!(0.03)),
        ..Default::default()
    };
    assert_eq!(resolve_target_rates(&settings), (dec!(0.32), dec!(0.03)));
}
