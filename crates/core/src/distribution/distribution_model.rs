//! Open-hours template and distribution result models.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configured open hours per weekday.
///
/// A day with zero hours is closed and receives zero allocation in any
/// hours-weighted distribution. Out-of-range values are clamped at the
/// boundary via [`OpenHoursTemplate::sanitized`], never inside the
/// distributor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenHoursTemplate {
    pub monday: Decimal,
    pub tuesday: Decimal,
    pub wednesday: Decimal,
    pub thursday: Decimal,
    pub friday: Decimal,
    pub saturday: Decimal,
    pub sunday: Decimal,
}

impl OpenHoursTemplate {
    /// Hours configured for the given weekday.
    pub fn hours_for(&self, weekday: Weekday) -> Decimal {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Whether the store is open at all on the given weekday.
    pub fn is_open(&self, weekday: Weekday) -> bool {
        self.hours_for(weekday) > Decimal::ZERO
    }

    /// Boundary clamp: negative hour counts become zero. The surrounding
    /// application stores templates as loosely typed JSON, so this runs
    /// where the blob is decoded, before the template reaches the engine.
    pub fn sanitized(self) -> Self {
        let clamp = |h: Decimal| h.max(Decimal::ZERO);
        Self {
            monday: clamp(self.monday),
            tuesday: clamp(self.tuesday),
            wednesday: clamp(self.wednesday),
            thursday: clamp(self.thursday),
            friday: clamp(self.friday),
            saturday: clamp(self.saturday),
            sunday: clamp(self.sunday),
        }
    }
}

/// One day's share of a distributed monthly target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyShare {
    pub date: NaiveDate,
    pub hours: Decimal,
    pub share: Decimal,
}

/// What is still needed to reach a goal from an as-of day.
///
/// `per_open_day` is `None` when no open days remain in the month; the
/// remaining amount is still reported so the caller can render it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemainingPace {
    pub remaining: Decimal,
    pub open_days_left: u32,
    pub per_open_day: Option<Decimal>,
}
