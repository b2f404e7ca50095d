//! Fixed figures shared across the engine.

/// Decimal precision for balance and share calculations.
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default number of trailing weekly deltas averaged into the burn rate.
pub const DEFAULT_TRAILING_WEEKS: usize = 4;

/// Store close hour used when settings carry none.
pub const DEFAULT_STORE_CLOSE_HOUR: u32 = 17;

/// Days before the as-of date within which an expense entry still counts
/// as "recent" for the confidence rubric.
pub const RECENT_EXPENSE_HORIZON_DAYS: i64 = 30;

/// Confidence rubric weights. They sum to 100.
pub const CONFIDENCE_WEIGHT_HAS_SALES: u32 = 30;
pub const CONFIDENCE_WEIGHT_RECENT_EXPENSES: u32 = 20;
pub const CONFIDENCE_WEIGHT_COVERAGE: u32 = 50;

/// Score thresholds for the confidence level buckets.
pub const CONFIDENCE_HIGH_THRESHOLD: u32 = 70;
pub const CONFIDENCE_MEDIUM_THRESHOLD: u32 = 40;
