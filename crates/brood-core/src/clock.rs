//! Date helpers for resolving the `_MMDD` suffix of a new brood.

use chrono::{FixedOffset, NaiveDate, Utc};

use brood_model::DateSuffix;

use crate::error::Result;

/// Offset of the lab's local time (KST, UTC+9) in minutes.
pub const LAB_UTC_OFFSET_MINUTES: i32 = 9 * 60;

/// Current calendar date at the given UTC offset.
///
/// Offsets outside ±24h fall back to UTC.
pub fn today_at_offset(utc_offset_minutes: i32) -> NaiveDate {
    let now = Utc::now();
    match FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60)) {
        Some(offset) => now.with_timezone(&offset).date_naive(),
        None => now.date_naive(),
    }
}

/// Resolve the suffix for a new child: an explicit non-blank value wins,
/// otherwise today's date.
///
/// # Errors
///
/// Returns a model error if the explicit value is not four digits.
pub fn resolve_date_suffix(explicit: Option<&str>, today: NaiveDate) -> Result<DateSuffix> {
    match explicit.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(DateSuffix::parse(value)?),
        None => Ok(DateSuffix::from_date(today)),
    }
}
