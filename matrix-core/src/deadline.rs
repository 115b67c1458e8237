//! Deadline proximity: the urgency sub-score derived from days-until-due.

use chrono::{DateTime, NaiveDate};
use tracing::debug;

use crate::dimensions::Score;

/// Parse a stored due date.
///
/// Accepts `YYYY-MM-DD` and, leniently, a full RFC 3339 timestamp (its UTC
/// calendar date is used). Anything else is treated as "no due date".
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.naive_utc().date()),
        Err(e) => {
            debug!(due_date = raw, error = %e, "ignoring unparseable due date");
            None
        }
    }
}

/// Whole days from `today` until `due`. Negative when overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    due.signed_duration_since(today).num_days()
}

/// Score 0..=3 from how close the due date is.
///
/// Buckets, first match wins:
/// - due within 2 days (including today and overdue) => 3
/// - within 7 days => 2
/// - within 14 days => 1
/// - later, or no due date => 0
pub fn derive_deadline_proximity(due_date: Option<NaiveDate>, today: NaiveDate) -> Score {
    let Some(due) = due_date else { return 0 };

    match days_until(due, today) {
        d if d <= 2 => 3,
        d if d <= 7 => 2,
        d if d <= 14 => 1,
        _ => 0,
    }
}

/// Same as [`derive_deadline_proximity`], starting from the stored text.
pub fn deadline_proximity_for(raw_due: Option<&str>, today: NaiveDate) -> Score {
    derive_deadline_proximity(raw_due.and_then(parse_due_date), today)
}
