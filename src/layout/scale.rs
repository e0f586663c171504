//! Month scale builder.
//!
//! Enumerates the month buckets a time window spans, for rendering the
//! horizontal axis of a calendar grid and for bucketed aggregation.

use chrono::NaiveDate;

use crate::models::{MonthBucket, TimeWindow};

/// Enumerates month buckets from the month containing `window.start`
/// through the month containing `window.end`, inclusive.
///
/// Iterates by whole-month increments rather than day arithmetic, so the
/// scale never drifts (Jan 31 + 1 month is Feb 28/29, not Mar 3). An
/// inverted window (`start > end`) yields an empty scale: a "no data"
/// request, not an error.
///
/// Pure and idempotent: identical windows yield identical scales.
pub fn month_scale(window: &TimeWindow) -> Vec<MonthBucket> {
    if window.is_inverted() {
        return Vec::new();
    }

    let last = MonthBucket::containing(window.end);
    let mut current = MonthBucket::containing(window.start);
    let mut buckets = Vec::new();

    loop {
        buckets.push(current);
        if current == last {
            break;
        }
        match current.next() {
            Some(next) => current = next,
            None => break, // NaiveDate range exhausted
        }
    }

    buckets
}

/// Convenience wrapper taking raw dates instead of a window.
pub fn month_scale_between(start: NaiveDate, end: NaiveDate) -> Vec<MonthBucket> {
    month_scale(&TimeWindow::new(start, end))
}
