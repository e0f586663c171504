//! Time window and month bucket models.
//!
//! Defines the calendar scaffolding for layout and aggregation: the
//! caller-supplied reporting window and the month buckets it spans.
//!
//! # Time Model
//! All dates are calendar days (`chrono::NaiveDate`); the engine has no
//! notion of time-of-day or timezone. Dates cross the API boundary as
//! ISO-8601 `YYYY-MM-DD` strings and are parsed exactly once.
//!
//! # Interval Conventions
//! - [`TimeWindow::contains`] is half-open: `[start, end)`. Used for event
//!   scoping (transfer matrices).
//! - [`MonthBucket`] is the half-open interval `[month_start, month_start + 1 month)`.
//! - The month scale ([`month_scale`](crate::layout::month_scale)) is
//!   inclusive of the month containing `end`.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// Parses an ISO-8601 (`YYYY-MM-DD`) date string.
///
/// This is the single entry point for date strings; downstream arithmetic
/// only ever sees a valid [`NaiveDate`].
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, TimelineError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TimelineError::InvalidDate(s.to_string()))
}

/// A reporting window `[start, end]` supplied by the caller.
///
/// All layout and aggregation is scoped to this window. An inverted window
/// (`start > end`) is a valid "no data" request: scales and aggregates over
/// it are empty, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a window from two ISO-8601 date strings.
    pub fn from_iso(start: &str, end: &str) -> Result<Self, TimelineError> {
        Ok(Self {
            start: parse_iso_date(start)?,
            end: parse_iso_date(end)?,
        })
    }

    /// Whether a date falls within `[start, end)`.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Whether the window is inverted (`start > end`).
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Number of days from `start` to `end`.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// A calendar month used as an aggregation bucket.
///
/// Represents the half-open interval `[first day, first day of next month)`.
/// The inner date is always the first of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthBucket {
    start: NaiveDate,
}

impl MonthBucket {
    /// Returns the bucket for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        // with_day(1) cannot fail: every month has a day 1
        Self {
            start: date.with_day(1).unwrap_or(date),
        }
    }

    /// First day of the month (inclusive).
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day of the following month (exclusive).
    ///
    /// Returns `None` only on `NaiveDate` range overflow.
    pub fn end(&self) -> Option<NaiveDate> {
        self.start.checked_add_months(Months::new(1))
    }

    /// The bucket for the following month.
    pub fn next(&self) -> Option<Self> {
        self.end().map(|start| Self { start })
    }

    /// Whether a date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.end() {
            Some(end) => date >= self.start && date < end,
            None => date >= self.start,
        }
    }

    /// Calendar year of this bucket.
    #[inline]
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// Calendar month of this bucket (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// `YYYY-MM` label for axis rendering.
    pub fn label(&self) -> String {
        self.start.format("%Y-%m").to_string()
    }
}
