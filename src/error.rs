//! Error types for layout and scale computation.
//!
//! Dates enter the engine as ISO-8601 (`YYYY-MM-DD`) strings and are parsed
//! once at the boundary ([`TimeWindow::from_iso`](crate::models::TimeWindow::from_iso),
//! [`parse_iso_date`](crate::models::parse_iso_date)); a parse failure is
//! reported here instead of flowing into pixel arithmetic as a NaN-width bar.
//!
//! Missing optional fields (`leave_date`, empty `transfers`) are never
//! errors, and an inverted time window is an empty result, not a failure.

use thiserror::Error;

/// Errors surfaced by the timeline engine.
///
/// All failures are synchronous validation errors; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("unparsable date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The zoom factor was zero, negative, or non-finite.
    #[error("zoom must be a strictly positive finite number, got {0}")]
    InvalidZoom(f64),

    /// The per-month pixel width was zero, negative, or non-finite.
    #[error("month pixel width must be a strictly positive finite number, got {0}")]
    InvalidMonthWidth(f64),
}
