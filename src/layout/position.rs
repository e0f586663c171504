//! Interval-to-pixel position mapping.
//!
//! Maps a `[start, end]` date interval onto a horizontal pixel offset and
//! width, given a per-month pixel width and a zoom factor.
//!
//! # Month Approximation
//! Offsets and widths use a fractional month count of day-delta / 30. This
//! is deliberately not calendar-accurate (a 31-day month is slightly "wider"
//! than one month-column); the distortion is well under one day of pixels at
//! ordinary zoom levels and the grid tolerates it. Changing the divisor
//! would shift every bar relative to previously rendered output.
//!
//! # Clipping
//! Intervals starting before the window are clipped on the left (offset
//! floors at 0). Intervals extending past `window.end` are NOT clipped on
//! the right; callers that want a hard right edge clip in screen space.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use super::StackPolicy;
use crate::error::TimelineError;
use crate::models::TimeWindow;

/// Assumed days per month for fractional month arithmetic.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Default pixel width of one month column at zoom 1.0.
pub const DEFAULT_MONTH_PX: f64 = 80.0;

/// Default minimum bar width. Keeps zero-duration and off-window intervals
/// visible and clickable.
pub const DEFAULT_MIN_BAR_PX: f64 = 10.0;

/// Geometry parameters for bar layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Pixel width of one month column at zoom 1.0.
    pub month_px: f64,
    /// Zoom factor; must be strictly positive and finite. The UI typically
    /// exposes [0.5, 2.0], but the engine accepts any positive value.
    pub zoom: f64,
    /// Minimum rendered bar width in pixels.
    pub min_bar_px: f64,
    /// Vertical stacking policy for overlapping bars in one row.
    pub stack_policy: StackPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            month_px: DEFAULT_MONTH_PX,
            zoom: 1.0,
            min_bar_px: DEFAULT_MIN_BAR_PX,
            stack_policy: StackPolicy::default(),
        }
    }
}

impl LayoutConfig {
    /// Creates a config with default geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the month column width.
    pub fn with_month_px(mut self, month_px: f64) -> Self {
        self.month_px = month_px;
        self
    }

    /// Sets the zoom factor.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets the minimum bar width.
    pub fn with_min_bar_px(mut self, min_bar_px: f64) -> Self {
        self.min_bar_px = min_bar_px;
        self
    }

    /// Sets the stacking policy.
    pub fn with_stack_policy(mut self, policy: StackPolicy) -> Self {
        self.stack_policy = policy;
        self
    }

    /// Month column width after zoom.
    #[inline]
    pub fn effective_month_px(&self) -> f64 {
        self.month_px * self.zoom
    }

    /// Rejects non-positive or non-finite zoom and month width.
    ///
    /// Unguarded, these would draw zero- or negative-width bars (or NaN
    /// geometry); they are caller errors, surfaced before any arithmetic.
    pub fn validate(&self) -> Result<(), TimelineError> {
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(TimelineError::InvalidZoom(self.zoom));
        }
        if !self.month_px.is_finite() || self.month_px <= 0.0 {
            return Err(TimelineError::InvalidMonthWidth(self.month_px));
        }
        Ok(())
    }
}

/// Pixel-space rectangle (horizontal extent only) for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    /// Distance from the window's left edge, in pixels. Never negative.
    pub offset_px: f64,
    /// Bar width in pixels. Never below the configured minimum.
    pub width_px: f64,
}

impl BarGeometry {
    /// Pixel position of the bar's right edge.
    #[inline]
    pub fn right_edge_px(&self) -> f64 {
        self.offset_px + self.width_px
    }
}

/// Fractional month count from `from` to `to`, using the 30-day-month
/// approximation. Negative when `to` precedes `from`.
#[inline]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_MONTH
}

/// Maps a date interval onto pixel space within a window.
///
/// - `offset = max(0, months_between(window.start, start)) * month_px * zoom`
/// - `width = max(months_between(max(start, window.start), end) * month_px * zoom, min_bar_px)`
///
/// Out-of-range dates are clamped, never rejected: an interval entirely
/// before the window collapses to a minimum-width bar at offset 0, and a
/// zero- or negative-duration interval keeps the minimum width.
///
/// # Errors
/// [`TimelineError::InvalidZoom`] / [`TimelineError::InvalidMonthWidth`]
/// when the config fails [`LayoutConfig::validate`].
pub fn map_to_pixels(
    start: NaiveDate,
    end: NaiveDate,
    window: &TimeWindow,
    config: &LayoutConfig,
) -> Result<BarGeometry, TimelineError> {
    config.validate()?;

    let effective = config.effective_month_px();
    let offset_px = months_between(window.start, start).max(0.0) * effective;

    let visible_start = start.max(window.start);
    let raw_width = months_between(visible_start, end) * effective;
    let width_px = raw_width.max(config.min_bar_px);

    Ok(BarGeometry {
        offset_px,
        width_px,
    })
}
