//! Monthly staff movement series.
//!
//! Counts join, leave, and transfer events per month bucket across a
//! reporting window.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | joins | staff whose `join_date` falls in the bucket |
//! | leaves | staff whose `leave_date` is present and falls in the bucket |
//! | transfers | distinct staff with >= 1 transfer dated in the bucket |
//! | net | joins - leaves (derived, per bucket) |
//!
//! Transfers count *people*, not events: two same-month transfers by one
//! person increment the bucket once. Buckets are half-open calendar months.
//!
//! Each bucket's counts depend only on that bucket and the roster, with no
//! cross-bucket accumulator, so the series could be computed per bucket in
//! parallel without changing the result; the implementation stays
//! sequential.

use log::debug;
use serde::Serialize;

use crate::layout::month_scale;
use crate::models::{MonthBucket, StaffAssignment, TimeWindow};

/// Movement counts for one month bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyMovement {
    /// The month these counts cover.
    pub month: MonthBucket,
    /// Staff who joined during the month.
    pub joins: usize,
    /// Staff who left during the month.
    pub leaves: usize,
    /// Distinct staff with at least one transfer during the month.
    pub transfers: usize,
}

impl MonthlyMovement {
    /// Headcount change for the month: `joins - leaves`.
    #[inline]
    pub fn net(&self) -> i64 {
        self.joins as i64 - self.leaves as i64
    }
}

/// Counts movements per month bucket across the window.
///
/// One entry per bucket of [`month_scale`], in chronological order. An
/// inverted window yields an empty series. Staff without a `leave_date`
/// never contribute to `leaves`; staff without transfers never contribute
/// to `transfers`; absence of an optional field means the event never
/// happened.
pub fn count_movements(staff: &[StaffAssignment], window: &TimeWindow) -> Vec<MonthlyMovement> {
    let buckets = month_scale(window);
    debug!(
        "event=count_movements module=analytics staff={} buckets={}",
        staff.len(),
        buckets.len()
    );

    buckets
        .into_iter()
        .map(|month| {
            let joins = staff.iter().filter(|s| month.contains(s.join_date)).count();
            let leaves = staff
                .iter()
                .filter(|s| s.leave_date.is_some_and(|d| month.contains(d)))
                .count();
            let transfers = staff
                .iter()
                .filter(|s| s.transfers.iter().any(|t| month.contains(t.transfer_date)))
                .count();
            MonthlyMovement {
                month,
                joins,
                leaves,
                transfers,
            }
        })
        .collect()
}

/// Window-level headcount change: the sum of per-bucket nets.
pub fn net_growth(series: &[MonthlyMovement]) -> i64 {
    series.iter().map(MonthlyMovement::net).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DepartmentTransfer;

    fn date(s: &str) -> chrono::NaiveDate {
        crate::models::parse_iso_date(s).unwrap()
    }

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::from_iso(start, end).unwrap()
    }

    #[test]
    fn test_joins_and_leaves_per_bucket() {
        let staff = vec![
            StaffAssignment::new("1", date("2024-01-10")),
            StaffAssignment::new("2", date("2024-01-25")),
            StaffAssignment::new("3", date("2024-02-05")).with_leave_date(date("2024-03-15")),
        ];
        let series = count_movements(&staff, &window("2024-01-01", "2024-03-31"));

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].joins, 2);
        assert_eq!(series[1].joins, 1);
        assert_eq!(series[2].joins, 0);
        assert_eq!(series[0].leaves, 0);
        assert_eq!(series[2].leaves, 1);
    }

    #[test]
    fn test_missing_leave_date_never_counts() {
        let staff = vec![StaffAssignment::new("1", date("2023-01-01"))];
        let series = count_movements(&staff, &window("2024-01-01", "2024-12-31"));
        assert!(series.iter().all(|m| m.leaves == 0));
    }

    #[test]
    fn test_transfers_count_distinct_staff() {
        // two transfers in the same month by one person → counts once
        let staff = vec![StaffAssignment::new("1", date("2022-01-01"))
            .with_transfer(DepartmentTransfer::new("Tech", "Product", date("2024-03-05")))
            .with_transfer(DepartmentTransfer::new("Product", "Data", date("2024-03-28")))];
        let series = count_movements(&staff, &window("2024-03-01", "2024-03-31"));
        assert_eq!(series[0].transfers, 1);
    }

    #[test]
    fn test_transfers_two_staff_same_month() {
        let staff = vec![
            StaffAssignment::new("1", date("2022-01-01"))
                .with_transfer(DepartmentTransfer::new("Tech", "Product", date("2024-03-05"))),
            StaffAssignment::new("2", date("2022-01-01"))
                .with_transfer(DepartmentTransfer::new("Data", "Tech", date("2024-03-20"))),
        ];
        let series = count_movements(&staff, &window("2024-03-01", "2024-03-31"));
        assert_eq!(series[0].transfers, 2);
    }

    #[test]
    fn test_net_growth_join_leave_pair_sums_to_zero() {
        let staff = vec![
            StaffAssignment::new("1", date("2024-02-10")).with_leave_date(date("2024-07-20"))
        ];
        let series = count_movements(&staff, &window("2024-02-01", "2024-07-31"));

        assert_eq!(series[0].net(), 1);
        assert_eq!(series[5].net(), -1);
        assert_eq!(net_growth(&series), 0);
    }

    #[test]
    fn test_inverted_window_yields_empty_series() {
        let staff = vec![StaffAssignment::new("1", date("2024-01-01"))];
        let series = count_movements(&staff, &window("2024-12-31", "2024-01-01"));
        assert!(series.is_empty());
        assert_eq!(net_growth(&series), 0);
    }

    #[test]
    fn test_events_outside_window_ignored() {
        let staff = vec![
            StaffAssignment::new("1", date("2023-06-01")), // joined before window
            StaffAssignment::new("2", date("2024-02-01")).with_leave_date(date("2025-01-15")),
        ];
        let series = count_movements(&staff, &window("2024-01-01", "2024-12-31"));
        let total_joins: usize = series.iter().map(|m| m.joins).sum();
        let total_leaves: usize = series.iter().map(|m| m.leaves).sum();
        assert_eq!(total_joins, 1);
        assert_eq!(total_leaves, 0);
    }

    #[test]
    fn test_idempotent() {
        let staff = vec![StaffAssignment::new("1", date("2024-02-10"))
            .with_transfer(DepartmentTransfer::new("A", "B", date("2024-04-01")))];
        let w = window("2024-01-01", "2024-06-30");
        assert_eq!(count_movements(&staff, &w), count_movements(&staff, &w));
    }
}
