//! Department transfer matrix.
//!
//! Counts staff moves between departments within a time window as a
//! department × department matrix. Used for transfer-flow heatmaps.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::models::{StaffAssignment, TimeWindow};

/// Department × department transfer counts for a time window.
///
/// Built once per query from a roster snapshot. The axis set is the sorted
/// union of the roster's current `department` values; a department appears
/// as an axis even with zero observed transfers. Counts are keyed by the
/// transfer events' own `(from, to)` departments, which may reference
/// departments no current staff member belongs to; such counts are
/// retrievable through [`count`](TransferMatrix::count) even though the
/// department is absent from [`departments`](TransferMatrix::departments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferMatrix {
    departments: Vec<String>,
    counts: HashMap<(String, String), usize>,
    total: usize,
}

impl TransferMatrix {
    /// Builds the matrix from a roster and window.
    ///
    /// A transfer is counted when its date lies in `[window.start,
    /// window.end)` and its departments differ. Self-transfers are excluded
    /// entirely: they do not even appear on the diagonal.
    pub fn build(staff: &[StaffAssignment], window: &TimeWindow) -> Self {
        let departments: BTreeSet<String> =
            staff.iter().map(|s| s.department.clone()).collect();

        let mut counts: HashMap<(String, String), usize> = HashMap::new();
        let mut total = 0;
        for member in staff {
            for transfer in &member.transfers {
                if transfer.is_self_transfer() || !window.contains(transfer.transfer_date) {
                    continue;
                }
                *counts
                    .entry((
                        transfer.from_department.clone(),
                        transfer.to_department.clone(),
                    ))
                    .or_insert(0) += 1;
                total += 1;
            }
        }

        debug!(
            "event=transfer_matrix module=analytics departments={} transfers={}",
            departments.len(),
            total
        );

        Self {
            departments: departments.into_iter().collect(),
            counts,
            total,
        }
    }

    /// Matrix axes: sorted roster departments.
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    /// Transfer count for one `(from, to)` cell.
    pub fn count(&self, from: &str, to: &str) -> usize {
        self.counts
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Total counted transfers across all cells.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether no transfer was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
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

    fn sample_roster() -> Vec<StaffAssignment> {
        vec![
            StaffAssignment::new("1", date("2022-01-01"))
                .with_department("Tech")
                .with_transfer(DepartmentTransfer::new("Product", "Tech", date("2024-02-10")))
                .with_transfer(DepartmentTransfer::new("Tech", "Data", date("2024-05-01"))),
            StaffAssignment::new("2", date("2023-03-01"))
                .with_department("Product")
                .with_transfer(DepartmentTransfer::new("Product", "Tech", date("2024-03-15"))),
            StaffAssignment::new("3", date("2023-06-01")).with_department("Design"), // no transfers
        ]
    }

    #[test]
    fn test_counts_accumulate_per_cell() {
        let m = TransferMatrix::build(&sample_roster(), &window("2024-01-01", "2024-12-31"));
        assert_eq!(m.count("Product", "Tech"), 2);
        assert_eq!(m.count("Tech", "Data"), 1);
        assert_eq!(m.count("Data", "Tech"), 0);
        assert_eq!(m.total(), 3);
    }

    #[test]
    fn test_axes_include_zero_transfer_departments() {
        let m = TransferMatrix::build(&sample_roster(), &window("2024-01-01", "2024-12-31"));
        assert_eq!(m.departments(), ["Design", "Product", "Tech"]);
    }

    #[test]
    fn test_self_transfer_contributes_nothing() {
        let staff = vec![StaffAssignment::new("1", date("2022-01-01"))
            .with_department("Tech")
            .with_transfer(DepartmentTransfer::new("Tech", "Tech", date("2024-03-01")))];
        let m = TransferMatrix::build(&staff, &window("2024-01-01", "2024-12-31"));

        assert_eq!(m.count("Tech", "Tech"), 0); // not even the diagonal
        assert!(m.is_empty());
    }

    #[test]
    fn test_window_is_half_open() {
        let staff = vec![
            StaffAssignment::new("1", date("2022-01-01"))
                .with_department("Tech")
                .with_transfer(DepartmentTransfer::new("A", "B", date("2024-01-01"))), // on start
            StaffAssignment::new("2", date("2022-01-01"))
                .with_department("Tech")
                .with_transfer(DepartmentTransfer::new("A", "B", date("2024-06-30"))), // on end
        ];
        let m = TransferMatrix::build(&staff, &window("2024-01-01", "2024-06-30"));
        assert_eq!(m.count("A", "B"), 1); // start inclusive, end exclusive
    }

    #[test]
    fn test_transfers_outside_window_ignored() {
        let m = TransferMatrix::build(&sample_roster(), &window("2024-04-01", "2024-12-31"));
        assert_eq!(m.count("Product", "Tech"), 0); // both dated before April
        assert_eq!(m.count("Tech", "Data"), 1);
    }

    #[test]
    fn test_empty_roster() {
        let m = TransferMatrix::build(&[], &window("2024-01-01", "2024-12-31"));
        assert!(m.is_empty());
        assert!(m.departments().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let roster = sample_roster();
        let w = window("2024-01-01", "2024-12-31");
        assert_eq!(
            TransferMatrix::build(&roster, &w),
            TransferMatrix::build(&roster, &w)
        );
    }
}
