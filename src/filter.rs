//! Roster filtering and projection.
//!
//! Applies department/position/status filters to a roster snapshot and
//! returns a new filtered snapshot. Filtering follows display semantics:
//!
//! - department/position filters drop whole staff rows (exact match);
//! - hiding completed work drops `Completed` projects from each retained
//!   row but never the row itself; rows represent people, not projects, so
//!   a person whose every project is completed still appears with an empty
//!   project list;
//! - `total_workload`/`availability` are left exactly as supplied, even when
//!   projects were dropped. Callers that want totals consistent with the
//!   filtered list recompute via
//!   [`computed_workload`](crate::models::StaffAssignment::computed_workload).

use serde::{Deserialize, Serialize};

use crate::models::{ProjectStatus, StaffAssignment};

/// Sentinel value that disables a filter axis.
const ALL: &str = "all";

/// Roster filter criteria.
///
/// Each axis is optional; an unset axis (or the literal `"all"`, which
/// upstream callers send for "no selection") matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffFilter {
    /// Exact-match department, `None` = any.
    pub department: Option<String>,
    /// Exact-match position, `None` = any.
    pub position: Option<String>,
    /// Whether `Completed` projects stay in the output.
    pub show_completed: bool,
}

impl Default for StaffFilter {
    fn default() -> Self {
        Self {
            department: None,
            position: None,
            show_completed: true,
        }
    }
}

impl StaffFilter {
    /// Creates a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the department axis. `"all"` clears it.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        let department = department.into();
        self.department = (department != ALL).then_some(department);
        self
    }

    /// Sets the position axis. `"all"` clears it.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        let position = position.into();
        self.position = (position != ALL).then_some(position);
        self
    }

    /// Sets whether completed projects are kept (default: kept).
    pub fn with_show_completed(mut self, show_completed: bool) -> Self {
        self.show_completed = show_completed;
        self
    }

    /// Whether a staff member passes the department/position axes.
    pub fn matches(&self, staff: &StaffAssignment) -> bool {
        let department_ok = self
            .department
            .as_deref()
            .is_none_or(|d| staff.department == d);
        let position_ok = self.position.as_deref().is_none_or(|p| staff.position == p);
        department_ok && position_ok
    }

    /// Applies the filter to a roster, returning a new filtered roster.
    ///
    /// Input records are never mutated; retained rows are cloned, with
    /// completed projects dropped when `show_completed` is off.
    pub fn apply(&self, staff: &[StaffAssignment]) -> Vec<StaffAssignment> {
        staff
            .iter()
            .filter(|s| self.matches(s))
            .cloned()
            .map(|mut member| {
                if !self.show_completed {
                    member
                        .projects
                        .retain(|p| p.status != ProjectStatus::Completed);
                }
                member
            })
            .collect()
    }
}
