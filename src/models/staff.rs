//! Staff roster model.
//!
//! A staff assignment is one person: descriptive attributes, an employment
//! interval (`join_date` to optional `leave_date`), a chronological list of
//! department transfers, and the projects the person is assigned to.
//!
//! # Workload Totals
//! `total_workload` and `availability` arrive from the upstream system as
//! independent facts and may disagree with the project list. The engine
//! never rewrites them; callers that want client-side truth use
//! [`computed_workload`](StaffAssignment::computed_workload) and
//! [`computed_availability`](StaffAssignment::computed_availability).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DepartmentTransfer, ProjectAssignment};

/// One staff member with assignments and movement history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffAssignment {
    /// Unique staff identifier.
    pub id: String,
    /// Display name.
    pub staff_name: String,
    /// Job position (e.g. "Senior Engineer").
    pub position: String,
    /// Current department.
    pub department: String,
    /// Employment start date.
    pub join_date: NaiveDate,
    /// Employment end date. `None` while employed.
    pub leave_date: Option<NaiveDate>,
    /// Department transfers, in chronological insertion order.
    #[serde(default)]
    pub transfers: Vec<DepartmentTransfer>,
    /// Projects assigned to this person (not shared across staff).
    #[serde(default)]
    pub projects: Vec<ProjectAssignment>,
    /// Upstream-supplied workload total (percent of capacity).
    pub total_workload: f64,
    /// Upstream-supplied availability (percent of capacity).
    pub availability: f64,
}

impl StaffAssignment {
    /// Creates a staff member with no projects or transfers.
    pub fn new(id: impl Into<String>, join_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            staff_name: String::new(),
            position: String::new(),
            department: String::new(),
            join_date,
            leave_date: None,
            transfers: Vec::new(),
            projects: Vec::new(),
            total_workload: 0.0,
            availability: 100.0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.staff_name = name.into();
        self
    }

    /// Sets the position.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the leave date.
    pub fn with_leave_date(mut self, leave_date: NaiveDate) -> Self {
        self.leave_date = Some(leave_date);
        self
    }

    /// Adds a department transfer.
    pub fn with_transfer(mut self, transfer: DepartmentTransfer) -> Self {
        self.transfers.push(transfer);
        self
    }

    /// Adds a project assignment.
    pub fn with_project(mut self, project: ProjectAssignment) -> Self {
        self.projects.push(project);
        self
    }

    /// Sets the upstream-supplied workload totals.
    pub fn with_totals(mut self, total_workload: f64, availability: f64) -> Self {
        self.total_workload = total_workload;
        self.availability = availability;
        self
    }

    /// Workload derived from the current project list.
    pub fn computed_workload(&self) -> f64 {
        self.projects.iter().map(|p| p.workload).sum()
    }

    /// Availability derived from the current project list:
    /// `max(0, 100 - computed_workload)`.
    pub fn computed_availability(&self) -> f64 {
        (100.0 - self.computed_workload()).max(0.0)
    }

    /// Whether the person has left (has a `leave_date`).
    #[inline]
    pub fn has_left(&self) -> bool {
        self.leave_date.is_some()
    }

    /// Number of project assignments.
    #[inline]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}
