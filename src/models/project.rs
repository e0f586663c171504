//! Project assignment model.
//!
//! A project assignment is one staff-to-project interval: the staff member
//! spends `workload` percent of capacity on the project between `start_date`
//! and `end_date` (both inclusive).
//!
//! The `start_date <= end_date` invariant is reported by
//! [`validation`](crate::validation), not enforced at construction; the
//! layout mapper clamps inverted intervals to the minimum bar width instead
//! of failing mid-render.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Work in progress.
    Active,
    /// Finished; hidden when a filter excludes completed work.
    Completed,
    /// Scheduled but not yet started.
    Planned,
    /// Paused.
    OnHold,
}

/// One staff-to-project assignment interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    /// Project identifier.
    pub project_id: String,
    /// Human-readable project name.
    pub project_name: String,
    /// First day of the assignment (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the assignment (inclusive).
    pub end_date: NaiveDate,
    /// Percent of capacity consumed, expected range [0, 100] (not clamped).
    pub workload: f64,
    /// Free-text role on the project.
    pub role: String,
    /// Assignment status.
    pub status: ProjectStatus,
}

impl ProjectAssignment {
    /// Creates an active assignment with zero workload.
    pub fn new(project_id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            project_id: project_id.into(),
            project_name: String::new(),
            start_date,
            end_date,
            workload: 0.0,
            role: String::new(),
            status: ProjectStatus::Active,
        }
    }

    /// Sets the project name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    /// Sets the workload percentage.
    pub fn with_workload(mut self, workload: f64) -> Self {
        self.workload = workload;
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Number of days from start to end (0 for a single-day assignment,
    /// negative for an inverted interval).
    #[inline]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Whether two assignment intervals share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}
