//! Department transfer events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A department transfer event.
///
/// An event, not an interval: the staff member moves from one department to
/// another on a single date. A transfer whose departments are equal is a
/// self-transfer and is ignored by the transfer matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTransfer {
    /// Department before the move.
    pub from_department: String,
    /// Department after the move.
    pub to_department: String,
    /// Date the transfer took effect.
    pub transfer_date: NaiveDate,
}

impl DepartmentTransfer {
    /// Creates a transfer event.
    pub fn new(
        from_department: impl Into<String>,
        to_department: impl Into<String>,
        transfer_date: NaiveDate,
    ) -> Self {
        Self {
            from_department: from_department.into(),
            to_department: to_department.into(),
            transfer_date,
        }
    }

    /// Whether this is a self-transfer (`from == to`).
    #[inline]
    pub fn is_self_transfer(&self) -> bool {
        self.from_department == self.to_department
    }
}
