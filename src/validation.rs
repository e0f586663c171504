//! Roster integrity checks.
//!
//! Checks structural integrity of a roster snapshot before layout or
//! aggregation. Detects:
//! - Duplicate staff IDs
//! - Duplicate project IDs within one staff member
//! - Inverted project intervals (`start_date > end_date`)
//! - Workload outside [0, 100]
//! - `leave_date` before `join_date`
//! - Self-transfers (`from == to`)
//! - Transfers out of chronological order
//!
//! Validation reports every finding and never mutates or rejects the data:
//! layout and analytics still accept an unvalidated roster and clamp
//! degenerate intervals to minimum-width bars instead of failing mid-render.

use std::collections::HashSet;

use crate::models::StaffAssignment;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A project interval ends before it starts.
    InvertedInterval,
    /// A workload value lies outside [0, 100].
    WorkloadOutOfRange,
    /// A leave date precedes the join date.
    LeaveBeforeJoin,
    /// A transfer's departments are equal.
    SelfTransfer,
    /// A staff member's transfers are not in chronological order.
    UnorderedTransfers,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster snapshot.
///
/// Collects all detected issues rather than stopping at the first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_roster(staff: &[StaffAssignment]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut staff_ids = HashSet::new();
    for member in staff {
        if !staff_ids.insert(member.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", member.id),
            ));
        }

        if let Some(leave) = member.leave_date {
            if leave < member.join_date {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LeaveBeforeJoin,
                    format!(
                        "Staff '{}' leaves {} before joining {}",
                        member.id, leave, member.join_date
                    ),
                ));
            }
        }

        // project IDs repeat across staff (shared projects); only duplicates
        // within one person's list are suspect
        let mut project_ids = HashSet::new();
        for project in &member.projects {
            if !project_ids.insert(project.project_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!(
                        "Staff '{}' has duplicate project ID: {}",
                        member.id, project.project_id
                    ),
                ));
            }

            if project.start_date > project.end_date {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedInterval,
                    format!(
                        "Project '{}' of staff '{}' ends {} before starting {}",
                        project.project_id, member.id, project.end_date, project.start_date
                    ),
                ));
            }

            if !(0.0..=100.0).contains(&project.workload) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::WorkloadOutOfRange,
                    format!(
                        "Project '{}' of staff '{}' has workload {} outside [0, 100]",
                        project.project_id, member.id, project.workload
                    ),
                ));
            }
        }

        for transfer in &member.transfers {
            if transfer.is_self_transfer() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfTransfer,
                    format!(
                        "Staff '{}' has a self-transfer within '{}' on {}",
                        member.id, transfer.from_department, transfer.transfer_date
                    ),
                ));
            }
        }

        let ordered = member
            .transfers
            .windows(2)
            .all(|pair| pair[0].transfer_date <= pair[1].transfer_date);
        if !ordered {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnorderedTransfers,
                format!(
                    "Staff '{}' has transfers out of chronological order",
                    member.id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
