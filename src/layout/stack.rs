//! Vertical slot assignment for bars sharing one row.
//!
//! A person's projects render in a single horizontal row; overlapping
//! intervals need distinct vertical slots so the bars do not collide.
//!
//! # Policies
//!
//! Two policies exist and are never blended:
//!
//! - [`StackPolicy::InsertionOrder`] (default): slot = position index in the
//!   input list. Overlap is not inspected at all, so reordered but
//!   non-overlapping projects still occupy distinct slots. Bar positions
//!   stay stable as list order changes, at the cost of wasted rows.
//! - [`StackPolicy::Compact`]: greedy interval-graph coloring: process
//!   intervals in start-date order and assign the lowest slot whose previous
//!   occupant ended before the new start. Greedy coloring in start order is
//!   optimal on interval graphs, so this uses the fewest slots possible.
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ProjectAssignment;

/// How bars in one row are assigned vertical slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackPolicy {
    /// Slot = index in the input list (no overlap analysis).
    #[default]
    InsertionOrder,
    /// Greedy interval coloring: lowest free slot in start-date order.
    Compact,
}

/// Assigns a vertical slot to each project, returned in input order.
///
/// The result always has one entry per input project; `result[i]` is the
/// slot for `projects[i]`. Deterministic for identical inputs under both
/// policies (Compact breaks start-date ties by end date, then input index).
pub fn assign_slots(projects: &[ProjectAssignment], policy: StackPolicy) -> Vec<usize> {
    match policy {
        StackPolicy::InsertionOrder => (0..projects.len()).collect(),
        StackPolicy::Compact => compact_slots(projects),
    }
}

fn compact_slots(projects: &[ProjectAssignment]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..projects.len()).collect();
    order.sort_by(|&a, &b| {
        projects[a]
            .start_date
            .cmp(&projects[b].start_date)
            .then_with(|| projects[a].end_date.cmp(&projects[b].end_date))
            .then_with(|| a.cmp(&b))
    });

    let mut slots = vec![0usize; projects.len()];
    // last occupied day per slot; a slot is free once its occupant ends
    // strictly before the next interval starts (end dates are inclusive)
    let mut slot_ends: Vec<NaiveDate> = Vec::new();

    for &i in &order {
        let project = &projects[i];
        match slot_ends
            .iter()
            .position(|&end| end < project.start_date)
        {
            Some(slot) => {
                slot_ends[slot] = project.end_date;
                slots[i] = slot;
            }
            None => {
                slot_ends.push(project.end_date);
                slots[i] = slot_ends.len() - 1;
            }
        }
    }

    slots
}
