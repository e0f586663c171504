//! Domain models for the timeline engine.
//!
//! Provides the read-only input records (staff, projects, transfers) and
//! the calendar scaffolding (time windows, month buckets) that layout and
//! analytics operate on. All types are plain serde data: rosters typically
//! arrive as JSON from an HR/PM backend and are never mutated by the engine.
//!
//! # Entity Relationships
//!
//! | Entity | Cardinality | Notes |
//! |--------|-------------|-------|
//! | `StaffAssignment` | 1 per person | owns projects and transfers |
//! | `ProjectAssignment` | n per person | `[start_date, end_date]` interval |
//! | `DepartmentTransfer` | n per person | a dated event, not an interval |
//! | `TimeWindow` | 1 per query | scopes every layout/aggregation call |
//! | `MonthBucket` | derived | half-open calendar month |

mod project;
mod staff;
mod transfer;
mod window;

pub use project::{ProjectAssignment, ProjectStatus};
pub use staff::StaffAssignment;
pub use transfer::DepartmentTransfer;
pub use window::{parse_iso_date, MonthBucket, TimeWindow};
