//! Timeline layout and workforce movement analytics.
//!
//! Converts staff/project assignment intervals into pixel-space geometry
//! for calendar-grid (Gantt) rendering, and aggregates the same interval
//! data into monthly movement series and department transfer matrices.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `StaffAssignment`, `ProjectAssignment`,
//!   `DepartmentTransfer`, `TimeWindow`, `MonthBucket`
//! - **`layout`**: Month scale, interval→pixel mapping, overlap stacking,
//!   row composition
//! - **`analytics`**: Monthly join/leave/transfer counts and department
//!   transfer matrices
//! - **`filter`**: Roster filtering and projection
//! - **`validation`**: Roster integrity checks (duplicate IDs, inverted
//!   intervals, workload ranges)
//!
//! # Architecture
//!
//! Data flows one way: roster → `filter` → `layout` → pixel geometry, and
//! independently roster → `analytics` → time series and matrices. Every
//! public operation is a synchronous pure transform of an immutable
//! snapshot (no I/O, no shared state between calls), so callers may
//! recompute on every render and rely on identical inputs producing
//! identical results.
//!
//! Rosters typically arrive as JSON from an HR/PM backend; dates cross the
//! boundary as ISO-8601 `YYYY-MM-DD` strings and parse failures surface as
//! [`TimelineError::InvalidDate`] before any pixel arithmetic runs.

pub mod analytics;
pub mod error;
pub mod filter;
pub mod layout;
pub mod models;
pub mod validation;

pub use error::TimelineError;
