//! Workforce movement analytics.
//!
//! Aggregates roster events over time buckets, independently of layout:
//!
//! - [`count_movements`]: per-month join/leave/transfer series with derived
//!   net headcount growth.
//! - [`TransferMatrix`]: department × department transfer counts for a
//!   window.
//!
//! Both are pure derivations from a roster snapshot and a window; neither
//! holds state between calls.

mod matrix;
mod movements;

pub use matrix::TransferMatrix;
pub use movements::{count_movements, net_growth, MonthlyMovement};
