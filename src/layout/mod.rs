//! Timeline layout: month scales, pixel mapping, and bar stacking.
//!
//! Composes the three layout stages over a roster:
//!
//! 1. [`month_scale`]: enumerate the month buckets the window spans.
//! 2. [`map_to_pixels`]: map each project interval onto offset/width.
//! 3. [`assign_slots`]: pick a vertical slot per bar within its row.
//!
//! [`layout_row`] and [`layout_roster`] run stages 2-3 for one person / the
//! whole roster. Everything is a pure transform; callers re-invoke on every
//! render with an explicit snapshot and get identical results for identical
//! inputs.

mod position;
mod scale;
mod stack;

pub use position::{
    map_to_pixels, months_between, BarGeometry, LayoutConfig, DAYS_PER_MONTH,
    DEFAULT_MIN_BAR_PX, DEFAULT_MONTH_PX,
};
pub use scale::{month_scale, month_scale_between};
pub use stack::{assign_slots, StackPolicy};

use log::debug;

use crate::error::TimelineError;
use crate::models::{ProjectAssignment, StaffAssignment, TimeWindow};

/// One project bar placed in pixel space.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PositionedBar {
    /// ID of the project this bar renders.
    pub project_id: String,
    /// Horizontal pixel extent.
    pub geometry: BarGeometry,
    /// Vertical slot within the row (0 = top).
    pub slot: usize,
}

/// All bars for one staff member's row.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RowLayout {
    /// Staff member the row belongs to.
    pub staff_id: String,
    /// Bars in the same order as the staff member's project list.
    pub bars: Vec<PositionedBar>,
}

/// Lays out one person's projects: pixel geometry plus vertical slots.
///
/// Bars come back in project-list order. An empty project list yields an
/// empty bar list, not an error.
pub fn layout_row(
    projects: &[ProjectAssignment],
    window: &TimeWindow,
    config: &LayoutConfig,
) -> Result<Vec<PositionedBar>, TimelineError> {
    config.validate()?;

    let slots = assign_slots(projects, config.stack_policy);
    projects
        .iter()
        .zip(slots)
        .map(|(project, slot)| {
            map_to_pixels(project.start_date, project.end_date, window, config).map(|geometry| {
                PositionedBar {
                    project_id: project.project_id.clone(),
                    geometry,
                    slot,
                }
            })
        })
        .collect()
}

/// Lays out a whole roster, one row per staff member.
///
/// Every staff member gets a row, including those with no projects; rows
/// represent people, not bars.
pub fn layout_roster(
    staff: &[StaffAssignment],
    window: &TimeWindow,
    config: &LayoutConfig,
) -> Result<Vec<RowLayout>, TimelineError> {
    config.validate()?;

    let rows: Result<Vec<RowLayout>, TimelineError> = staff
        .iter()
        .map(|member| {
            layout_row(&member.projects, window, config).map(|bars| RowLayout {
                staff_id: member.id.clone(),
                bars,
            })
        })
        .collect();

    if let Ok(rows) = &rows {
        debug!(
            "event=layout_roster module=layout rows={} window={}..{} zoom={}",
            rows.len(),
            window.start,
            window.end,
            config.zoom
        );
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;

    fn date(s: &str) -> chrono::NaiveDate {
        crate::models::parse_iso_date(s).unwrap()
    }

    fn sample_staff() -> Vec<StaffAssignment> {
        vec![
            StaffAssignment::new("1", date("2022-04-01"))
                .with_name("Kim")
                .with_department("Tech")
                .with_project(
                    ProjectAssignment::new("P1", date("2024-01-01"), date("2024-06-30"))
                        .with_workload(55.0),
                ),
            StaffAssignment::new("2", date("2023-01-09"))
                .with_name("Lee")
                .with_department("Product"), // no projects
        ]
    }

    fn year_2024() -> TimeWindow {
        TimeWindow::from_iso("2024-01-01", "2024-12-31").unwrap()
    }

    #[test]
    fn test_roster_scenario_geometry() {
        let rows = layout_roster(&sample_staff(), &year_2024(), &LayoutConfig::new()).unwrap();

        assert_eq!(rows.len(), 2);
        let bar = &rows[0].bars[0];
        assert_eq!(bar.project_id, "P1");
        assert!((bar.geometry.offset_px - 0.0).abs() < 1e-9);
        // Jan 1 → Jun 30 is 181 days ≈ 6.03 thirty-day months at 80 px each.
        // The 30-day approximation puts the bar within a few pixels of six
        // calendar months, so assert against the formula, not a round value.
        let expected = 181.0 / DAYS_PER_MONTH * DEFAULT_MONTH_PX;
        assert!((bar.geometry.width_px - expected).abs() < 1e-9);
        assert!((bar.geometry.width_px - 480.0).abs() < 5.0);
    }

    #[test]
    fn test_roster_keeps_projectless_rows() {
        let rows = layout_roster(&sample_staff(), &year_2024(), &LayoutConfig::new()).unwrap();
        assert_eq!(rows[1].staff_id, "2");
        assert!(rows[1].bars.is_empty());
    }

    #[test]
    fn test_row_slot_assignment_follows_policy() {
        let projects = vec![
            ProjectAssignment::new("A", date("2024-01-01"), date("2024-03-31")),
            ProjectAssignment::new("B", date("2024-06-01"), date("2024-08-31")),
        ];
        let window = year_2024();

        let ordered = layout_row(&projects, &window, &LayoutConfig::new()).unwrap();
        assert_eq!(ordered[0].slot, 0);
        assert_eq!(ordered[1].slot, 1);

        let compact = layout_row(
            &projects,
            &window,
            &LayoutConfig::new().with_stack_policy(StackPolicy::Compact),
        )
        .unwrap();
        assert_eq!(compact[0].slot, 0);
        assert_eq!(compact[1].slot, 0);
    }

    #[test]
    fn test_invalid_zoom_propagates() {
        let result = layout_roster(
            &sample_staff(),
            &year_2024(),
            &LayoutConfig::new().with_zoom(0.0),
        );
        assert!(matches!(result, Err(TimelineError::InvalidZoom(_))));
    }

    #[test]
    fn test_layout_ignores_status() {
        // status filtering belongs to the filter layer, not layout
        let projects = vec![
            ProjectAssignment::new("done", date("2024-01-01"), date("2024-02-01"))
                .with_status(ProjectStatus::Completed),
        ];
        let bars = layout_row(&projects, &year_2024(), &LayoutConfig::new()).unwrap();
        assert_eq!(bars.len(), 1);
    }

    #[test]
    fn test_roster_layout_idempotent() {
        let staff = sample_staff();
        let window = year_2024();
        let config = LayoutConfig::new().with_zoom(1.5);
        assert_eq!(
            layout_roster(&staff, &window, &config).unwrap(),
            layout_roster(&staff, &window, &config).unwrap()
        );
    }
}
