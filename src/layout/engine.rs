//! Bar and marker geometry.
//!
//! Every function here is total: inverted date ranges clamp to zero
//! duration and out-of-range progress clamps to [0, 1], so whatever the
//! model stores, the result is drawable.

use super::types::{GanttRow, LayoutParams, Progress, LABEL_GAP};
use crate::model::Event;
use chrono::NaiveDate;

/// Whole calendar-day difference from `base` to `date`, signed.
///
/// Uses calendar-day arithmetic (`NaiveDate`), not wall-clock durations,
/// so the result is stable across daylight-saving shifts.
pub fn day_offset(date: NaiveDate, base: NaiveDate) -> i64 {
    date.signed_duration_since(base).num_days()
}

/// Planned duration in whole days, clamped to zero for inverted ranges.
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    day_offset(end, start).max(0)
}

/// Compute the geometry for one event row.
///
/// Rows stack in list order: `index` alone determines the vertical
/// position. The date label anchors a fixed gap right of the plan bar.
pub fn layout_row(event: &Event, index: usize, params: &LayoutParams) -> GanttRow {
    let start_days = day_offset(event.start_date, params.base_date);
    let duration = duration_days(event.start_date, event.end_date);

    let x = start_days as f64 * params.day_width;
    let plan_width = duration as f64 * params.day_width;
    let progress_width = plan_width * Progress::clamped(event.progress).get();

    let padding = (params.row_height - params.bar_height) / 2.0;
    let y = index as f64 * params.row_height + padding;

    GanttRow {
        index,
        x,
        y,
        plan_width,
        progress_width,
        bar_height: params.bar_height,
        label_x: x + plan_width + LABEL_GAP,
        separator_y: (index + 1) as f64 * params.row_height - 1.0,
    }
}

/// Lay out every event of a project in display order.
pub fn layout_rows(events: &[Event], params: &LayoutParams) -> Vec<GanttRow> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| layout_row(event, index, params))
        .collect()
}

/// X offset of the today-marker line.
///
/// Same arithmetic as the bars; a `today` before the base date yields a
/// negative offset and the renderer decides whether to draw it.
pub fn today_marker_offset(base: NaiveDate, today: NaiveDate, day_width: f64) -> f64 {
    day_offset(today, base) as f64 * day_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(start: NaiveDate, end: NaiveDate, progress: f64) -> Event {
        Event {
            id: EventId::generate(),
            title: "Procurement".to_string(),
            progress,
            start_date: start,
            end_date: end,
            responsible: "Supply".to_string(),
        }
    }

    fn params() -> LayoutParams {
        LayoutParams::with_base(date(2024, 1, 1))
    }

    #[test]
    fn day_offset_is_signed() {
        let base = date(2024, 1, 1);
        assert_eq!(day_offset(date(2024, 1, 10), base), 9);
        assert_eq!(day_offset(base, base), 0);
        assert_eq!(day_offset(date(2023, 12, 31), base), -1);
    }

    #[test]
    fn day_offset_spans_leap_day() {
        // 2024 is a leap year: Jan 1 -> Mar 1 is 31 + 29 days
        assert_eq!(day_offset(date(2024, 3, 1), date(2024, 1, 1)), 60);
    }

    #[test]
    fn duration_clamps_inverted_range_to_zero() {
        assert_eq!(duration_days(date(2024, 1, 25), date(2024, 1, 10)), 0);
        assert_eq!(duration_days(date(2024, 1, 10), date(2024, 1, 10)), 0);
        assert_eq!(duration_days(date(2024, 1, 10), date(2024, 1, 25)), 15);
    }

    #[test]
    fn reference_row_geometry() {
        // 15 days at 4 px/day, 40% complete
        let e = event(date(2024, 1, 10), date(2024, 1, 25), 0.4);
        let row = layout_row(&e, 0, &params());

        assert_eq!(row.x, 36.0); // 9 days from base
        assert_eq!(row.plan_width, 60.0);
        assert_eq!(row.progress_width, 24.0);
        assert_eq!(row.y, 20.0); // (60 - 20) / 2
        assert_eq!(row.bar_height, 20.0);
        assert_eq!(row.label_x, 36.0 + 60.0 + 8.0);
        assert_eq!(row.separator_y, 59.0);
    }

    #[test]
    fn out_of_range_progress_caps_at_plan_width() {
        let e = event(date(2024, 1, 10), date(2024, 1, 25), 1.2);
        let row = layout_row(&e, 0, &params());
        assert_eq!(row.progress_width, row.plan_width);

        let e = event(date(2024, 1, 10), date(2024, 1, 25), -0.3);
        let row = layout_row(&e, 0, &params());
        assert_eq!(row.progress_width, 0.0);
    }

    #[test]
    fn inverted_range_yields_zero_width_bar() {
        let e = event(date(2024, 2, 1), date(2024, 1, 1), 0.5);
        let row = layout_row(&e, 0, &params());
        assert_eq!(row.plan_width, 0.0);
        assert_eq!(row.progress_width, 0.0);
        // Label still anchors just right of the (empty) bar
        assert_eq!(row.label_x, row.x + 8.0);
    }

    #[test]
    fn rows_stack_by_index() {
        let events = vec![
            event(date(2024, 1, 1), date(2024, 1, 15), 0.8),
            event(date(2024, 1, 10), date(2024, 1, 25), 0.4),
            event(date(2024, 1, 10), date(2024, 12, 25), 0.6),
        ];
        let rows = layout_rows(&events, &params());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].y, 20.0);
        assert_eq!(rows[1].y, 80.0);
        assert_eq!(rows[2].y, 140.0);
        assert_eq!(rows[2].separator_y, 179.0);
        // List order, not date order
        assert!(rows[1].x > rows[0].x);
    }

    #[test]
    fn event_before_base_gets_negative_x_not_a_panic() {
        let e = event(date(2023, 12, 1), date(2024, 1, 5), 0.5);
        let row = layout_row(&e, 0, &params());
        assert!(row.x < 0.0);
        assert!(row.plan_width > 0.0);
    }

    #[test]
    fn today_marker_before_base_is_negative() {
        let base = date(2024, 1, 1);
        assert_eq!(today_marker_offset(base, date(2023, 12, 30), 4.0), -8.0);
        assert_eq!(today_marker_offset(base, date(2024, 1, 11), 4.0), 40.0);
        assert_eq!(today_marker_offset(base, base, 4.0), 0.0);
    }

    #[test]
    fn layout_is_deterministic() {
        let e = event(date(2024, 1, 10), date(2024, 1, 25), 0.4);
        let p = params();
        assert_eq!(layout_row(&e, 3, &p), layout_row(&e, 3, &p));
    }
}
