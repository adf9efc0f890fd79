//! Calendar axis tick generation.
//!
//! Walks day-by-day from the base date over the configured window and
//! emits a tick at every month start, flagging year boundaries for bold
//! rendering. The walk is a plain iterator over its inputs: finite,
//! lazy, and restartable (a second iteration yields the same ticks).

use super::engine::day_offset;
use chrono::{Datelike, Months, NaiveDate};

/// One axis tick: a gridline position with its calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    /// Calendar date of the tick.
    pub date: NaiveDate,
    /// Horizontal offset in px (`day_offset * day_width`).
    pub x: f64,
    /// True when this tick starts a new calendar year (rendered bold).
    pub year_boundary: bool,
}

/// Iterator over the ticks of one calendar window.
///
/// Construct with [`axis_ticks`]. A tick is emitted when the month
/// changes (day == 1) and additionally at the base date itself when the
/// window opens mid-month, so the first year label is never lost.
#[derive(Debug, Clone)]
pub struct AxisTicks {
    cursor: Option<NaiveDate>,
    end: NaiveDate,
    day_width: f64,
    base: NaiveDate,
    last_year: Option<i32>,
}

impl Iterator for AxisTicks {
    type Item = AxisTick;

    fn next(&mut self) -> Option<AxisTick> {
        loop {
            let date = self.cursor?;
            if date > self.end {
                self.cursor = None;
                return None;
            }
            self.cursor = date.succ_opt();

            let year_boundary = self.last_year != Some(date.year());
            if year_boundary {
                self.last_year = Some(date.year());
            }
            if date.day() == 1 || year_boundary {
                return Some(AxisTick {
                    date,
                    x: day_offset(date, self.base) as f64 * self.day_width,
                    year_boundary,
                });
            }
        }
    }
}

/// Ticks for a window of `window_years` years starting at `base`, inclusive
/// of the window's end date.
///
/// A negative `window_years` is clamped to zero; a zero-length window
/// still emits the tick at `base`.
pub fn axis_ticks(base: NaiveDate, window_years: i32, day_width: f64) -> AxisTicks {
    let years = window_years.max(0) as u32;
    let end = base
        .checked_add_months(Months::new(years * 12))
        .unwrap_or(base);
    AxisTicks {
        cursor: Some(base),
        end,
        day_width,
        base,
        last_year: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn two_year_window_from_january_first() {
        let ticks: Vec<AxisTick> = axis_ticks(date(2024, 1, 1), 2, 4.0).collect();

        // One tick per month start: 12 + 12 + the inclusive 2026-01-01
        assert_eq!(ticks.len(), 25);

        let years: Vec<&AxisTick> = ticks.iter().filter(|t| t.year_boundary).collect();
        assert_eq!(years.len(), 3);
        assert_eq!(years[0].date, date(2024, 1, 1));
        assert_eq!(years[1].date, date(2025, 1, 1));
        assert_eq!(years[2].date, date(2026, 1, 1));
    }

    #[test]
    fn tick_positions_follow_day_offsets() {
        let ticks: Vec<AxisTick> = axis_ticks(date(2024, 1, 1), 1, 4.0).collect();
        assert_eq!(ticks[0].x, 0.0);
        assert_eq!(ticks[1].date, date(2024, 2, 1));
        assert_eq!(ticks[1].x, 31.0 * 4.0);
        assert_eq!(ticks[2].date, date(2024, 3, 1));
        assert_eq!(ticks[2].x, (31.0 + 29.0) * 4.0); // leap February
    }

    #[test]
    fn mid_month_base_still_emits_its_year() {
        let ticks: Vec<AxisTick> = axis_ticks(date(2024, 3, 15), 1, 4.0).collect();

        // First tick is the base itself, flagged as a year boundary
        assert_eq!(ticks[0].date, date(2024, 3, 15));
        assert!(ticks[0].year_boundary);
        // Next tick is the following month start, not flagged
        assert_eq!(ticks[1].date, date(2024, 4, 1));
        assert!(!ticks[1].year_boundary);
        // 2025 boundary appears exactly once
        let boundaries: Vec<&AxisTick> = ticks.iter().filter(|t| t.year_boundary).collect();
        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries[1].date, date(2025, 1, 1));
    }

    #[test]
    fn zero_length_window_emits_base_tick_only() {
        let ticks: Vec<AxisTick> = axis_ticks(date(2024, 6, 10), 0, 4.0).collect();
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].date, date(2024, 6, 10));
        assert!(ticks[0].year_boundary);
    }

    #[test]
    fn negative_window_clamps_to_zero() {
        let ticks: Vec<AxisTick> = axis_ticks(date(2024, 6, 10), -3, 4.0).collect();
        assert_eq!(ticks.len(), 1);
    }

    #[test]
    fn iteration_is_restartable() {
        let iter = axis_ticks(date(2024, 1, 1), 2, 4.0);
        let first: Vec<AxisTick> = iter.clone().collect();
        let second: Vec<AxisTick> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn ticks_are_strictly_increasing_in_x() {
        let ticks: Vec<AxisTick> = axis_ticks(date(2024, 1, 1), 2, 4.0).collect();
        for pair in ticks.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }
}
