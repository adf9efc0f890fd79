//! Geometry value types for the layout engine.

use chrono::NaiveDate;

/// Horizontal gap between a plan bar's right edge and its date label, in px.
///
/// The label column starts here so it never collides with the bar; label
/// width is fixed by the renderer, so `bar_end + LABEL_GAP` is the only
/// placement rule needed.
pub const LABEL_GAP: f64 = 8.0;

/// Scale and dimension parameters for one chart.
///
/// Defaults mirror the reference chart: 4 px per day, 60 px rows with a
/// 20 px bar vertically centered in each row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Calendar-axis origin; all day offsets are measured from here.
    pub base_date: NaiveDate,
    /// Pixels per calendar day (linear scale, no zoom compression).
    pub day_width: f64,
    /// Vertical extent of one event row in px.
    pub row_height: f64,
    /// Height of the plan/progress bars in px; must not exceed `row_height`.
    pub bar_height: f64,
}

impl LayoutParams {
    /// Default pixel dimensions with the given axis origin.
    pub fn with_base(base_date: NaiveDate) -> Self {
        Self {
            base_date,
            day_width: 4.0,
            row_height: 60.0,
            bar_height: 20.0,
        }
    }
}

/// Completion fraction clamped to [0, 1].
///
/// The model stores progress raw; this newtype is the engine's clamp
/// point, so a stored 1.2 degrades to a full-width bar instead of a
/// progress bar wider than its plan bar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Clamp an arbitrary fraction into [0, 1]. NaN clamps to 0.
    pub fn clamped(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(0.0);
        }
        Self(raw.clamp(0.0, 1.0))
    }

    /// The clamped fraction.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Drawable geometry for one event row, in px.
///
/// Derived, never persisted. The progress bar shares the plan bar's
/// origin and height and is never wider than the plan bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GanttRow {
    /// Row index in display order (0-based).
    pub index: usize,
    /// Left edge of the plan bar. Negative when the event starts before
    /// the base date; the renderer clips.
    pub x: f64,
    /// Top edge of both bars (row top plus centering padding).
    pub y: f64,
    /// Width of the plan bar; zero for inverted date ranges.
    pub plan_width: f64,
    /// Width of the progress overlay; `<= plan_width` always.
    pub progress_width: f64,
    /// Height of both bars.
    pub bar_height: f64,
    /// Left edge of the date label, just right of the plan bar.
    pub label_x: f64,
    /// Y of the separator line under this row.
    pub separator_y: f64,
}
