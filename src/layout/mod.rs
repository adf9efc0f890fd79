//! Timeline layout engine (pure).
//!
//! Maps a project's event list and a calendar window onto drawable
//! geometry: bar rectangles, axis ticks, and the today-marker offset.
//! All positions are deterministic functions of calendar-day deltas
//! times a linear pixels-per-day scale, so tests over fixed dates are
//! exact. No I/O, no shared state; functions here never panic and never
//! error; out-of-domain input is clamped to the nearest valid value.

pub mod axis;
pub mod engine;
pub mod types;

pub use axis::{axis_ticks, AxisTick, AxisTicks};
pub use engine::{day_offset, duration_days, layout_row, layout_rows, today_marker_offset};
pub use types::{GanttRow, LayoutParams, Progress};
