//! Layout dimension constants for TUI rendering.
//!
//! The layout engine works in abstract pixels; these constants define
//! how the renderer maps pixels onto terminal cells.

/// Horizontal pixels per terminal cell.
///
/// At the default 4 px/day scale, one cell shows one day.
pub const PX_PER_CELL_X: f64 = 4.0;

/// Vertical pixels per terminal line.
///
/// A default 60 px row maps to two lines: one for the bar, one for the
/// separator under it.
pub const PX_PER_CELL_Y: f64 = 30.0;

/// Width of the event info column on the expanded chart, in cells.
pub const INFO_COLUMN_WIDTH: u16 = 24;

/// Height of the calendar axis (year labels + month labels), in lines.
pub const AXIS_HEIGHT: u16 = 2;

/// Height of the header bar, in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar, in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the editor modal as a percentage of the screen.
pub const EDITOR_WIDTH_PERCENT: u16 = 60;

/// Height of the editor modal in lines (5 fields + error + hint + border).
pub const EDITOR_HEIGHT: u16 = 11;
