//! ganttview
//!
//! TUI application for viewing project schedules as Gantt charts.
//!
//! The crate follows a Pure Core / Impure Shell architecture: the
//! [`layout`] engine and [`state`] machine are pure and fully testable
//! without a terminal, while [`view`] owns the terminal and event loop.

pub mod config;
pub mod editor;
pub mod layout;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
