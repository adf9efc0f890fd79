//! UI state machine (pure).
//!
//! All state transitions are pure methods testable without a terminal.

pub mod app_state;
pub mod editor_form;

pub use app_state::{AppState, DetailLevel, Screen};
pub use editor_form::{EditorField, EditorForm};
