//! Domain model types (pure).
//!
//! All types in this module are plain data. Identifiers are uuid-backed
//! newtypes; `Project` and `Event` carry exactly what the JSON project
//! file format stores. Range invariants (progress in [0,1], start <= end)
//! are deliberately NOT enforced here; the layout engine clamps at
//! render time so stored data always produces drawable geometry.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod project;

pub use error::{AppError, LoadError, ValidationError};
pub use identifiers::{EventId, ProjectId};
pub use key_action::KeyAction;
pub use project::{Event, Project};
