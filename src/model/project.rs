//! Project and event records.

use super::identifiers::{EventId, ProjectId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A project with an ordered list of schedule events.
///
/// Event order is insertion order and doubles as display order; the
/// chart never sorts by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable project identifier.
    pub id: ProjectId,
    /// Project title shown in the list screen.
    pub title: String,
    /// Name of the responsible project manager.
    pub manager: String,
    /// Schedule events, in display order.
    pub events: Vec<Event>,
}

impl Project {
    /// Create a project with a fresh id.
    pub fn new(title: impl Into<String>, manager: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            id: ProjectId::generate(),
            title: title.into(),
            manager: manager.into(),
            events,
        }
    }

    /// Replace the event with a matching id, or append when no event
    /// matches. Last write wins; order of existing events is preserved.
    pub fn upsert_event(&mut self, event: Event) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => *slot = event,
            None => self.events.push(event),
        }
    }

    /// Earliest start date across all events, if any.
    pub fn earliest_start(&self) -> Option<NaiveDate> {
        self.events.iter().map(|e| e.start_date).min()
    }
}

/// One schedule event: a planned date range with a completion fraction.
///
/// `progress` is stored exactly as entered. Values outside [0,1] and
/// inverted date ranges are tolerated here and clamped by the layout
/// engine when geometry is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable event identifier, preserved across edits.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Completion fraction, nominally in [0, 1].
    pub progress: f64,
    /// Planned start date.
    pub start_date: NaiveDate,
    /// Planned end date.
    pub end_date: NaiveDate,
    /// Person or team responsible for the event.
    pub responsible: String,
}
