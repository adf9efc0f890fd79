//! Event editing collaborator.
//!
//! The editor is the validation boundary: raw form input is parsed here
//! and rejected with a [`ValidationError`] before an [`Event`] is ever
//! constructed. Saving is all-or-nothing: the first failing field
//! aborts and nothing downstream changes.
//!
//! Range problems are deliberately NOT rejected here: progress outside
//! [0, 1] and inverted date ranges are stored as entered and clamped by
//! the layout engine at render time.

use crate::model::{Event, EventId, ValidationError};
use chrono::NaiveDate;

/// Date format used for both entry and pre-fill, e.g. `25.01.2024`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Short display format for bar labels, e.g. `25.01.24`.
pub const DATE_DISPLAY_FORMAT: &str = "%d.%m.%y";

/// Raw string buffers for one event's form fields.
///
/// Everything is a string until [`EventDraft::validate`] runs, so the
/// form can hold arbitrarily malformed intermediate input while the
/// user types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// Title field contents.
    pub title: String,
    /// Progress field contents (decimal in [0, 1] expected).
    pub progress: String,
    /// Start date field contents (`dd.MM.yyyy`).
    pub start_date: String,
    /// End date field contents (`dd.MM.yyyy`).
    pub end_date: String,
    /// Responsible field contents.
    pub responsible: String,
}

impl EventDraft {
    /// Pre-fill a draft from an existing event for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            progress: format_progress(event.progress),
            start_date: event.start_date.format(DATE_FORMAT).to_string(),
            end_date: event.end_date.format(DATE_FORMAT).to_string(),
            responsible: event.responsible.clone(),
        }
    }

    /// Parse and validate every field.
    ///
    /// Returns the first error encountered in field order: title,
    /// progress, start date, end date.
    pub fn validate(&self) -> Result<ValidatedEvent, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let progress: f64 = self
            .progress
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidProgress(self.progress.clone()))?;

        let start_date = parse_date(&self.start_date, "start date")?;
        let end_date = parse_date(&self.end_date, "end date")?;

        Ok(ValidatedEvent {
            title: title.to_string(),
            progress,
            start_date,
            end_date,
            responsible: self.responsible.trim().to_string(),
        })
    }
}

/// A draft that passed validation and is ready to become an [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEvent {
    /// Non-empty, trimmed title.
    pub title: String,
    /// Parsed progress; may be outside [0, 1] (clamped at render time).
    pub progress: f64,
    /// Parsed start date.
    pub start_date: NaiveDate,
    /// Parsed end date; may precede `start_date` (clamped at render time).
    pub end_date: NaiveDate,
    /// Trimmed responsible name (may be empty).
    pub responsible: String,
}

impl ValidatedEvent {
    /// Build the event, reusing `existing` when editing so the id stays
    /// stable across the edit, or generating a fresh id when creating.
    pub fn into_event(self, existing: Option<EventId>) -> Event {
        Event {
            id: existing.unwrap_or_else(EventId::generate),
            title: self.title,
            progress: self.progress,
            start_date: self.start_date,
            end_date: self.end_date,
            responsible: self.responsible,
        }
    }
}

fn parse_date(raw: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

/// Render a progress value the way the form expects it back.
///
/// Trims a trailing `.0` so `0.5` round-trips as "0.5" and `1.0` as "1".
fn format_progress(progress: f64) -> String {
    let s = format!("{progress}");
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}
