//! Modal editor form state.

use crate::editor::EventDraft;
use crate::model::{Event, EventId, ValidationError};

/// Which form field currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    /// Event title.
    Title,
    /// Completion fraction.
    Progress,
    /// Planned start date.
    StartDate,
    /// Planned end date.
    EndDate,
    /// Responsible person or team.
    Responsible,
}

impl EditorField {
    /// All fields in focus-cycling order.
    pub const ALL: [EditorField; 5] = [
        EditorField::Title,
        EditorField::Progress,
        EditorField::StartDate,
        EditorField::EndDate,
        EditorField::Responsible,
    ];

    /// Human-readable label for rendering.
    pub fn label(self) -> &'static str {
        match self {
            EditorField::Title => "Title",
            EditorField::Progress => "Progress (0.0 - 1.0)",
            EditorField::StartDate => "Start date (dd.mm.yyyy)",
            EditorField::EndDate => "End date (dd.mm.yyyy)",
            EditorField::Responsible => "Responsible",
        }
    }

    /// Next field, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State of the modal event editor.
///
/// `editing` carries the id of the event being edited; `None` means the
/// save creates a new event. The last validation failure stays attached
/// to the form so the renderer can show it until the next save attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorForm {
    /// Raw field buffers.
    pub draft: EventDraft,
    /// Field receiving input.
    pub focus: EditorField,
    /// Id to preserve when editing, `None` when creating.
    pub editing: Option<EventId>,
    /// Error from the most recent rejected save, if any.
    pub error: Option<ValidationError>,
}

impl EditorForm {
    /// Blank form for creating a new event.
    pub fn new_event() -> Self {
        Self {
            draft: EventDraft::default(),
            focus: EditorField::Title,
            editing: None,
            error: None,
        }
    }

    /// Form pre-filled from an existing event.
    pub fn edit_event(event: &Event) -> Self {
        Self {
            draft: EventDraft::from_event(event),
            focus: EditorField::Title,
            editing: Some(event.id),
            error: None,
        }
    }

    /// Append a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        self.field_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Buffer contents of a given field.
    pub fn field(&self, field: EditorField) -> &str {
        match field {
            EditorField::Title => &self.draft.title,
            EditorField::Progress => &self.draft.progress,
            EditorField::StartDate => &self.draft.start_date,
            EditorField::EndDate => &self.draft.end_date,
            EditorField::Responsible => &self.draft.responsible,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            EditorField::Title => &mut self.draft.title,
            EditorField::Progress => &mut self.draft.progress,
            EditorField::StartDate => &mut self.draft.start_date,
            EditorField::EndDate => &mut self.draft.end_date,
            EditorField::Responsible => &mut self.draft.responsible,
        }
    }
}
