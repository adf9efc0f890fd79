//! Application state and transitions.

use super::editor_form::EditorForm;
use crate::model::{KeyAction, Project};
use tracing::{debug, info};

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The project list.
    #[default]
    ProjectList,
    /// The Gantt chart of the selected project.
    Gantt,
}

/// Chart detail level.
///
/// An explicit two-variant state in place of a scattered visibility
/// boolean. Expanded shows the event info column and per-bar date
/// labels; Collapsed shows compact bars only. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    /// Compact bars only.
    Collapsed,
    /// Info column and date labels visible.
    #[default]
    Expanded,
}

impl DetailLevel {
    /// Flip between the two levels.
    pub fn toggle(self) -> Self {
        match self {
            DetailLevel::Collapsed => DetailLevel::Expanded,
            DetailLevel::Expanded => DetailLevel::Collapsed,
        }
    }
}

/// Complete UI state.
///
/// Owns the in-memory project list (the single logical writer is the
/// event loop thread) and every piece of navigation state. Transitions
/// are pure methods so the whole machine is testable without a terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// All loaded projects, in source order.
    pub projects: Vec<Project>,
    /// Selected row in the project list.
    pub selected_project: usize,
    /// Selected event row on the chart screen.
    pub selected_event: usize,
    /// Current screen.
    pub screen: Screen,
    /// Chart detail level.
    pub detail: DetailLevel,
    /// Horizontal chart scroll in terminal cells.
    pub h_scroll: u16,
    /// Open editor modal, if any.
    pub editor: Option<EditorForm>,
}

/// Horizontal scroll step in cells.
const SCROLL_STEP: u16 = 8;

impl AppState {
    /// Fresh state over a loaded project list.
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            selected_project: 0,
            selected_event: 0,
            screen: Screen::ProjectList,
            detail: DetailLevel::default(),
            h_scroll: 0,
            editor: None,
        }
    }

    /// The project whose chart is (or would be) displayed.
    pub fn current_project(&self) -> Option<&Project> {
        self.projects.get(self.selected_project)
    }

    /// Apply a normal-mode action. Returns `true` when the app should quit.
    ///
    /// Editor-mode input does not come through here; the view routes
    /// keystrokes into the open [`EditorForm`] directly.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        debug!(?action, screen = ?self.screen, "handling action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::SelectPrev => self.select_prev(),
            KeyAction::SelectNext => self.select_next(),
            KeyAction::Open => self.open_selected(),
            KeyAction::Back => self.back(),
            KeyAction::ScrollLeft => self.h_scroll = self.h_scroll.saturating_sub(SCROLL_STEP),
            KeyAction::ScrollRight => self.h_scroll = self.h_scroll.saturating_add(SCROLL_STEP),
            KeyAction::ToggleDetail => {
                if self.screen == Screen::Gantt {
                    self.detail = self.detail.toggle();
                }
            }
            KeyAction::NewEvent => {
                if self.screen == Screen::Gantt {
                    self.editor = Some(EditorForm::new_event());
                }
            }
            KeyAction::EditEvent => self.open_edit_editor(),
        }
        false
    }

    /// Validate the open editor and commit on success.
    ///
    /// On success the event replaces its predecessor in place (matched
    /// by id, last write wins) or is appended when creating, and the
    /// editor closes. On failure the editor stays open with the error
    /// attached and nothing is saved.
    pub fn save_editor(&mut self) {
        let Some(form) = self.editor.as_mut() else {
            return;
        };
        match form.draft.validate() {
            Ok(validated) => {
                let event = validated.into_event(form.editing);
                let id = event.id;
                if let Some(project) = self.projects.get_mut(self.selected_project) {
                    project.upsert_event(event);
                    info!(%id, project = %project.title, "event saved");
                }
                self.editor = None;
            }
            Err(err) => {
                debug!(%err, "editor input rejected");
                form.error = Some(err);
            }
        }
    }

    /// Dismiss the editor without saving.
    pub fn cancel_editor(&mut self) {
        self.editor = None;
    }

    fn select_prev(&mut self) {
        match self.screen {
            Screen::ProjectList => {
                self.selected_project = self.selected_project.saturating_sub(1);
            }
            Screen::Gantt => {
                self.selected_event = self.selected_event.saturating_sub(1);
            }
        }
    }

    fn select_next(&mut self) {
        match self.screen {
            Screen::ProjectList => {
                let max = self.projects.len().saturating_sub(1);
                self.selected_project = (self.selected_project + 1).min(max);
            }
            Screen::Gantt => {
                let max = self
                    .current_project()
                    .map(|p| p.events.len().saturating_sub(1))
                    .unwrap_or(0);
                self.selected_event = (self.selected_event + 1).min(max);
            }
        }
    }

    fn open_selected(&mut self) {
        if self.screen == Screen::ProjectList && !self.projects.is_empty() {
            self.screen = Screen::Gantt;
            self.selected_event = 0;
            self.h_scroll = 0;
        }
    }

    fn back(&mut self) {
        if self.screen == Screen::Gantt {
            self.screen = Screen::ProjectList;
        }
    }

    fn open_edit_editor(&mut self) {
        if self.screen != Screen::Gantt {
            return;
        }
        let event = self
            .current_project()
            .and_then(|p| p.events.get(self.selected_event));
        if let Some(event) = event {
            self.editor = Some(EditorForm::edit_event(event));
        }
    }
}
