//! Editing round-trip behavior across the editor boundary and the
//! layout engine.

use chrono::NaiveDate;
use ganttview::editor::EventDraft;
use ganttview::layout::{layout_row, LayoutParams};
use ganttview::model::{Event, EventId, KeyAction, Project};
use ganttview::state::AppState;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn params() -> LayoutParams {
    LayoutParams::with_base(date(2024, 1, 1))
}

fn procurement() -> Event {
    Event {
        id: EventId::generate(),
        title: "Procurement".to_string(),
        progress: 0.4,
        start_date: date(2024, 1, 10),
        end_date: date(2024, 1, 25),
        responsible: "Supply".to_string(),
    }
}

#[test]
fn saving_unchanged_fields_reproduces_identical_geometry() {
    let original = procurement();
    let before = layout_row(&original, 1, &params());

    // Open for editing, change nothing, save
    let draft = EventDraft::from_event(&original);
    let saved = draft.validate().unwrap().into_event(Some(original.id));

    assert_eq!(saved, original);
    let after = layout_row(&saved, 1, &params());
    assert_eq!(before, after);
}

#[test]
fn edit_through_app_state_keeps_geometry_of_untouched_fields() {
    let event = procurement();
    let id = event.id;
    let mut state = AppState::new(vec![Project::new("Site 2", "I. Petrov", vec![event])]);

    state.handle_action(KeyAction::Open);
    state.handle_action(KeyAction::EditEvent);
    {
        let form = state.editor.as_mut().unwrap();
        form.draft.title = "Procurement (phase 2)".to_string();
    }
    state.save_editor();

    let saved = &state.projects[0].events[0];
    assert_eq!(saved.id, id);
    assert_eq!(saved.title, "Procurement (phase 2)");
    // Dates and progress untouched, so the bar geometry is unchanged
    let row = layout_row(saved, 0, &params());
    assert_eq!(row.plan_width, 60.0);
    assert_eq!(row.progress_width, 24.0);
}

#[test]
fn rejected_save_leaves_project_and_geometry_untouched() {
    let event = procurement();
    let mut state = AppState::new(vec![Project::new("Site 2", "I. Petrov", vec![event.clone()])]);

    state.handle_action(KeyAction::Open);
    state.handle_action(KeyAction::EditEvent);
    {
        let form = state.editor.as_mut().unwrap();
        form.draft.start_date = "not a date".to_string();
    }
    state.save_editor();

    assert!(state.editor.as_ref().unwrap().error.is_some());
    assert_eq!(state.projects[0].events[0], event);
}

#[test]
fn out_of_range_progress_survives_the_editor_and_clamps_in_layout() {
    // A stored 1.2 must degrade to a full-width bar, not a wider one
    let mut draft = EventDraft::from_event(&procurement());
    draft.progress = "1.2".to_string();
    let event = draft.validate().unwrap().into_event(None);
    assert_eq!(event.progress, 1.2);

    let row = layout_row(&event, 0, &params());
    assert_eq!(row.progress_width, row.plan_width);
}
