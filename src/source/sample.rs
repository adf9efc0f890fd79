//! Built-in demo data.
//!
//! Mirrors the construction-project demo set the application ships with:
//! six projects across three managers, each with the same three-event
//! schedule over 2024.

use crate::model::{Event, EventId, Project};
use chrono::NaiveDate;

/// The demo project list.
pub fn sample_projects() -> Vec<Project> {
    let managers = ["I. Barabanov", "I. Shtakhura", "A. Borshchin"];

    vec![
        Project::new("City-2", managers[0], sample_events()),
        Project::new("MAI", managers[0], sample_events()),
        Project::new("Courts-2", managers[0], sample_events()),
        Project::new("Spring Waters", managers[1], sample_events()),
        Project::new("MGSU Housing", managers[1], sample_events()),
        Project::new("MIG", managers[2], sample_events()),
    ]
}

fn sample_events() -> Vec<Event> {
    vec![
        event("Documentation", 0.8, (2024, 1, 1), (2024, 1, 15), "Engineer"),
        event("Procurement", 0.4, (2024, 1, 10), (2024, 1, 25), "Supply"),
        event("Site preparation", 0.6, (2024, 1, 10), (2024, 12, 25), "Supply"),
    ]
}

fn event(
    title: &str,
    progress: f64,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    responsible: &str,
) -> Event {
    Event {
        id: EventId::generate(),
        title: title.to_string(),
        progress,
        start_date: date(start),
        end_date: date(end),
        responsible: responsible.to_string(),
    }
}

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    // All sample dates are valid literals
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_projects_three_events_each() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 6);
        for project in &projects {
            assert_eq!(project.events.len(), 3);
        }
    }

    #[test]
    fn sample_ids_are_unique() {
        let projects = sample_projects();
        let mut ids: Vec<_> = projects
            .iter()
            .flat_map(|p| p.events.iter().map(|e| e.id))
            .collect();
        let before = ids.len();
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn sample_dates_are_well_formed() {
        for project in sample_projects() {
            for event in &project.events {
                assert!(event.start_date <= event.end_date);
                assert!((0.0..=1.0).contains(&event.progress));
            }
        }
    }
}
