//! Project list screen.

use super::styles::ChartStyles;
use crate::model::Project;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the project list with the current selection highlighted.
///
/// One project per two lines: title, then the manager's name indented
/// and dimmed, mirroring the card layout of the reference app.
pub fn render_project_list(
    frame: &mut Frame,
    area: Rect,
    projects: &[Project],
    selected: usize,
    styles: &ChartStyles,
) {
    if projects.is_empty() {
        frame.render_widget(Paragraph::new("No projects loaded."), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (index, project) in projects.iter().enumerate() {
        let (prefix, title_style) = if index == selected {
            ("▶ ", styles.selected)
        } else {
            ("  ", Style::default())
        };
        lines.push(Line::from(vec![
            Span::raw(prefix),
            Span::styled(project.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", project.manager),
            styles.label,
        )));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), area);
}
