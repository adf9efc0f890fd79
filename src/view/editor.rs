//! Event editor modal.

use super::constants::{EDITOR_HEIGHT, EDITOR_WIDTH_PERCENT};
use super::styles::ChartStyles;
use crate::state::{EditorField, EditorForm};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the modal editor centered over the chart.
///
/// One line per field with the focused field highlighted; the last
/// rejected save's error shows in red above the key hints. The modal
/// blocks the chart until saved or cancelled.
pub fn render_editor(frame: &mut Frame, area: Rect, form: &EditorForm, styles: &ChartStyles) {
    let modal = centered_rect(area, EDITOR_WIDTH_PERCENT, EDITOR_HEIGHT);
    frame.render_widget(Clear, modal);

    let title = if form.editing.is_some() {
        " Edit event "
    } else {
        " Add event "
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines: Vec<Line> = Vec::new();
    for field in EditorField::ALL {
        let focused = field == form.focus;
        let marker = if focused { "› " } else { "  " };
        let value_style = if focused {
            styles.selected
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<24}", field.label()), styles.label),
            Span::styled(form.field(field).to_string(), value_style),
        ]));
    }

    lines.push(Line::default());
    match &form.error {
        Some(err) => lines.push(Line::from(Span::styled(err.to_string(), styles.error))),
        None => lines.push(Line::default()),
    }
    lines.push(Line::from(Span::styled(
        "Enter save · Esc cancel · Tab next field",
        styles.label,
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Center a fixed-height, percentage-width rect inside `area`.
fn centered_rect(area: Rect, width_percent: u16, height: u16) -> Rect {
    let width = (area.width as u32 * width_percent as u32 / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height,
    }
}
