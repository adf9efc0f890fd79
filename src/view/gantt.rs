//! Gantt chart rendering.
//!
//! Consumes the layout engine's geometry and paints it into terminal
//! cells: calendar axis on top, one bar pair per event row below, the
//! green today marker across the chart. The renderer only converts px
//! to cells and clips; all positioning decisions live in `layout`.

use super::constants::{AXIS_HEIGHT, INFO_COLUMN_WIDTH, PX_PER_CELL_X, PX_PER_CELL_Y};
use super::styles::ChartStyles;
use crate::editor::DATE_DISPLAY_FORMAT;
use crate::layout::{axis_ticks, layout_rows, today_marker_offset, LayoutParams};
use crate::model::Project;
use crate::state::DetailLevel;
use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Styling class of one rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seg {
    Empty,
    Plan,
    Progress,
    Label,
    Separator,
    Marker,
}

/// One line of chart cells under construction.
///
/// Positions are signed cells relative to the visible chart's left edge
/// (already scrolled); anything outside `[0, width)` is clipped.
struct RowBuf {
    cells: Vec<(char, Seg)>,
}

impl RowBuf {
    fn new(width: usize) -> Self {
        Self {
            cells: vec![(' ', Seg::Empty); width],
        }
    }

    fn fill(&mut self, ch: char, seg: Seg) {
        for cell in &mut self.cells {
            *cell = (ch, seg);
        }
    }

    fn set(&mut self, x: i64, ch: char, seg: Seg) {
        if x >= 0 && (x as usize) < self.cells.len() {
            self.cells[x as usize] = (ch, seg);
        }
    }

    fn set_range(&mut self, start: i64, end: i64, ch: char, seg: Seg) {
        for x in start.max(0)..end.min(self.cells.len() as i64) {
            self.cells[x as usize] = (ch, seg);
        }
    }

    fn overlay_text(&mut self, x: i64, text: &str, seg: Seg) {
        let mut pos = x;
        for c in text.chars() {
            self.set(pos, c, seg);
            pos += UnicodeWidthChar::width(c).unwrap_or(0) as i64;
        }
    }

    /// Convert to a styled line, merging runs of equal styling.
    fn into_line(self, styles: &ChartStyles) -> Line<'static> {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_seg = Seg::Empty;

        for (ch, seg) in self.cells {
            if seg != run_seg && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    seg_style(run_seg, styles),
                ));
            }
            run_seg = seg;
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, seg_style(run_seg, styles)));
        }
        Line::from(spans)
    }
}

fn seg_style(seg: Seg, styles: &ChartStyles) -> ratatui::style::Style {
    match seg {
        Seg::Empty => ratatui::style::Style::default(),
        Seg::Plan => styles.plan,
        Seg::Progress => styles.progress,
        Seg::Label => styles.label,
        Seg::Separator => styles.separator,
        Seg::Marker => styles.marker,
    }
}

/// Render one project's chart into `area`.
///
/// `window_years` sizes the calendar axis; `today` positions the
/// marker. A marker left of the visible window is simply not drawn.
#[allow(clippy::too_many_arguments)]
pub fn render_gantt(
    frame: &mut Frame,
    area: Rect,
    project: &Project,
    params: &LayoutParams,
    window_years: i32,
    today: NaiveDate,
    detail: DetailLevel,
    selected_event: usize,
    h_scroll: u16,
    styles: &ChartStyles,
) {
    let info_width = match detail {
        DetailLevel::Expanded => INFO_COLUMN_WIDTH.min(area.width / 2),
        DetailLevel::Collapsed => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(info_width), Constraint::Min(0)])
        .split(area);
    let info_area = chunks[0];
    let chart_area = chunks[1];

    if detail == DetailLevel::Expanded {
        render_info_column(frame, info_area, project, selected_event, styles);
    }
    render_chart(
        frame,
        chart_area,
        project,
        params,
        window_years,
        today,
        detail,
        selected_event,
        h_scroll,
        styles,
    );
}

/// Left column: event titles with completion percentages.
fn render_info_column(
    frame: &mut Frame,
    area: Rect,
    project: &Project,
    selected_event: usize,
    styles: &ChartStyles,
) {
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    // Keep the info rows aligned with the chart rows below the axis
    for _ in 0..AXIS_HEIGHT {
        lines.push(Line::default());
    }

    for (index, event) in project.events.iter().enumerate() {
        let title = truncate_to_width(&event.title, width);
        let title_style = if index == selected_event {
            styles.selected
        } else {
            ratatui::style::Style::default()
        };
        lines.push(Line::from(Span::styled(title, title_style)));

        let percent = (event.progress * 100.0).round() as i64;
        lines.push(Line::from(Span::styled(
            format!("{percent}%"),
            styles.progress,
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[allow(clippy::too_many_arguments)]
fn render_chart(
    frame: &mut Frame,
    area: Rect,
    project: &Project,
    params: &LayoutParams,
    window_years: i32,
    today: NaiveDate,
    detail: DetailLevel,
    selected_event: usize,
    h_scroll: u16,
    styles: &ChartStyles,
) {
    let width = area.width as usize;
    if width == 0 {
        return;
    }
    let to_cell = |px: f64| (px / PX_PER_CELL_X).floor() as i64 - h_scroll as i64;

    // Calendar axis: bold years above, month starts below
    let mut years = RowBuf::new(width);
    let mut months = RowBuf::new(width);
    for tick in axis_ticks(params.base_date, window_years, params.day_width) {
        let x = to_cell(tick.x);
        if tick.year_boundary {
            years.overlay_text(x, &tick.date.format("%Y").to_string(), Seg::Label);
        }
        months.overlay_text(x, &tick.date.format("%d.%m").to_string(), Seg::Label);
    }

    // Event rows: px geometry to line indices
    let rows = layout_rows(&project.events, params);
    let mut body: Vec<RowBuf> = Vec::new();
    for row in &rows {
        let bar_line = (row.y / PX_PER_CELL_Y).floor().max(0.0) as usize;
        let sep_line = (row.separator_y / PX_PER_CELL_Y).floor().max(0.0) as usize;
        while body.len() <= sep_line {
            body.push(RowBuf::new(width));
        }

        let bar_start = to_cell(row.x);
        let bar_end = to_cell(row.x + row.plan_width);
        let progress_end = to_cell(row.x + row.progress_width);
        let buf = &mut body[bar_line];
        buf.set_range(bar_start, bar_end, '░', Seg::Plan);
        buf.set_range(bar_start, progress_end, '█', Seg::Progress);

        if detail == DetailLevel::Expanded {
            let event = &project.events[row.index];
            let label = format!(
                "{}-{}",
                event.start_date.format(DATE_DISPLAY_FORMAT),
                event.end_date.format(DATE_DISPLAY_FORMAT)
            );
            buf.overlay_text(to_cell(row.label_x), &label, Seg::Label);
        }
        if row.index == selected_event {
            buf.set(bar_start - 1, '▶', Seg::Marker);
        }

        body[sep_line].fill('─', Seg::Separator);
    }

    // Today marker spans the event rows
    let marker = to_cell(today_marker_offset(params.base_date, today, params.day_width));
    if marker >= 0 && (marker as usize) < width {
        for buf in &mut body {
            buf.set(marker, '│', Seg::Marker);
        }
    }

    let mut lines = vec![
        {
            let mut line = years.into_line(styles);
            line = line.style(styles.axis_year);
            line
        },
        {
            let mut line = months.into_line(styles);
            line = line.style(styles.axis_month);
            line
        },
    ];
    lines.extend(body.into_iter().map(|buf| buf.into_line(styles)));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Truncate a string to a display width, respecting wide characters.
fn truncate_to_width(s: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_buf_clips_out_of_range_writes() {
        let mut buf = RowBuf::new(4);
        buf.set(-1, 'x', Seg::Plan);
        buf.set(4, 'x', Seg::Plan);
        buf.set_range(-3, 2, '░', Seg::Plan);
        assert_eq!(buf.cells[0], ('░', Seg::Plan));
        assert_eq!(buf.cells[1], ('░', Seg::Plan));
        assert_eq!(buf.cells[2], (' ', Seg::Empty));
        assert_eq!(buf.cells[3], (' ', Seg::Empty));
    }

    #[test]
    fn overlay_text_clips_at_both_edges() {
        let mut buf = RowBuf::new(6);
        buf.overlay_text(-2, "2024", Seg::Label);
        assert_eq!(buf.cells[0], ('2', Seg::Label));
        assert_eq!(buf.cells[1], ('4', Seg::Label));
        buf.overlay_text(5, "01.02", Seg::Label);
        assert_eq!(buf.cells[5], ('0', Seg::Label));
    }

    #[test]
    fn into_line_merges_adjacent_runs() {
        let styles = ChartStyles::new();
        let mut buf = RowBuf::new(6);
        buf.set_range(0, 3, '█', Seg::Progress);
        buf.set_range(3, 5, '░', Seg::Plan);
        let line = buf.into_line(&styles);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "███");
        assert_eq!(line.spans[1].content, "░░");
        assert_eq!(line.spans[2].content, " ");
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Procurement", 6), "Procur");
        assert_eq!(truncate_to_width("短い題", 4), "短い");
        assert_eq!(truncate_to_width("ok", 8), "ok");
    }
}
