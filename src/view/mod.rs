//! TUI rendering and terminal management (impure shell).

pub mod constants;
mod editor;
mod gantt;
mod project_list;
mod styles;

pub use gantt::render_gantt;
pub use project_list::render_project_list;
pub use styles::{ChartStyles, ColorConfig};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::layout::LayoutParams;
use crate::model::Project;
use crate::state::{AppState, Screen};
use chrono::NaiveDate;
use constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application.
///
/// Generic over the backend so tests can drive it with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    config: ResolvedConfig,
    key_bindings: KeyBindings,
    styles: ChartStyles,
    today: NaiveDate,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen.
    pub fn new(projects: Vec<Project>, config: ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, projects, config))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app over an existing terminal (used directly by tests).
    pub fn with_terminal(
        terminal: Terminal<B>,
        projects: Vec<Project>,
        config: ResolvedConfig,
    ) -> Self {
        Self {
            terminal,
            state: AppState::new(projects),
            config,
            key_bindings: KeyBindings::default(),
            styles: ChartStyles::new(),
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Run the event loop until the user quits.
    ///
    /// Purely input-driven: redraws happen on key and resize events
    /// only; idle polling costs nothing but the poll timeout.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }

    /// Handle a single keyboard event. Returns `true` to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // An open editor captures all input for its form fields
        if self.state.editor.is_some() {
            self.handle_editor_key(key);
            return false;
        }

        let normalized = KeyEvent::new(key.code, key.modifiers);
        match self.key_bindings.get(normalized) {
            Some(action) => self.state.handle_action(action),
            None => false,
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.cancel_editor(),
            KeyCode::Enter => self.state.save_editor(),
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = self.state.editor.as_mut() {
                    form.focus_next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.state.editor.as_mut() {
                    form.focus_prev();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.state.editor.as_mut() {
                    form.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = self.state.editor.as_mut() {
                    form.insert_char(c);
                }
            }
            _ => {}
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let config = &self.config;
        let styles = &self.styles;
        let today = self.today;
        self.terminal
            .draw(|frame| render_app(frame, state, config, styles, today))?;
        Ok(())
    }
}

/// Chart layout parameters for a project under the current config.
///
/// An explicit base date from config wins; otherwise the axis origin is
/// the earliest event start, falling back to today for empty projects.
pub fn layout_params_for(
    project: &Project,
    config: &ResolvedConfig,
    today: NaiveDate,
) -> LayoutParams {
    let base_date = config
        .base_date
        .or_else(|| project.earliest_start())
        .unwrap_or(today);
    LayoutParams {
        base_date,
        day_width: config.day_width,
        row_height: config.row_height,
        bar_height: config.bar_height,
    }
}

fn render_app(
    frame: &mut Frame,
    state: &AppState,
    config: &ResolvedConfig,
    styles: &ChartStyles,
    today: NaiveDate,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());
    let header_area = chunks[0];
    let content_area = chunks[1];
    let status_area = chunks[2];

    render_header(frame, header_area, state);

    match state.screen {
        Screen::ProjectList => render_project_list(
            frame,
            content_area,
            &state.projects,
            state.selected_project,
            styles,
        ),
        Screen::Gantt => {
            if let Some(project) = state.current_project() {
                let params = layout_params_for(project, config, today);
                render_gantt(
                    frame,
                    content_area,
                    project,
                    &params,
                    config.window_years,
                    today,
                    state.detail,
                    state.selected_event,
                    state.h_scroll,
                    styles,
                );
            }
        }
    }

    render_status_bar(frame, status_area, state, styles);

    if let Some(form) = &state.editor {
        editor::render_editor(frame, content_area, form, styles);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = match state.screen {
        Screen::ProjectList => "ganttview: Projects".to_string(),
        Screen::Gantt => match state.current_project() {
            Some(project) => format!("ganttview: {} ({})", project.title, project.manager),
            None => "ganttview".to_string(),
        },
    };
    frame.render_widget(Paragraph::new(Line::from(text)), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ChartStyles) {
    let hint = if state.editor.is_some() {
        "Enter save · Esc cancel · Tab next field"
    } else {
        match state.screen {
            Screen::ProjectList => "q quit · ↑↓ select · Enter open",
            Screen::Gantt => "Esc back · ↑↓ event · ←→ scroll · z detail · a add · e edit",
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(ratatui::text::Span::styled(hint, styles.label))),
        area,
    );
}

/// Initialize the terminal, run the app over the given projects, and
/// restore the terminal even when the run fails.
///
/// Logging must be initialized by the caller beforehand.
pub fn run_with_projects(projects: Vec<Project>, config: ResolvedConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(projects, config)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
