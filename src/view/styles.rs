//! Chart styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` CLI flag or the `NO_COLOR`
/// environment variable (any value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles shared across the chart, list, and editor widgets.
///
/// Plan bars render light gray with the blue progress overlay on top.
/// The today marker is green and year labels are bold, matching the
/// reference chart's palette.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyles {
    /// Plan bar fill.
    pub plan: Style,
    /// Progress overlay fill.
    pub progress: Style,
    /// Today marker line.
    pub marker: Style,
    /// Year labels on the axis.
    pub axis_year: Style,
    /// Month labels on the axis.
    pub axis_month: Style,
    /// Row separator lines.
    pub separator: Style,
    /// Date labels right of the bars.
    pub label: Style,
    /// Selected row highlight.
    pub selected: Style,
    /// Validation error text in the editor.
    pub error: Style,
}

impl ChartStyles {
    /// Default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Scheme honoring the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                plan: Style::default().fg(Color::DarkGray),
                progress: Style::default().fg(Color::Blue),
                marker: Style::default().fg(Color::Green),
                axis_year: Style::default().add_modifier(Modifier::BOLD),
                axis_month: Style::default().fg(Color::Gray),
                separator: Style::default().fg(Color::DarkGray),
                label: Style::default().fg(Color::Gray),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                error: Style::default().fg(Color::Red),
            }
        } else {
            Self {
                plan: Style::default(),
                progress: Style::default(),
                marker: Style::default(),
                axis_year: Style::default().add_modifier(Modifier::BOLD),
                axis_month: Style::default(),
                separator: Style::default(),
                label: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                error: Style::default(),
            }
        }
    }
}

impl Default for ChartStyles {
    fn default() -> Self {
        Self::new()
    }
}
