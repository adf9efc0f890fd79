//! ganttview entry point.

use chrono::NaiveDate;
use clap::Parser;
use ganttview::model::AppError;
use std::path::PathBuf;
use tracing::info;

/// TUI for viewing project schedules as Gantt charts.
#[derive(Parser, Debug)]
#[command(name = "ganttview")]
#[command(version)]
#[command(about = "TUI application for viewing project schedules as Gantt charts")]
pub struct Args {
    /// Path to a JSON project file (built-in sample data if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pixels per calendar day on the chart
    #[arg(long)]
    pub day_width: Option<f64>,

    /// Calendar axis window in years
    #[arg(long)]
    pub window_years: Option<i32>,

    /// Calendar axis origin (dd.MM.yyyy); defaults to the earliest event
    #[arg(long, value_parser = parse_cli_date)]
    pub base_date: Option<NaiveDate>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn parse_cli_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, ganttview::editor::DATE_FORMAT)
        .map_err(|_| format!("expected dd.MM.yyyy, got {raw:?}"))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve configuration: defaults → config file → env vars → CLI args
    let config = {
        let config_file = ganttview::config::load_config_with_precedence(args.config.clone())?;
        let merged = ganttview::config::merge_config(config_file)?;
        let with_env = ganttview::config::apply_env_overrides(merged)?;
        ganttview::config::apply_cli_overrides(
            with_env,
            args.day_width,
            args.window_years,
            args.base_date,
        )
    };

    ganttview::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration resolved");

    let source = ganttview::source::detect_source(args.file.clone());
    let projects = source.load()?;
    info!(count = projects.len(), "projects loaded");

    ganttview::view::run_with_projects(projects, config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_with_no_arguments() {
        let args = Args::parse_from(["ganttview"]);
        assert!(args.file.is_none());
        assert!(args.day_width.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn args_parse_full_set() {
        let args = Args::parse_from([
            "ganttview",
            "projects.json",
            "--day-width",
            "8",
            "--window-years",
            "1",
            "--base-date",
            "01.06.2024",
            "--no-color",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("projects.json")));
        assert_eq!(args.day_width, Some(8.0));
        assert_eq!(args.window_years, Some(1));
        assert_eq!(
            args.base_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
        assert!(args.no_color);
    }

    #[test]
    fn malformed_base_date_is_rejected() {
        let result = Args::try_parse_from(["ganttview", "--base-date", "2024-06-01"]);
        assert!(result.is_err());
    }
}
