//! Project data providers.
//!
//! The presentation layer never constructs projects itself; it is handed
//! a [`ProjectSource`] and loads through it. Two providers exist:
//! a JSON file (read once at startup) and the built-in sample data set
//! used when no file is given. Sum type enforces exactly one variant.

use crate::model::{LoadError, Project};
use std::path::PathBuf;

pub mod file;
pub mod sample;

/// Where project data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    /// Built-in demo data.
    Sample,
    /// A JSON file with an array of projects.
    File(PathBuf),
}

impl ProjectSource {
    /// Load all projects from this source.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when a file source is missing, unreadable,
    /// or not valid project JSON. The sample source cannot fail.
    pub fn load(&self) -> Result<Vec<Project>, LoadError> {
        match self {
            ProjectSource::Sample => Ok(sample::sample_projects()),
            ProjectSource::File(path) => file::load_projects(path),
        }
    }
}

/// Pick the source for the given CLI argument: a path loads that file,
/// no path falls back to the sample data.
pub fn detect_source(file: Option<PathBuf>) -> ProjectSource {
    match file {
        Some(path) => ProjectSource::File(path),
        None => ProjectSource::Sample,
    }
}
