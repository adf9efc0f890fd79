//! JSON project file loading.

use crate::model::{LoadError, Project};
use std::path::Path;
use tracing::info;

/// Load a project list from a JSON file.
///
/// The file holds a single JSON array of projects matching the serde
/// shape of [`Project`]. Read once at startup; edits made in the UI are
/// in-memory only and are not written back.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] for a missing file, [`LoadError::Io`]
/// for read failures, and [`LoadError::Json`] for schema mismatches.
pub fn load_projects(path: impl AsRef<Path>) -> Result<Vec<Project>, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let projects: Vec<Project> =
        serde_json::from_str(&contents).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        count = projects.len(),
        "loaded projects from file"
    );
    Ok(projects)
}
