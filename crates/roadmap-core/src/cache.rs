// SPDX-License-Identifier: Apache-2.0

//! File cache for the fetched issue list.
//!
//! Stores the flat issue list as JSON so a later run can render the report
//! with `--from-file` instead of calling the GitHub API. The file holds the
//! issues exactly as fetched, not the aggregated report.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::Result;
use crate::error::RoadmapError;
use crate::model::Issue;

/// Read an issue list previously written by [`save_issues`].
///
/// # Errors
///
/// Returns [`RoadmapError::Io`] if the file cannot be read and
/// [`RoadmapError::Format`] if it does not contain an issue list.
#[instrument(fields(path = %path.display()))]
pub fn load_issues(path: &Path) -> Result<Vec<Issue>> {
    let contents = fs::read_to_string(path).map_err(|source| RoadmapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let issues: Vec<Issue> =
        serde_json::from_str(&contents).map_err(|source| RoadmapError::Format {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(count = issues.len(), "Loaded issues from cache");
    Ok(issues)
}

/// Write the issue list to disk.
///
/// Creates parent directories if they don't exist.
/// Writes to a uniquely named temp file in the same directory and renames it
/// over `path`. The temp file is removed if any step fails.
///
/// # Errors
///
/// Returns [`RoadmapError::Io`] if the file cannot be written.
#[instrument(skip(issues), fields(path = %path.display(), count = issues.len()))]
pub fn save_issues(path: &Path, issues: &[Issue]) -> Result<()> {
    let io_err = |source: std::io::Error| RoadmapError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let contents = serde_json::to_string_pretty(issues).map_err(|e| io_err(e.into()))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    temp.write_all(contents.as_bytes()).map_err(io_err)?;
    temp.persist(path).map_err(|e| io_err(e.error))?;

    debug!("Wrote issue cache");
    Ok(())
}
