// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `RoadmapError` and adds a hint for each
//! error kind. The core crate only carries structured error data.

use anyhow::Error;
use roadmap_core::RoadmapError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `RoadmapError`, returns the original error message.
pub fn format_error(error: &Error) -> String {
    let Some(roadmap_err) = error.downcast_ref::<RoadmapError>() else {
        return error.to_string();
    };

    match roadmap_err {
        RoadmapError::Transport { .. } => format!(
            "{roadmap_err}\n\nTip: Check your network connection and token (--token, GH_TOKEN or GITHUB_TOKEN)."
        ),
        RoadmapError::Io { .. } => {
            format!("{roadmap_err}\n\nTip: Check that the path exists and is accessible.")
        }
        RoadmapError::Format { .. } => format!(
            "{roadmap_err}\n\nTip: --from-file expects a file written by `roadmap --write-issues`."
        ),
        RoadmapError::Serialization(_) => {
            format!("{roadmap_err}\n\nTip: Try --format html or --format markdown.")
        }
        RoadmapError::Input { .. } => {
            format!("{roadmap_err}\n\nTip: Pass the repository as --repo owner/name.")
        }
        RoadmapError::Config { .. } => format!(
            "{roadmap_err}\n\nTip: Check your config file at {}",
            roadmap_core::config_file_path().display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_transport_error() {
        let error = RoadmapError::Transport {
            message: "connection reset".to_string(),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("GitHub API error: connection reset"));
        assert!(formatted.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_format_input_error() {
        let error = RoadmapError::Input {
            message: "Invalid owner/repo format.".to_string(),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("Invalid input"));
        assert!(formatted.contains("--repo owner/name"));
    }

    #[test]
    fn test_format_io_error() {
        let error = RoadmapError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("missing.json"));
        assert!(formatted.contains("Tip:"));
    }

    #[test]
    fn test_format_config_error() {
        let error = RoadmapError::Config {
            message: "invalid type".to_string(),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("Configuration error: invalid type"));
        assert!(formatted.contains("config.toml"));
    }

    #[test]
    fn test_format_non_roadmap_error() {
        let error = anyhow::anyhow!("Some generic error");
        let formatted = format_error(&error);

        assert_eq!(formatted, "Some generic error");
    }
}
