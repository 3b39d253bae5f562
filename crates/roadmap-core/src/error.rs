// SPDX-License-Identifier: Apache-2.0

//! Error types for Roadmap.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a milestone report.
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// Failure talking to the GitHub issue tracker (including pagination).
    #[error("GitHub API error: {message}")]
    Transport {
        /// Error message.
        message: String,
    },

    /// Issue cache file could not be read or written.
    #[error("Failed to access issue cache {}: {source}", path.display())]
    Io {
        /// Path of the cache file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Issue cache file does not contain a valid issue list.
    #[error("Malformed issue cache {}: {source}", path.display())]
    Format {
        /// Path of the cache file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Aggregated report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Invalid user input (e.g. a repository without an `owner/name` separator).
    #[error("Invalid input: {message}")]
    Input {
        /// Error message.
        message: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl From<octocrab::Error> for RoadmapError {
    fn from(err: octocrab::Error) -> Self {
        RoadmapError::Transport {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for RoadmapError {
    fn from(err: config::ConfigError) -> Self {
        RoadmapError::Config {
            message: err.to_string(),
        }
    }
}
