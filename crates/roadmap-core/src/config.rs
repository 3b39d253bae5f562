// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Roadmap.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Command-line flags (applied by the CLI on top of the loaded config)
//! 2. Environment variables (prefix: `ROADMAP_`)
//! 3. Config file: `~/.config/roadmap/config.toml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Render Markdown by default
//! ROADMAP_REPORT__STYLE=markdown roadmap --repo owner/name --milestones v1.0
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::RoadmapError;
use crate::github::issues::MAX_PER_PAGE;
use crate::render::{RenderOptions, ReportStyle};

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Report rendering settings.
    pub report: ReportConfig,
}

/// GitHub API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API request timeout in seconds.
    pub api_timeout_seconds: u64,
    /// Issues requested per page (at most 100).
    pub per_page: u8,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_timeout_seconds: 10,
            per_page: MAX_PER_PAGE,
        }
    }
}

/// Report rendering settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default output layout.
    pub style: ReportStyle,
    /// Show day estimates parsed from `estimate: ` labels.
    pub estimates: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            style: ReportStyle::Html,
            estimates: true,
        }
    }
}

impl ReportConfig {
    /// Rendering options described by this section.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            style: self.style,
            estimates: self.estimates,
        }
    }
}

/// Returns the Roadmap configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/roadmap`. Falls back to a relative
/// `.config/roadmap` when no home directory can be determined.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("roadmap");
    }
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("roadmap")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `ROADMAP_` and double underscore
/// for nested keys (e.g., `ROADMAP_GITHUB__PER_PAGE`).
///
/// # Errors
///
/// Returns `RoadmapError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, RoadmapError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("ROADMAP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
