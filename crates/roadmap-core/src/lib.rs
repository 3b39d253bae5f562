// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Roadmap Core
//!
//! Core library for the Roadmap CLI - milestone status reports built from a
//! repository's GitHub issues.
//!
//! This crate provides reusable components for:
//! - Fetching every issue of a repository, page by page
//! - Caching the fetched issue list to a local JSON file
//! - Grouping issues by milestone and `component: ` label with counters
//! - Rendering the result as an HTML table, Markdown or JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roadmap_core::{RenderOptions, build_report, load_issues};
//! use std::path::Path;
//!
//! # fn example() -> roadmap_core::Result<()> {
//! let issues = load_issues(Path::new("issues.json"))?;
//! let report = build_report(&issues, &["v1.0", "v1.1"], &RenderOptions::default())?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Issue list persistence
//! - [`classify`] - Label parsing and milestone/component aggregation
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`github`] - GitHub client and paginated fetcher
//! - [`render`] - HTML, Markdown and JSON output

// ============================================================================
// Authentication
// ============================================================================

pub use auth::TokenProvider;

// ============================================================================
// Error Handling
// ============================================================================

pub use error::RoadmapError;

/// Convenience Result type for Roadmap operations.
///
/// This is equivalent to `std::result::Result<T, RoadmapError>`.
pub type Result<T> = std::result::Result<T, RoadmapError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, GitHubConfig, ReportConfig, config_file_path, load_config};

// ============================================================================
// Data Model
// ============================================================================

pub use model::{Assignee, Issue, Label, MilestoneRef};
pub use report::{Component, Milestone, ReportIssue, Stats};

// ============================================================================
// Pipeline
// ============================================================================

pub use cache::{load_issues, save_issues};
pub use classify::{LabelInfo, aggregate, parse_estimate};
pub use github::issues::{IssuePage, IssuePager, OctocrabPager, fetch_all_issues};
pub use github::parse_owner_repo;
pub use render::{RenderOptions, ReportStyle, render};

// ============================================================================
// Platform-Agnostic Facade
// ============================================================================

pub use facade::{build_report, fetch_issues};

// ============================================================================
// Modules
// ============================================================================

pub mod auth;
pub mod cache;
pub mod classify;
pub mod config;
pub mod error;
pub mod facade;
pub mod github;
pub mod model;
pub mod render;
pub mod report;
