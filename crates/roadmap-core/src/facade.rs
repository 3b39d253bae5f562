// SPDX-License-Identifier: Apache-2.0

//! High-level entry points tying the pipeline together.
//!
//! Fetch (or load) the flat issue list, aggregate it, render it. Each step
//! is also available on its own from the respective module.

use secrecy::SecretString;
use tracing::{info, instrument};

use crate::Result;
use crate::auth::TokenProvider;
use crate::classify::aggregate;
use crate::config::GitHubConfig;
use crate::github::issues::{OctocrabPager, fetch_all_issues};
use crate::github::{create_client_with_token, parse_owner_repo};
use crate::model::Issue;
use crate::render::{RenderOptions, render};

/// Fetches every issue of `owner/name` from GitHub.
///
/// Uses the provider's token when present and falls back to anonymous
/// access otherwise.
///
/// # Errors
///
/// Returns [`crate::RoadmapError::Input`] for a malformed repository string
/// and [`crate::RoadmapError::Transport`] if any page request fails.
#[instrument(skip(provider, config), fields(repo = %repo))]
pub async fn fetch_issues(
    provider: &dyn TokenProvider,
    repo: &str,
    config: &GitHubConfig,
) -> Result<Vec<Issue>> {
    let (owner, name) = parse_owner_repo(repo)?;

    let token = provider
        .github_token()
        .unwrap_or_else(|| SecretString::from(String::new()));
    let client = create_client_with_token(&token, config)?;
    let pager = OctocrabPager::new(client, config.per_page);

    fetch_all_issues(&pager, &owner, &name).await
}

/// Aggregates issues into the requested milestones and renders the report.
///
/// # Errors
///
/// Returns [`crate::RoadmapError::Serialization`] if JSON rendering fails.
#[instrument(skip_all, fields(issues = issues.len()))]
pub fn build_report<S: AsRef<str>>(
    issues: &[Issue],
    milestones: &[S],
    options: &RenderOptions,
) -> Result<String> {
    let report = aggregate(issues, milestones);
    info!(milestones = report.len(), "Rendering report");
    render(&report, options)
}
