// SPDX-License-Identifier: Apache-2.0

//! Paginated issue listing.
//!
//! [`fetch_all_issues`] walks the "list repository issues" endpoint page by
//! page through an [`IssuePager`], so the pagination loop can be exercised
//! without a network connection.

use async_trait::async_trait;
use octocrab::Octocrab;
use octocrab::params::State;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::error::RoadmapError;
use crate::model::Issue;

/// Largest page size the issues endpoint accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// One page of issues plus the number of the page that follows it.
#[derive(Debug, Clone, Default)]
pub struct IssuePage {
    /// Issues on this page, in API order.
    pub issues: Vec<Issue>,
    /// Next page number, or `None` when this was the last page.
    pub next_page: Option<u32>,
}

/// Source of repository issues, one page at a time.
#[async_trait]
pub trait IssuePager: Send + Sync {
    /// Lists one page (1-based) of open and closed issues for `owner/repo`.
    async fn list_issues(&self, owner: &str, repo: &str, page: u32) -> Result<IssuePage>;
}

/// [`IssuePager`] backed by the GitHub REST API.
pub struct OctocrabPager {
    client: Octocrab,
    per_page: u8,
}

impl OctocrabPager {
    /// Wraps an Octocrab client. `per_page` is clamped to `1..=100`.
    #[must_use]
    pub fn new(client: Octocrab, per_page: u8) -> Self {
        Self {
            client,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }
}

#[async_trait]
impl IssuePager for OctocrabPager {
    async fn list_issues(&self, owner: &str, repo: &str, page: u32) -> Result<IssuePage> {
        let response = self
            .client
            .issues(owner, repo)
            .list()
            .state(State::All)
            .per_page(self.per_page)
            .page(page)
            .send()
            .await?;

        let next_page = response.next.as_ref().map(|_| page + 1);
        let issues = response.items.into_iter().map(Issue::from).collect();

        Ok(IssuePage { issues, next_page })
    }
}

/// Fetches every issue of a repository, open and closed.
///
/// Pages are requested sequentially starting at page 1 and concatenated in
/// the order received. The first failing page aborts the whole fetch.
///
/// # Errors
///
/// Returns [`RoadmapError::Transport`] if any page request fails.
#[instrument(skip(pager), fields(owner = %owner, repo = %repo))]
pub async fn fetch_all_issues(
    pager: &dyn IssuePager,
    owner: &str,
    repo: &str,
) -> Result<Vec<Issue>> {
    let mut all_issues = Vec::new();
    let mut page = 1;

    loop {
        let result = pager
            .list_issues(owner, repo, page)
            .await
            .map_err(|e| {
                let detail = match e {
                    RoadmapError::Transport { message } => message,
                    other => other.to_string(),
                };
                RoadmapError::Transport {
                    message: format!(
                        "failed to fetch page {page} of issues from {owner}/{repo}: {detail}"
                    ),
                }
            })?;

        debug!(page, count = result.issues.len(), "Fetched issue page");
        all_issues.extend(result.issues);

        match result.next_page {
            Some(next) => page = next,
            None => break,
        }
    }

    info!(total = all_issues.len(), "Fetched all issues");
    Ok(all_issues)
}
