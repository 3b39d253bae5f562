// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides client construction and the paginated issue fetcher.

use std::time::Duration;

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};

use crate::Result;
use crate::config::GitHubConfig;
use crate::error::RoadmapError;

pub mod issues;

/// Parses an owner/repo string to extract owner and repo.
///
/// Validates format: exactly one `/`, non-empty parts.
///
/// # Errors
///
/// Returns [`RoadmapError::Input`] if the format is invalid.
pub fn parse_owner_repo(s: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(RoadmapError::Input {
            message: format!(
                "Invalid owner/repo format.\n\
                 Expected: owner/repo\n\
                 Got: {s}"
            ),
        });
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

/// Creates an Octocrab client using a provided token.
///
/// An empty token yields an anonymous client, which works for public
/// repositories under a lower rate limit. Connect and read timeouts come
/// from `config.api_timeout_seconds`.
///
/// # Errors
///
/// Returns an error if the Octocrab client cannot be built.
#[instrument(skip(token, config))]
pub fn create_client_with_token(token: &SecretString, config: &GitHubConfig) -> Result<Octocrab> {
    let timeout = Duration::from_secs(config.api_timeout_seconds);
    let builder = Octocrab::builder()
        .set_connect_timeout(Some(timeout))
        .set_read_timeout(Some(timeout));
    let builder = if token.expose_secret().is_empty() {
        info!("Creating anonymous GitHub client");
        builder
    } else {
        info!("Creating GitHub client with provided token");
        builder.personal_token(token.expose_secret().to_string())
    };

    let client = builder.build()?;

    debug!("Created GitHub client");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_repo_valid() {
        let (owner, repo) = parse_owner_repo("octocat/Hello-World").unwrap();
        assert_eq!(owner, "octocat");
        assert_eq!(repo, "Hello-World");
    }

    #[test]
    fn test_parse_owner_repo_invalid_no_slash() {
        let err = parse_owner_repo("octocat").unwrap_err();
        assert!(matches!(err, RoadmapError::Input { .. }));
    }

    #[test]
    fn test_parse_owner_repo_invalid_empty_owner() {
        assert!(parse_owner_repo("/repo").is_err());
    }

    #[test]
    fn test_parse_owner_repo_invalid_empty_repo() {
        assert!(parse_owner_repo("owner/").is_err());
    }

    #[test]
    fn test_parse_owner_repo_invalid_extra_segment() {
        assert!(parse_owner_repo("owner/repo/extra").is_err());
    }

    #[test]
    fn test_parse_owner_repo_empty_string() {
        assert!(parse_owner_repo("").is_err());
    }
}
