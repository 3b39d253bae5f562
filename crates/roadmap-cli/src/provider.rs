// SPDX-License-Identifier: Apache-2.0

//! CLI-specific `TokenProvider` implementation.
//!
//! Resolves the GitHub token from the `--token` flag first, then from the
//! `GH_TOKEN` and `GITHUB_TOKEN` environment variables.

use roadmap_core::TokenProvider;
use secrecy::SecretString;
use tracing::debug;

/// CLI implementation of `TokenProvider`.
pub struct CliTokenProvider {
    flag: Option<SecretString>,
}

impl CliTokenProvider {
    /// Creates a provider from the optional `--token` flag value.
    pub fn new(flag: Option<String>) -> Self {
        Self {
            flag: flag.filter(|t| !t.is_empty()).map(SecretString::from),
        }
    }
}

impl TokenProvider for CliTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        if let Some(token) = &self.flag {
            debug!("Using token from --token flag");
            return Some(token.clone());
        }

        for var in ["GH_TOKEN", "GITHUB_TOKEN"] {
            if let Ok(token) = std::env::var(var)
                && !token.is_empty()
            {
                debug!("Using token from {var} environment variable");
                return Some(SecretString::from(token));
            }
        }

        debug!("No GitHub token found, using anonymous access");
        None
    }
}
