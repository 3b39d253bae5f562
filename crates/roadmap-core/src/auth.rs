// SPDX-License-Identifier: Apache-2.0

//! Token provider abstraction for credential resolution.
//!
//! Callers implement [`TokenProvider`] to hand the GitHub credential to the
//! fetcher; the core never looks at flags or the environment itself.

use secrecy::SecretString;

/// Provides the GitHub credential for API calls.
pub trait TokenProvider: Send + Sync {
    /// Retrieves the GitHub API token.
    ///
    /// Returns `None` if no token is available, in which case requests are
    /// made anonymously.
    fn github_token(&self) -> Option<SecretString>;
}
