// SPDX-License-Identifier: Apache-2.0

//! Report pipeline for the Roadmap CLI.
//!
//! Load or fetch the issues, aggregate, print the report, then write the
//! issue cache if one was requested. Any failure aborts the run before the
//! cache is written.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use roadmap_core::{Issue, aggregate, fetch_issues, load_issues, save_issues};
use tracing::{debug, info, instrument};

use crate::cli::{IssueSource, OutputContext, RunConfig};
use crate::output;
use crate::provider::CliTokenProvider;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if !ctx.is_interactive() {
        return None;
    }

    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .ok()?;
    let s = ProgressBar::new_spinner();
    s.set_style(style);
    s.set_message(message.to_string());
    s.enable_steady_tick(Duration::from_millis(100));
    Some(s)
}

/// Obtains the flat issue list from the configured source.
async fn collect_issues(config: &RunConfig) -> Result<Vec<Issue>> {
    match &config.source {
        IssueSource::File(path) => {
            debug!(path = %path.display(), "Reading issues from file");
            Ok(load_issues(path)?)
        }
        IssueSource::GitHub(repo) => {
            let provider = CliTokenProvider::new(config.token.clone());
            let spinner =
                maybe_spinner(&config.output, &format!("Fetching issues from {repo}..."));
            let result = fetch_issues(&provider, repo, &config.github).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            Ok(result?)
        }
    }
}

/// Runs the whole report pipeline.
#[instrument(skip_all, fields(milestones = config.milestones.len()))]
pub async fn run(config: RunConfig) -> Result<()> {
    let issues = collect_issues(&config).await?;
    info!(count = issues.len(), "Collected issues");

    let report = aggregate(&issues, config.milestones.as_slice());
    output::print_report(&report, &config.output)?;
    output::show_summary(&config.output, issues.len(), &report);

    if let Some(path) = &config.write_issues {
        save_issues(path, &issues)?;
        info!(path = %path.display(), "Wrote issue cache");
    }

    Ok(())
}
