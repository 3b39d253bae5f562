// SPDX-License-Identifier: Apache-2.0

//! Roadmap - milestone status reports from GitHub issues.
//!
//! Prints an HTML table or Markdown summary of the issues in the requested
//! milestones, grouped by `component: ` label, for pasting into project
//! status pages.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod provider;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use roadmap_core::load_config;
use tracing::debug;

use crate::cli::{Cli, RunConfig};

async fn try_main(cli: Cli) -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    let run_config = RunConfig::new(cli, config)?;
    commands::run(run_config).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match try_main(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}
