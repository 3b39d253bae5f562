// SPDX-License-Identifier: Apache-2.0

//! Output rendering for the report.
//!
//! All formats are delegated to the core renderer. The report is the only
//! thing written to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use console::style;
use roadmap_core::{Milestone, RenderOptions, render};

use crate::cli::OutputContext;

/// Renders the report text for the given milestones.
pub fn report_text(milestones: &[Milestone], ctx: &OutputContext) -> Result<String> {
    let options = RenderOptions {
        style: ctx.format.into(),
        estimates: ctx.estimates,
    };
    Ok(render(milestones, &options)?)
}

/// Writes the report to stdout.
pub fn print_report(milestones: &[Milestone], ctx: &OutputContext) -> Result<()> {
    let text = report_text(milestones, ctx)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write report")?;
    Ok(())
}

/// Prints a one-line summary to stderr when running interactively.
pub fn show_summary(ctx: &OutputContext, issues: usize, milestones: &[Milestone]) {
    if !ctx.is_interactive() {
        return;
    }

    let components: usize = milestones.iter().map(|m| m.components.len()).sum();
    eprintln!(
        "{}",
        style(format!(
            "{issues} issues, {} milestones, {components} components",
            milestones.len()
        ))
        .dim()
    );
}
