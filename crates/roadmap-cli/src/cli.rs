// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Roadmap.
//!
//! Uses clap's derive API. Parsed flags are merged with the loaded
//! configuration into a [`RunConfig`] once at startup.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use roadmap_core::{AppConfig, GitHubConfig, ReportStyle};

/// Output format for the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML table with status badges
    Html,
    /// Markdown headings and bullet list
    Markdown,
    /// JSON dump of the aggregated report
    Json,
}

impl From<OutputFormat> for ReportStyle {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => ReportStyle::Html,
            OutputFormat::Markdown => ReportStyle::Markdown,
            OutputFormat::Json => ReportStyle::Json,
        }
    }
}

impl From<ReportStyle> for OutputFormat {
    fn from(style: ReportStyle) -> Self {
        match style {
            ReportStyle::Html => OutputFormat::Html,
            ReportStyle::Markdown => OutputFormat::Markdown,
            ReportStyle::Json => OutputFormat::Json,
        }
    }
}

/// Global output configuration passed to commands.
#[derive(Clone, Debug)]
pub struct OutputContext {
    /// Report format
    pub format: OutputFormat,
    /// Show day estimates
    pub estimates: bool,
    /// Suppress non-essential output (spinners, summary)
    pub quiet: bool,
    /// Whether stderr is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet
    }
}

/// Roadmap - milestone status reports from GitHub issues.
///
/// Fetches every issue of a repository, groups the issues of the requested
/// milestones by `component: ` label and prints an HTML or Markdown report.
#[derive(Parser, Debug)]
#[command(name = "roadmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub token (falls back to GH_TOKEN, then GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Repository in owner/name format
    #[arg(long, required_unless_present = "from_file")]
    pub repo: Option<String>,

    /// Comma-separated milestone titles, in report order
    #[arg(long, value_delimiter = ',')]
    pub milestones: Vec<String>,

    /// Also write the fetched issue list to this file
    #[arg(long = "write-issues", value_name = "PATH")]
    pub write_issues: Option<PathBuf>,

    /// Read issues from a file written by --write-issues instead of GitHub
    #[arg(long = "from-file", value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Report format (defaults to the configured style, html if unset)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Leave out day estimates
    #[arg(long)]
    pub no_estimates: bool,

    /// Suppress non-essential output (spinners, summary)
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Where the issue list comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssueSource {
    /// A cache file written by an earlier run.
    File(PathBuf),
    /// The GitHub API, for an `owner/name` repository.
    GitHub(String),
}

/// Everything a run needs, assembled once from flags and configuration.
#[derive(Debug)]
pub struct RunConfig {
    /// Issue source.
    pub source: IssueSource,
    /// Token given on the command line, if any.
    pub token: Option<String>,
    /// Milestones to report, in order.
    pub milestones: Vec<String>,
    /// Cache file to write after rendering.
    pub write_issues: Option<PathBuf>,
    /// GitHub client settings.
    pub github: GitHubConfig,
    /// Output settings.
    pub output: OutputContext,
}

impl RunConfig {
    /// Merges parsed flags over the loaded configuration.
    ///
    /// `--from-file` takes precedence over `--repo`; the two sources are never
    /// combined.
    pub fn new(cli: Cli, config: AppConfig) -> anyhow::Result<Self> {
        let source = match (cli.from_file, cli.repo) {
            (Some(path), _) => IssueSource::File(path),
            (None, Some(repo)) => IssueSource::GitHub(repo),
            (None, None) => anyhow::bail!("Either --repo or --from-file is required"),
        };

        let output = OutputContext {
            format: cli
                .format
                .unwrap_or_else(|| OutputFormat::from(config.report.style)),
            estimates: config.report.estimates && !cli.no_estimates,
            quiet: cli.quiet,
            is_tty: std::io::stderr().is_terminal(),
        };

        Ok(Self {
            source,
            token: cli.token,
            milestones: cli
                .milestones
                .into_iter()
                .filter(|m| !m.is_empty())
                .collect(),
            write_issues: cli.write_issues,
            github: config.github,
            output,
        })
    }
}
