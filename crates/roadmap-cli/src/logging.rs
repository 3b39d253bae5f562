// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Roadmap CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Logs go to stderr so stdout carries nothing but the report.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! roadmap --repo owner/name --milestones v1.0
//!
//! # Page-by-page fetch progress
//! RUST_LOG=roadmap=debug roadmap --repo owner/name --milestones v1.0
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` (-v) switches the default
/// filter from warnings to debug output for the roadmap crates.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // The `roadmap` directive also matches the `roadmap_core` target
    let default_filter = if verbose {
        "roadmap=debug,octocrab=warn"
    } else {
        "roadmap=warn,octocrab=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
