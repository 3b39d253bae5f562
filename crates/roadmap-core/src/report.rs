// SPDX-License-Identifier: Apache-2.0

//! Aggregated report structure.
//!
//! Produced by [`crate::classify::aggregate`] and consumed by
//! [`crate::render::render`]. Everything here is already sorted.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::model::Issue;

/// Characters escaped in badge labels (everything but unreserved URL characters).
const BADGE_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const BADGE_BASE: &str = "https://img.shields.io/badge";

/// Closed/total counters plus remaining effort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Number of closed issues.
    pub closed: u32,
    /// Number of issues counted.
    pub total: u32,
    /// Sum of day estimates over open issues.
    pub days: u32,
}

impl Stats {
    /// Number of open issues.
    #[must_use]
    pub fn open(&self) -> u32 {
        self.total - self.closed
    }

    /// Counts one issue. `days` only contributes while the issue is open.
    pub fn record(&mut self, closed: bool, days: u32) {
        self.total += 1;
        if closed {
            self.closed += 1;
        } else {
            self.days = self.days.saturating_add(days);
        }
    }

    /// Badge image URL showing `closed/total`.
    #[must_use]
    pub fn completed_badge(&self) -> String {
        badge_url("completed", &format!("{}/{}", self.closed, self.total), "blue")
    }

    /// Badge image URL showing the remaining days.
    #[must_use]
    pub fn days_badge(&self) -> String {
        badge_url("remaining", &format!("{}d", self.days), "green")
    }
}

fn badge_url(label: &str, value: &str, color: &str) -> String {
    format!(
        "{BADGE_BASE}/{label}-{}-{color}.svg?style=flat-square",
        utf8_percent_encode(value, BADGE_ESCAPE)
    )
}

/// A release milestone with its components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    /// Milestone title.
    pub title: String,
    /// Counters over every issue in the milestone, with or without a component.
    pub stats: Stats,
    /// Components, sorted by name.
    pub components: Vec<Component>,
}

/// A project subsystem within a milestone, taken from a `component: ` label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    /// Component name.
    pub name: String,
    /// Counters over the component's issues.
    pub stats: Stats,
    /// Issues: open before closed, unassigned before assigned, then by number.
    pub issues: Vec<ReportIssue>,
}

/// An issue together with the fields derived from its labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportIssue {
    /// The issue snapshot.
    #[serde(flatten)]
    pub issue: Issue,
    /// Value of the `type: ` label, if present.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Effort estimate in days; 0 when missing or malformed.
    pub days: u32,
}

impl ReportIssue {
    /// Sort key: `(closed, assigned, number)`, false before true.
    #[must_use]
    pub fn sort_key(&self) -> (bool, bool, u64) {
        (
            self.issue.is_closed(),
            self.issue.is_assigned(),
            self.issue.number,
        )
    }
}
