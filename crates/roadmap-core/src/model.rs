// SPDX-License-Identifier: Apache-2.0

//! Issue snapshot types.
//!
//! These mirror the subset of a GitHub issue that the report needs and are
//! what the issue cache stores on disk. Instances are built once per run and
//! never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub issue as fetched from the repository issue list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number, unique within the repository.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Web URL of the issue.
    pub html_url: String,
    /// Milestone the issue is scheduled for, if any.
    pub milestone: Option<MilestoneRef>,
    /// Labels in the order returned by the API.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Assigned user, if any.
    pub assignee: Option<Assignee>,
    /// When the issue was closed. `None` means the issue is open.
    pub closed_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Returns true if the issue has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }

    /// Returns true if someone is assigned to the issue.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }
}

/// Reference to the milestone an issue belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRef {
    /// Milestone title, used as the grouping key.
    pub title: String,
}

/// An issue label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name, e.g. `component: api`.
    pub name: String,
}

/// The user an issue is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// GitHub login.
    pub login: String,
    /// Profile URL.
    pub html_url: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

impl From<octocrab::models::issues::Issue> for Issue {
    fn from(issue: octocrab::models::issues::Issue) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            html_url: issue.html_url.to_string(),
            milestone: issue.milestone.map(|m| MilestoneRef { title: m.title }),
            labels: issue
                .labels
                .into_iter()
                .map(|l| Label { name: l.name })
                .collect(),
            assignee: issue.assignee.map(|a| Assignee {
                login: a.login,
                html_url: a.html_url.to_string(),
                avatar_url: a.avatar_url.to_string(),
            }),
            closed_at: issue.closed_at,
        }
    }
}
