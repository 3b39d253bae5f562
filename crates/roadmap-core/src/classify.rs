// SPDX-License-Identifier: Apache-2.0

//! Issue classification and aggregation.
//!
//! Buckets a flat issue list into milestones and components, keeps the
//! closed/total and remaining-days counters, and sorts the result.
//!
//! Label conventions:
//! - `component: <name>` - the component the issue belongs to
//! - `type: <name>` - free-form issue type shown next to the number
//! - `estimate: <n>d` or `estimate: <n>w` - effort in days (a week is 5 days)
//!
//! When a label kind appears more than once on an issue, the last one in API
//! order wins. A bare `component: ` label means "no component".

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::model::{Issue, Label};
use crate::report::{Component, Milestone, ReportIssue, Stats};

const COMPONENT_PREFIX: &str = "component: ";
const TYPE_PREFIX: &str = "type: ";
const ESTIMATE_PREFIX: &str = "estimate: ";

/// Working days per week for `w` estimates.
const DAYS_PER_WEEK: u32 = 5;

/// Fields derived from an issue's labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelInfo {
    /// Component name from `component: `.
    pub component: Option<String>,
    /// Issue type from `type: `.
    pub kind: Option<String>,
    /// Day estimate from `estimate: `, 0 if absent or malformed.
    pub days: u32,
}

impl LabelInfo {
    /// Scans the labels once.
    #[must_use]
    pub fn from_labels(labels: &[Label]) -> Self {
        let mut info = Self::default();

        for label in labels {
            let name = label.name.as_str();
            if let Some(component) = name.strip_prefix(COMPONENT_PREFIX) {
                // An empty name clears any earlier component label
                info.component = Some(component.to_string()).filter(|c| !c.is_empty());
            } else if let Some(kind) = name.strip_prefix(TYPE_PREFIX) {
                info.kind = Some(kind.to_string());
            } else if let Some(estimate) = name.strip_prefix(ESTIMATE_PREFIX) {
                info.days = parse_estimate(estimate);
            }
        }

        info
    }
}

/// Parses the text after `estimate: ` into days.
///
/// `3d` is 3 days and `2w` is 10 days. Anything else, including a zero or
/// negative count, yields 0.
#[must_use]
pub fn parse_estimate(text: &str) -> u32 {
    let text = text.trim();

    let (count, multiplier) = if let Some(count) = text.strip_suffix('d') {
        (count, 1)
    } else if let Some(count) = text.strip_suffix('w') {
        (count, DAYS_PER_WEEK)
    } else {
        return 0;
    };

    match count.parse::<u32>() {
        Ok(n) if n > 0 => n.saturating_mul(multiplier),
        _ => 0,
    }
}

/// Groups issues into the requested milestones.
///
/// Issues without a milestone are skipped. Issues without a component label
/// count toward their milestone's counters but are not listed under any
/// component. The result follows the order of `requested`; names that do not
/// match any milestone are dropped.
#[instrument(skip_all, fields(issues = issues.len(), requested = requested.len()))]
pub fn aggregate<S: AsRef<str>>(issues: &[Issue], requested: &[S]) -> Vec<Milestone> {
    let mut milestones: Vec<Milestone> = Vec::new();
    let mut milestone_index: HashMap<String, usize> = HashMap::new();
    let mut component_index: HashMap<(usize, String), usize> = HashMap::new();
    let mut skipped = 0usize;

    for issue in issues {
        let Some(milestone_ref) = &issue.milestone else {
            skipped += 1;
            continue;
        };

        let ms = *milestone_index
            .entry(milestone_ref.title.clone())
            .or_insert_with(|| {
                milestones.push(Milestone {
                    title: milestone_ref.title.clone(),
                    stats: Stats::default(),
                    components: Vec::new(),
                });
                milestones.len() - 1
            });

        let info = LabelInfo::from_labels(&issue.labels);
        let closed = issue.is_closed();
        milestones[ms].stats.record(closed, info.days);

        let Some(component_name) = info.component else {
            continue;
        };

        let components = &mut milestones[ms].components;
        let cmp = *component_index
            .entry((ms, component_name.clone()))
            .or_insert_with(|| {
                components.push(Component {
                    name: component_name,
                    stats: Stats::default(),
                    issues: Vec::new(),
                });
                components.len() - 1
            });

        let component = &mut components[cmp];
        component.stats.record(closed, info.days);
        component.issues.push(ReportIssue {
            issue: issue.clone(),
            kind: info.kind,
            days: info.days,
        });
    }

    for milestone in &mut milestones {
        for component in &mut milestone.components {
            component.issues.sort_by_key(ReportIssue::sort_key);
        }
        milestone.components.sort_by(|a, b| a.name.cmp(&b.name));
    }

    debug!(
        milestones = milestones.len(),
        skipped_unscheduled = skipped,
        "Aggregated issues"
    );

    requested
        .iter()
        .filter_map(|name| {
            milestone_index
                .get(name.as_ref())
                .map(|&idx| milestones[idx].clone())
        })
        .collect()
}
