// SPDX-License-Identifier: Apache-2.0

//! Report rendering.
//!
//! Walks the aggregated milestones and builds the report text. Rendering is
//! pure: no I/O happens here, the caller decides where the text goes.
//!
//! User-controlled text (titles, milestone and component names) is escaped
//! for the target format.

use std::fmt::Write;

use serde::Deserialize;

use crate::Result;
use crate::error::RoadmapError;
use crate::report::{Component, Milestone, ReportIssue, Stats};

/// Text layout of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// HTML table with shields.io badges.
    #[default]
    Html,
    /// Markdown headings and bullet list.
    Markdown,
    /// Pretty-printed JSON of the aggregated milestones.
    Json,
}

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output layout.
    pub style: ReportStyle,
    /// Show day estimates (badges, column, counters).
    pub estimates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: ReportStyle::Html,
            estimates: true,
        }
    }
}

/// Renders the milestones into report text.
///
/// `estimates` has no effect on JSON, which always carries the counters.
///
/// # Errors
///
/// Returns [`RoadmapError::Serialization`] if JSON serialization fails.
pub fn render(milestones: &[Milestone], options: &RenderOptions) -> Result<String> {
    match options.style {
        ReportStyle::Html => Ok(render_html(milestones, options.estimates)),
        ReportStyle::Markdown => Ok(render_markdown(milestones, options.estimates)),
        ReportStyle::Json => render_json(milestones),
    }
}

fn render_json(milestones: &[Milestone]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(milestones).map_err(RoadmapError::Serialization)?;
    json.push('\n');
    Ok(json)
}

fn render_html(milestones: &[Milestone], estimates: bool) -> String {
    let columns = if estimates { 6 } else { 5 };
    let mut out = String::new();

    out.push_str("<table>\n\t<thead>\n\t</thead>\n\t<tbody>\n");
    for milestone in milestones {
        html_heading(&mut out, "h3", &milestone.title, &milestone.stats, columns, estimates);
        for component in &milestone.components {
            html_heading(&mut out, "h6", &component.name, &component.stats, columns, estimates);
            for issue in &component.issues {
                html_issue_row(&mut out, issue, estimates);
            }
        }
    }
    out.push_str("\t</tbody>\n</table>\n");

    out
}

fn html_heading(
    out: &mut String,
    tag: &str,
    name: &str,
    stats: &Stats,
    columns: u8,
    estimates: bool,
) {
    let _ = writeln!(out, "\t\t<tr>\n\t\t\t<td colspan=\"{columns}\">");
    let _ = write!(out, "\t\t\t\t<{tag}>{}", escape_html(name));
    if estimates {
        let _ = write!(
            out,
            " <img hspace=\"5\" align=\"right\" src=\"{}\" />",
            stats.days_badge()
        );
    }
    let _ = writeln!(
        out,
        " <img hspace=\"5\" align=\"right\" src=\"{}\" /></{tag}>",
        stats.completed_badge()
    );
    out.push_str("\t\t\t</td>\n\t\t</tr>\n");
}

fn html_issue_row(out: &mut String, entry: &ReportIssue, estimates: bool) {
    let issue = &entry.issue;

    out.push_str("\t\t<tr>\n");
    let _ = writeln!(
        out,
        "\t\t\t<td><a href=\"{}\">#{}</a></td>",
        escape_html(&issue.html_url),
        issue.number
    );
    match &entry.kind {
        Some(kind) => {
            let _ = writeln!(out, "\t\t\t<td><kbd>{}</kbd></td>", escape_html(kind));
        }
        None => out.push_str("\t\t\t<td></td>\n"),
    }
    if estimates {
        if entry.days > 0 {
            let _ = writeln!(out, "\t\t\t<td>{}d</td>", entry.days);
        } else {
            out.push_str("\t\t\t<td></td>\n");
        }
    }
    let _ = writeln!(out, "\t\t\t<td>{}</td>", escape_html(&issue.title));
    match &issue.assignee {
        Some(assignee) => {
            let _ = writeln!(
                out,
                "\t\t\t<td width=\"60\"><a href=\"{}\"><img valign=\"middle\" height=\"30\" width=\"30\" src=\"{}\" /></a></td>",
                escape_html(&assignee.html_url),
                escape_html(&assignee.avatar_url)
            );
        }
        None => out.push_str("\t\t\t<td width=\"60\"></td>\n"),
    }
    if issue.is_closed() {
        out.push_str("\t\t\t<td>☑️</td>\n");
    } else {
        out.push_str("\t\t\t<td></td>\n");
    }
    out.push_str("\t\t</tr>\n");
}

fn render_markdown(milestones: &[Milestone], estimates: bool) -> String {
    let mut out = String::new();

    for milestone in milestones {
        let _ = writeln!(
            out,
            "### {} ({})\n",
            escape_markdown(&milestone.title),
            counters(&milestone.stats, estimates)
        );
        for component in &milestone.components {
            markdown_component(&mut out, component, estimates);
        }
    }

    out
}

fn markdown_component(out: &mut String, component: &Component, estimates: bool) {
    let _ = writeln!(
        out,
        "#### {} ({})\n",
        escape_markdown(&component.name),
        counters(&component.stats, estimates)
    );

    for entry in &component.issues {
        let issue = &entry.issue;
        let _ = write!(out, "- [#{}]({})", issue.number, issue.html_url);
        if let Some(kind) = &entry.kind {
            let _ = write!(out, " `{kind}`");
        }
        if estimates && entry.days > 0 {
            let _ = write!(out, " {}d", entry.days);
        }
        let _ = write!(out, " {}", escape_markdown(&issue.title));
        if let Some(assignee) = &issue.assignee {
            let _ = write!(
                out,
                " [![@{}]({})]({})",
                assignee.login, assignee.avatar_url, assignee.html_url
            );
        }
        if issue.is_closed() {
            out.push_str(" ☑️");
        }
        out.push('\n');
    }
    out.push('\n');
}

fn counters(stats: &Stats, estimates: bool) -> String {
    if estimates {
        format!("{}/{} closed, {}d remaining", stats.closed, stats.total, stats.days)
    } else {
        format!("{}/{} closed", stats.closed, stats.total)
    }
}

/// Escapes inline Markdown syntax and folds line breaks into spaces so the
/// text stays inside its heading or bullet.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '|' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push(' ');
            }
            '\n' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes text for use in HTML element content and attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::{Assignee, Issue};

    fn entry(number: u64, kind: Option<&str>, days: u32) -> ReportIssue {
        ReportIssue {
            issue: Issue {
                number,
                title: format!("Issue {number}"),
                html_url: format!("https://github.com/o/r/issues/{number}"),
                milestone: None,
                labels: vec![],
                assignee: None,
                closed_at: None,
            },
            kind: kind.map(str::to_string),
            days,
        }
    }

    fn sample() -> Vec<Milestone> {
        let mut done = entry(2, None, 0);
        done.issue.closed_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
        done.issue.assignee = Some(Assignee {
            login: "octocat".to_string(),
            html_url: "https://github.com/octocat".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/1".to_string(),
        });

        vec![Milestone {
            title: "v1.0".to_string(),
            stats: Stats {
                closed: 1,
                total: 3,
                days: 3,
            },
            components: vec![Component {
                name: "api".to_string(),
                stats: Stats {
                    closed: 1,
                    total: 2,
                    days: 3,
                },
                issues: vec![entry(1, Some("bug"), 3), done],
            }],
        }]
    }

    #[test]
    fn test_render_html_structure() {
        let html = render(&sample(), &RenderOptions::default()).unwrap();

        assert!(html.starts_with("<table>"));
        assert!(html.trim_end().ends_with("</table>"));
        assert!(html.contains("<h3>v1.0 "));
        assert!(html.contains("<h6>api "));
        assert!(html.contains("completed-1%2F3-blue"));
        assert!(html.contains("remaining-3d-green"));
        assert!(html.contains("<a href=\"https://github.com/o/r/issues/1\">#1</a>"));
        assert!(html.contains("<td><kbd>bug</kbd></td>"));
        assert!(html.contains("<td>3d</td>"));
        assert!(html.contains("<td>Issue 1</td>"));
        assert!(html.contains("src=\"https://avatars.githubusercontent.com/u/1\""));
        assert_eq!(html.matches("☑️").count(), 1);
        assert!(html.contains("colspan=\"6\""));
    }

    #[test]
    fn test_render_html_optional_fields_are_empty_cells() {
        let html = render(&sample(), &RenderOptions::default()).unwrap();

        // Issue 2 has no type, no estimate; issue 1 has no assignee.
        assert!(html.contains("<td width=\"60\"></td>"));
        assert!(!html.contains("<kbd></kbd>"));
        assert!(!html.contains("0d</td>"));
    }

    #[test]
    fn test_render_html_without_estimates() {
        let options = RenderOptions {
            style: ReportStyle::Html,
            estimates: false,
        };
        let html = render(&sample(), &options).unwrap();

        assert!(!html.contains("remaining-"));
        assert!(!html.contains("<td>3d</td>"));
        assert!(html.contains("colspan=\"5\""));
    }

    #[test]
    fn test_render_html_escapes_text() {
        let mut milestones = sample();
        milestones[0].components[0].issues[0].issue.title = "Fix <script> & \"quotes\"".to_string();

        let html = render(&milestones, &RenderOptions::default()).unwrap();

        assert!(html.contains("Fix &lt;script&gt; &amp; &#34;quotes&#34;"));
    }

    #[test]
    fn test_render_html_empty() {
        let html = render(&[], &RenderOptions::default()).unwrap();
        assert!(!html.contains("<tr>"));
    }

    #[test]
    fn test_render_markdown() {
        let options = RenderOptions {
            style: ReportStyle::Markdown,
            estimates: true,
        };
        let md = render(&sample(), &options).unwrap();

        assert!(md.contains("### v1.0 (1/3 closed, 3d remaining)"));
        assert!(md.contains("#### api (1/2 closed, 3d remaining)"));
        assert!(md.contains("- [#1](https://github.com/o/r/issues/1) `bug` 3d Issue 1\n"));
        assert!(md.contains(
            "- [#2](https://github.com/o/r/issues/2) Issue 2 [![@octocat](https://avatars.githubusercontent.com/u/1)](https://github.com/octocat) ☑️\n"
        ));
    }

    #[test]
    fn test_render_markdown_without_estimates() {
        let options = RenderOptions {
            style: ReportStyle::Markdown,
            estimates: false,
        };
        let md = render(&sample(), &options).unwrap();

        assert!(md.contains("### v1.0 (1/3 closed)"));
        assert!(md.contains("- [#1](https://github.com/o/r/issues/1) `bug` Issue 1\n"));
    }

    #[test]
    fn test_render_markdown_empty() {
        let options = RenderOptions {
            style: ReportStyle::Markdown,
            estimates: true,
        };
        assert!(render(&[], &options).unwrap().is_empty());
    }

    #[test]
    fn test_render_markdown_escapes_text() {
        let mut milestones = sample();
        milestones[0].title = "v1 [beta]".to_string();
        milestones[0].components[0].name = "core_api".to_string();
        milestones[0].components[0].issues[0].issue.title =
            "Crash on [link](x)\nin *bold*".to_string();
        let options = RenderOptions {
            style: ReportStyle::Markdown,
            estimates: true,
        };

        let md = render(&milestones, &options).unwrap();

        assert!(md.contains("### v1 \\[beta\\] (1/3 closed, 3d remaining)"));
        assert!(md.contains("#### core\\_api (1/2 closed, 3d remaining)"));
        assert!(md.contains(" 3d Crash on \\[link\\](x) in \\*bold\\*\n"));
        // Every issue stays on a single bullet line
        assert_eq!(md.lines().filter(|l| l.starts_with("- ")).count(), 2);
    }

    #[test]
    fn test_escape_markdown_folds_crlf() {
        assert_eq!(escape_markdown("a\r\nb\rc"), "a b c");
        assert_eq!(escape_markdown("plain text"), "plain text");
    }

    #[test]
    fn test_render_json() {
        let options = RenderOptions {
            style: ReportStyle::Json,
            estimates: false,
        };
        let json = render(&sample(), &options).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(json.ends_with('\n'));
        assert_eq!(parsed[0]["title"], "v1.0");
        assert_eq!(parsed[0]["stats"]["days"], 3);
        assert_eq!(parsed[0]["components"][0]["name"], "api");
        assert_eq!(parsed[0]["components"][0]["issues"][0]["type"], "bug");
        assert_eq!(parsed[0]["components"][0]["issues"][0]["number"], 1);
    }

    #[test]
    fn test_render_json_empty() {
        let options = RenderOptions {
            style: ReportStyle::Json,
            estimates: true,
        };
        assert_eq!(render(&[], &options).unwrap(), "[]\n");
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
