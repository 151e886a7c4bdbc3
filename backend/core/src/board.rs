//! Sprint board summary: active sprint header and issues grouped by status.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tix_adf::style::colour_status;

use crate::dates::{format_date, parse_timestamp};
use crate::error::TrackerError;
use crate::issue::{Status, User};

const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub name: Option<String>,
    pub goal: Option<String>,
    pub state: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Sprint {
    pub fn is_active(&self) -> bool {
        self.state.as_deref() == Some("active")
    }
}

/// One page of a board's sprints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SprintPage {
    #[serde(default)]
    pub values: Vec<Sprint>,
}

impl SprintPage {
    pub fn active(&self) -> Result<&Sprint, TrackerError> {
        self.values
            .iter()
            .find(|s| s.is_active())
            .ok_or(TrackerError::NoActiveSprint)
    }
}

/// Issues of one sprint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SprintIssues {
    #[serde(default)]
    pub issues: Vec<BoardIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardIssue {
    pub key: String,
    pub fields: BoardIssueFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardIssueFields {
    #[serde(default)]
    pub summary: String,
    pub assignee: Option<User>,
    pub status: Status,
}

/// Issues sharing one status, in payload order.
#[derive(Debug, Clone)]
pub struct StatusGroup<'a> {
    pub status: &'a str,
    pub issues: Vec<&'a BoardIssue>,
}

/// Board column order. Unknown statuses sort last.
pub fn status_rank(status: &str) -> u32 {
    match status {
        "In Progress" => 10,
        "Review" => 20,
        "Done" => 30,
        _ => 9999,
    }
}

/// Group issues by status name. Groups are ordered by [`status_rank`]; equal
/// ranks keep first-seen order.
pub fn group_by_status(issues: &[BoardIssue]) -> Vec<StatusGroup<'_>> {
    let mut groups: Vec<StatusGroup<'_>> = Vec::new();
    for issue in issues {
        let status = issue.fields.status.name.as_str();
        match groups.iter_mut().find(|g| g.status == status) {
            Some(group) => group.issues.push(issue),
            None => groups.push(StatusGroup {
                status,
                issues: vec![issue],
            }),
        }
    }
    groups.sort_by_key(|g| status_rank(g.status));
    groups
}

/// Fractional days until the sprint ends; negative once it is over.
pub fn days_left(sprint: &Sprint, now: DateTime<Utc>) -> Option<f64> {
    let end = parse_timestamp(sprint.end_date.as_deref()?).ok()?;
    let ms = end.with_timezone(&Utc).signed_duration_since(now).num_milliseconds();
    Some(ms as f64 / MS_PER_DAY)
}

/// Today's date, sprint name and range, goal and remaining days.
pub fn format_sprint_header(sprint: &Sprint, now: DateTime<Utc>) -> String {
    let mut lines = vec![format!("Today: {}", format_date(&now)), String::new()];

    let date = |raw: &Option<String>| {
        raw.as_deref()
            .and_then(|r| parse_timestamp(r).ok())
            .map(|d| format_date(&d))
            .unwrap_or_else(|| "?".to_string())
    };
    let range = format!("{} - {}", date(&sprint.start_date), date(&sprint.end_date));
    match sprint.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => lines.push(format!("Sprint: {name} ({range})")),
        None => lines.push(range),
    }

    if let Some(goal) = sprint.goal.as_deref().filter(|g| !g.is_empty()) {
        lines.push(format!("Goal: {goal}"));
    }

    match days_left(sprint, now) {
        Some(days) if days > 0.0 => lines.push(format!("Days left: {days:.1}")),
        Some(days) => lines.push(format!("Sprint over ({days:.1} days)")),
        None => {}
    }

    lines.join("\n")
}

/// Status headings, each followed by `- KEY: summary - Assignee` lines.
pub fn format_board(groups: &[StatusGroup<'_>], color: bool) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("\n{}\n", colour_status(group.status, color)));
        for issue in &group.issues {
            out.push_str(&format!("- {}: {}", issue.key, issue.fields.summary));
            if let Some(user) = &issue.fields.assignee {
                out.push_str(&format!(" - {}", user.display_name));
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn issues() -> SprintIssues {
        serde_json::from_value(json!({
            "issues": [
                { "key": "A-1", "fields": { "summary": "todo one", "assignee": null, "status": { "name": "To Do" } } },
                { "key": "A-2", "fields": { "summary": "shipped", "assignee": { "displayName": "Kim" }, "status": { "name": "Done" } } },
                { "key": "A-3", "fields": { "summary": "doing", "assignee": { "displayName": "Lee" }, "status": { "name": "In Progress" } } },
                { "key": "A-4", "fields": { "summary": "todo two", "status": { "name": "To Do" } } },
                { "key": "A-5", "fields": { "summary": "check", "status": { "name": "Review" } } }
            ]
        }))
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap()
    }

    #[test]
    fn groups_in_board_order() {
        let payload = issues();
        let groups = group_by_status(&payload.issues);
        let order: Vec<&str> = groups.iter().map(|g| g.status).collect();
        assert_eq!(order, vec!["In Progress", "Review", "Done", "To Do"]);
        let todo: Vec<&str> = groups[3].issues.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(todo, vec!["A-1", "A-4"]);
    }

    #[test]
    fn formats_board_lines() {
        let payload = issues();
        let out = format_board(&group_by_status(&payload.issues), false);
        assert!(out.starts_with("\nIn Progress\n- A-3: doing - Lee\n"));
        assert!(out.contains("\nTo Do\n- A-1: todo one\n- A-4: todo two\n"));
    }

    #[test]
    fn header_with_days_left() {
        let sprint = Sprint {
            name: Some("Sprint 9".into()),
            goal: Some("Ship it".into()),
            state: Some("active".into()),
            start_date: Some("2026-10-13T00:00:00.000Z".into()),
            end_date: Some("2026-10-20T12:00:00.000Z".into()),
        };
        assert_eq!(
            format_sprint_header(&sprint, now()),
            "Today: 17 Oct 2026\n\nSprint: Sprint 9 (13 Oct 2026 - 20 Oct 2026)\nGoal: Ship it\nDays left: 3.5"
        );
    }

    #[test]
    fn header_for_finished_unnamed_sprint() {
        let sprint = Sprint {
            start_date: Some("2026-10-01T00:00:00.000Z".into()),
            end_date: Some("2026-10-15T00:00:00.000Z".into()),
            ..Default::default()
        };
        assert_eq!(
            format_sprint_header(&sprint, now()),
            "Today: 17 Oct 2026\n\n1 Oct 2026 - 15 Oct 2026\nSprint over (-2.0 days)"
        );
    }

    #[test]
    fn finds_active_sprint() {
        let page: SprintPage = serde_json::from_value(json!({
            "values": [{ "state": "closed", "name": "old" }, { "state": "active", "name": "now" }]
        }))
        .unwrap();
        assert_eq!(page.active().unwrap().name.as_deref(), Some("now"));
        assert!(SprintPage::default().active().is_err());
    }
}
