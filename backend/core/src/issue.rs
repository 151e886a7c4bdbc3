//! Issue payloads and their terminal summary.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;
use tix_adf::style::{colour_status, colour_url};
use tix_adf::Renderer;

use crate::dates::{format_date, parse_timestamp};
use crate::error::TrackerError;
use crate::ticket::browse_url;

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    pub status: Option<Status>,
    pub assignee: Option<User>,
    /// Rich-text description, kept raw until rendered.
    pub description: Option<Value>,
    pub comment: Option<CommentPage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Status {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub display_name: String,
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub author: Option<User>,
    pub body: Option<Value>,
    #[serde(default)]
    pub created: String,
}

impl Comment {
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.created).ok()
    }

    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.display_name.as_str())
            .unwrap_or("Unknown")
    }
}

impl Issue {
    pub fn status_name(&self) -> &str {
        self.fields
            .status
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("Unknown")
    }

    pub fn comments(&self) -> &[Comment] {
        self.fields
            .comment
            .as_ref()
            .map(|page| page.comments.as_slice())
            .unwrap_or_default()
    }
}

/// Formats issues for the terminal using a shared document renderer.
pub struct IssueFormatter<'a> {
    renderer: &'a Renderer,
    base_url: Option<&'a str>,
}

impl<'a> IssueFormatter<'a> {
    pub fn new(renderer: &'a Renderer) -> Self {
        Self {
            renderer,
            base_url: None,
        }
    }

    /// Tracker base URL used to print a browse link.
    pub fn with_base_url(mut self, base_url: Option<&'a str>) -> Self {
        self.base_url = base_url;
        self
    }

    fn color(&self) -> bool {
        self.renderer.options().color
    }

    /// Header lines followed by the rendered description.
    pub fn format_issue(&self, issue: &Issue) -> Result<String, TrackerError> {
        let mut out = format!("{}: {}\n", issue.key, issue.fields.summary);
        out.push_str(&format!(
            "Status: {}\n",
            colour_status(issue.status_name(), self.color())
        ));
        match &issue.fields.assignee {
            Some(user) => out.push_str(&format!("Assignee: {}\n", user.display_name)),
            None => out.push_str("Assignee: Unassigned\n"),
        }
        if let Some(base) = self.base_url {
            let link = browse_url(base, &issue.key);
            out.push_str(&format!("{}\n", colour_url(&link, self.color())));
        }
        out.push('\n');
        out.push_str(&self.renderer.render_value(issue.fields.description.as_ref())?);
        Ok(out)
    }

    /// All comments, newest first. Comments with unreadable dates go last.
    pub fn format_comments(&self, issue: &Issue) -> Result<String, TrackerError> {
        let mut comments: Vec<&Comment> = issue.comments().iter().collect();
        if comments.is_empty() {
            return Ok("No comments".to_string());
        }
        comments.sort_by_key(|c| std::cmp::Reverse(c.created_at()));

        let mut out = String::from("Comments - newest first\n");
        for comment in comments {
            let date = comment
                .created_at()
                .map(|d| format_date(&d))
                .unwrap_or_else(|| comment.created.clone());
            let body = self.renderer.render_value(comment.body.as_ref())?;
            out.push_str(&format!("\n{date}: {}\n{body}\n", comment.author_name()));
        }
        Ok(out.trim_end().to_string())
    }

    /// One-line pointer to the comments when they are not shown.
    pub fn comments_hint(&self, issue: &Issue) -> String {
        match issue.comments().len() {
            0 => "No comments".to_string(),
            1 => format!("Type `tix issue {} --comments` to see 1 comment", issue.key),
            n => format!("Type `tix issue {} --comments` to see {n} comments", issue.key),
        }
    }
}
