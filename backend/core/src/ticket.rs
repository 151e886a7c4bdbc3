//! Ticket identifier resolution: explicit arguments, default project prefix,
//! and extraction from source-control branch names.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TrackerError;

/// `PROJ-123` anywhere inside a branch segment.
static TICKET_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+-\d+").unwrap());

/// Normalise a ticket given on the command line. Purely numeric ids get the
/// default project prefix when one is configured.
pub fn normalize_ticket(arg: &str, default_prefix: Option<&str>) -> String {
    let arg = arg.trim();
    let numeric = !arg.is_empty() && arg.chars().all(|c| c.is_ascii_digit());
    match default_prefix.map(str::trim).filter(|p| !p.is_empty()) {
        Some(prefix) if numeric => format!("{prefix}-{arg}").to_uppercase(),
        _ => arg.to_uppercase(),
    }
}

/// Branch name from the `On branch <name>` line of `git status`.
pub fn branch_from_git_status(output: &str) -> Result<&str, TrackerError> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("On branch "))
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .ok_or(TrackerError::NoBranch)
}

/// First `KEY-123` found scanning the `/`-separated segments of `branch`.
pub fn ticket_from_branch(branch: &str) -> Result<String, TrackerError> {
    branch
        .split('/')
        .find_map(|segment| TICKET_PATTERN.find(segment))
        .map(|m| m.as_str().to_uppercase())
        .ok_or_else(|| TrackerError::NoTicketInBranch(branch.to_string()))
}

/// Web link to a ticket.
pub fn browse_url(base_url: &str, ticket: &str) -> String {
    format!("{}/browse/{ticket}", base_url.trim_end_matches('/'))
}
