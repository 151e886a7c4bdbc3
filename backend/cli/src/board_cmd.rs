//! `tix board`: active sprint header and issues grouped by status.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use tix_core::board::{format_board, format_sprint_header};
use tix_core::{group_by_status, Sprint, SprintIssues, SprintPage};

use crate::input::read_json;

pub async fn run(file: Option<&Path>, sprint_file: Option<&Path>, color: bool) -> Result<()> {
    if let Some(path) = sprint_file {
        let raw: Value = read_json(Some(path)).await?;
        let sprint = pick_sprint(raw)?;
        println!("{}", format_sprint_header(&sprint, Utc::now()));
    }

    let payload: SprintIssues = read_json(file).await?;
    print!("{}", format_board(&group_by_status(&payload.issues), color));
    Ok(())
}

/// A sprint file holds either one sprint or a page of them; pages yield
/// their active sprint.
fn pick_sprint(raw: Value) -> Result<Sprint> {
    if raw.get("values").is_some() {
        let page: SprintPage = serde_json::from_value(raw).context("Failed to parse sprint page")?;
        return Ok(page.active()?.clone());
    }
    serde_json::from_value(raw).context("Failed to parse sprint")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn picks_active_sprint_from_page() {
        let page = json!({ "values": [
            { "name": "S1", "state": "closed" },
            { "name": "S2", "state": "active" }
        ]});
        assert_eq!(pick_sprint(page).unwrap().name.as_deref(), Some("S2"));
    }

    #[test]
    fn accepts_single_sprint() {
        let sprint = json!({ "name": "Solo", "endDate": "2026-10-20T00:00:00.000Z" });
        assert_eq!(pick_sprint(sprint).unwrap().name.as_deref(), Some("Solo"));
    }

    #[test]
    fn page_without_active_sprint_fails() {
        let page = json!({ "values": [{ "name": "S1", "state": "future" }] });
        assert!(pick_sprint(page).is_err());
    }
}
