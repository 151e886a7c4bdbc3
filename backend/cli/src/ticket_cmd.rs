//! `tix ticket` / `tix link`: resolve the ticket being worked on.

use anyhow::{bail, Context, Result};
use tix_core::{branch_from_git_status, browse_url, normalize_ticket, ticket_from_branch};
use tracing::debug;

use crate::config::Config;

/// The ticket from the argument, or from the current git branch when absent.
pub async fn resolve(id: Option<&str>, config: &Config) -> Result<String> {
    if let Some(id) = id {
        return Ok(normalize_ticket(id, config.default_issue_prefix.as_deref()));
    }

    let status = git_status().await?;
    let branch = branch_from_git_status(&status)?;
    debug!(branch, "Resolving ticket from git branch");
    Ok(ticket_from_branch(branch)?)
}

pub async fn run_ticket(id: Option<&str>, config: &Config) -> Result<()> {
    println!("{}", resolve(id, config).await?);
    Ok(())
}

pub async fn run_link(id: Option<&str>, config: &Config) -> Result<()> {
    let base = config.base_url.as_deref().context("JIRA_URL not set")?;
    let ticket = resolve(id, config).await?;
    println!("{}", browse_url(base, &ticket));
    Ok(())
}

async fn git_status() -> Result<String> {
    let output = tokio::process::Command::new("git")
        .arg("status")
        .output()
        .await
        .context("Failed to run `git status`")?;

    if !output.status.success() {
        bail!(
            "`git status` failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn explicit_id_uses_default_prefix() {
        let config = Config {
            default_issue_prefix: Some("ABC".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve(Some("12"), &config).await.unwrap(), "ABC-12");
        assert_eq!(resolve(Some("xyz-3"), &config).await.unwrap(), "XYZ-3");
    }
}
