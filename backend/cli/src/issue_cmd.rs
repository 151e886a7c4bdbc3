//! `tix issue`: show an issue payload with its description and comments.

use std::path::Path;

use anyhow::Result;
use tix_adf::Renderer;
use tix_core::{Issue, IssueFormatter};
use tracing::info;

use crate::config::Config;
use crate::input::read_json;

pub async fn run(
    renderer: &Renderer,
    config: &Config,
    file: Option<&Path>,
    comments: bool,
) -> Result<()> {
    let issue: Issue = read_json(file).await?;
    info!(key = %issue.key, comments = issue.comments().len(), "Showing issue");

    let formatter = IssueFormatter::new(renderer).with_base_url(config.base_url.as_deref());
    println!("{}", formatter.format_issue(&issue)?);
    println!();
    if comments {
        println!("{}", formatter.format_comments(&issue)?);
    } else {
        println!("{}", formatter.comments_hint(&issue));
    }
    Ok(())
}
