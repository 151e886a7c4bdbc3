//! `tix transition`: pick a workflow transition by id or name prefix.

use std::path::Path;

use anyhow::Result;
use tix_core::{match_transition, TransitionList};
use tracing::info;

use crate::input::read_json;
use crate::terminal_output::note_warn;

pub async fn run(query: &str, file: Option<&Path>) -> Result<()> {
    let list: TransitionList = read_json(file).await?;
    if list.transitions.is_empty() {
        note_warn("No transitions available");
        return Ok(());
    }

    let transition = match_transition(&list.transitions, query)?;
    info!(id = %transition.id, name = %transition.name, "Matched transition");
    println!("{} {}", transition.id, transition.name);
    Ok(())
}
