//! `tix render`: print a rich-text document.

use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use tix_adf::Renderer;

use crate::input::read_json;

pub async fn run(renderer: &Renderer, file: Option<&Path>) -> Result<()> {
    let payload: Value = read_json(file).await?;
    println!("{}", render_payload(renderer, &payload)?);
    Ok(())
}

/// Accepts a document envelope or a whole issue payload, in which case its
/// description is rendered.
fn render_payload(renderer: &Renderer, payload: &Value) -> Result<String> {
    let document = payload.pointer("/fields/description").unwrap_or(payload);
    Ok(renderer.render_value(Some(document))?)
}
