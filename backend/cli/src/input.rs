//! Reading tracker payloads from a file or stdin.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Read and parse JSON from `path`, or from stdin when `path` is absent or `-`.
pub async fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let (raw, origin) = match path.filter(|p| *p != Path::new("-")) {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (raw, path.display().to_string())
        }
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read stdin")?;
            (raw, "stdin".to_string())
        }
    };

    debug!(origin = %origin, bytes = raw.len(), "Read payload");
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON from {origin}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn reads_json_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("doc.json");
        std::fs::write(&path, r#"{"type":"doc","content":[]}"#).unwrap();

        let value: Value = read_json(Some(&path)).await.unwrap();
        assert_eq!(value["type"], "doc");
    }

    #[tokio::test]
    async fn reports_bad_json_with_origin() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = read_json::<Value>(Some(&path)).await.unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
