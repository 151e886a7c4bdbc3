//! Diagnostic side channel for documents the renderer refuses.
//!
//! Dumps are write-only: nothing in the renderer ever reads them back.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Receives the raw structure of a rejected document.
pub trait DiagnosticSink: Send + Sync {
    /// Record `payload` under `name`. Returns where it was written, if anywhere.
    fn dump(&self, name: &str, payload: &Value) -> Option<PathBuf>;
}

/// Discards every dump.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn dump(&self, _name: &str, _payload: &Value) -> Option<PathBuf> {
        None
    }
}

/// Writes dumps as pretty-printed JSON to `<dir>/.<name>.json`.
#[derive(Debug, Clone)]
pub struct DebugDir {
    dir: PathBuf,
}

impl DebugDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!(".{name}.json"))
    }

    fn write(&self, path: &Path, payload: &Value) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_string_pretty(payload)?;
        fs::write(path, body)
    }
}

impl DiagnosticSink for DebugDir {
    fn dump(&self, name: &str, payload: &Value) -> Option<PathBuf> {
        let path = self.path_for(name);
        match self.write(&path, payload) {
            Ok(()) => {
                debug!(path = %path.display(), "Wrote diagnostic dump");
                Some(path)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to write diagnostic dump");
                None
            }
        }
    }
}
