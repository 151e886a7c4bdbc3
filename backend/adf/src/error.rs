use std::path::PathBuf;
use thiserror::Error;

/// Failure to render a document as a whole.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The root is not a `doc` envelope, or its content is not a node list.
    /// `dump` points at the diagnostic copy of the offending structure.
    #[error("invalid document envelope: {reason}")]
    InvalidEnvelope {
        reason: String,
        dump: Option<PathBuf>,
    },
}
