use thiserror::Error;
use tix_adf::RenderError;

/// Errors raised by the tracker domain layer.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("couldn't get git branch name")]
    NoBranch,

    #[error("can't figure out ticket from branch name: {0}")]
    NoTicketInBranch(String),

    #[error("{0} does not match a valid transition")]
    NoMatchingTransition(String),

    #[error("{query} matches too many transitions: {}", .candidates.join(", "))]
    AmbiguousTransition {
        query: String,
        candidates: Vec<String>,
    },

    #[error("no active sprint found")]
    NoActiveSprint,

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}
