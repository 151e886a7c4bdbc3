//! Issue-tracker domain types and formatting for the `tix` CLI.
//!
//! Payloads are read as already-fetched JSON; rich-text fields are rendered
//! through `tix-adf`.

pub mod board;
pub mod dates;
pub mod error;
pub mod issue;
pub mod ticket;
pub mod transition;

pub use board::{group_by_status, status_rank, Sprint, SprintIssues, SprintPage, StatusGroup};
pub use error::TrackerError;
pub use issue::{Comment, Issue, IssueFormatter, User};
pub use ticket::{branch_from_git_status, browse_url, normalize_ticket, ticket_from_branch};
pub use transition::{match_transition, Transition, TransitionList};
