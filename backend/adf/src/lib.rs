//! Rich-text document renderer
//!
//! Turns the issue tracker's structured description documents into readable,
//! indented terminal text. Headings, paragraphs, code blocks, nested lists,
//! links, inline cards, media and rules are rendered; anything else is shown
//! verbatim instead of failing the whole document.

pub mod diagnostics;
pub mod error;
pub mod list;
pub mod model;
pub mod renderer;
pub mod style;

pub use diagnostics::{DebugDir, DiagnosticSink, NullSink};
pub use error::RenderError;
pub use model::{Envelope, Node};
pub use renderer::{
    normalize_whitespace, RenderOptions, Renderer, DEFAULT_RULE_WIDTH, NO_DESCRIPTION,
};
