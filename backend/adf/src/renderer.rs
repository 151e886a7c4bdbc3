//! Renders the document model to terminal text.
//!
//! Every block renderer assumes it owns its leading separation and emits
//! blank lines generously; [`normalize_whitespace`] de-duplicates them once the
//! whole document has been concatenated.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::diagnostics::{DiagnosticSink, NullSink};
use crate::error::RenderError;
use crate::model::{Container, Envelope, Heading, Media, Node, Text};
use crate::style::colour_url;

/// Sentinel shown for tickets without a description.
pub const NO_DESCRIPTION: &str = "No description.";

/// Rule width used when the caller cannot measure the terminal.
pub const DEFAULT_RULE_WIDTH: usize = 80;

const PICTURE_PLACEHOLDER: &str = "\n\n_picture-goes-here_\n\n";
const FILE_PLACEHOLDER: &str = "\n\n_file-goes-here_\n\n";

/// Name of the dump written when an envelope is rejected.
const REJECTED_DUMP: &str = "description-to-markdown";

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of the dash line drawn for `rule` nodes.
    pub rule_width: usize,
    /// Emit ANSI styling for links.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rule_width: DEFAULT_RULE_WIDTH,
            color: false,
        }
    }
}

impl RenderOptions {
    /// A zero width (unmeasurable terminal) falls back to the default.
    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = if width == 0 { DEFAULT_RULE_WIDTH } else { width };
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Stateless document renderer. One instance can render any number of
/// documents; renders never share state.
pub struct Renderer {
    options: RenderOptions,
    sink: Box<dyn DiagnosticSink>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            sink: Box::new(NullSink),
        }
    }

    /// Route rejected documents to `sink`.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    // -----------------------------------------------------------------------
    // Document
    // -----------------------------------------------------------------------

    /// Render a whole document. A missing envelope is not an error and yields
    /// [`NO_DESCRIPTION`].
    pub fn render(&self, envelope: Option<&Envelope>) -> Result<String, RenderError> {
        let Some(envelope) = envelope else {
            return Ok(NO_DESCRIPTION.to_string());
        };

        if envelope.kind != Envelope::DOC {
            return Err(self.reject(
                &envelope.content,
                format!("unexpected document type `{}`", envelope.kind),
            ));
        }

        let nodes = if envelope.content.is_null() {
            Vec::new()
        } else {
            Vec::<Node>::deserialize(&envelope.content).map_err(|e| {
                self.reject(&envelope.content, format!("content is not a node list: {e}"))
            })?
        };

        Ok(self.render_nodes(&nodes))
    }

    /// Render a description taken straight from a tracker payload. `null` and
    /// absent values count as "no description".
    pub fn render_value(&self, value: Option<&Value>) -> Result<String, RenderError> {
        match value {
            None | Some(Value::Null) => self.render(None),
            Some(raw) => {
                let envelope = Envelope::deserialize(raw)
                    .map_err(|e| self.reject(raw, format!("not a document envelope: {e}")))?;
                self.render(Some(&envelope))
            }
        }
    }

    /// Concatenate top-level nodes in document order and normalize whitespace.
    pub fn render_nodes(&self, nodes: &[Node]) -> String {
        let raw: String = nodes.iter().map(|n| self.render_node(n)).collect();
        normalize_whitespace(&raw)
    }

    /// Total dispatch over node kinds.
    pub fn render_node(&self, node: &Node) -> String {
        match node {
            Node::Text(_) | Node::InlineCard(_) => self.render_text(node),
            Node::BulletList(list) => self.render_bullet_list(list),
            Node::OrderedList(list) => self.render_ordered_list(list),
            // A stray item outside any list still shows up as a bullet.
            Node::ListItem(item) => self.render_list_item(item, None),
            _ => self.render_block(node),
        }
    }

    fn reject(&self, payload: &Value, reason: String) -> RenderError {
        let dump = self.sink.dump(REJECTED_DUMP, payload);
        warn!(reason = %reason, "Refusing to render document");
        let reason = match &dump {
            Some(path) => format!("{reason}; see {} for details", path.display()),
            None => reason,
        };
        RenderError::InvalidEnvelope { reason, dump }
    }

    // -----------------------------------------------------------------------
    // Inline
    // -----------------------------------------------------------------------

    /// Render a leaf node. Non-inline nodes found in inline position go
    /// through the general dispatch.
    pub fn render_text(&self, node: &Node) -> String {
        match node {
            Node::Text(text) => self.render_text_run(text),
            Node::InlineCard(card) => {
                format!("({})", colour_url(&card.attrs.url, self.options.color))
            }
            other => self.render_node(other),
        }
    }

    fn render_text_run(&self, text: &Text) -> String {
        match text.link_href() {
            Some(href) if href == text.text => colour_url(href, self.options.color),
            Some(href) => format!("[{}]({})", text.text, colour_url(href, self.options.color)),
            None => text.text.clone(),
        }
    }

    fn render_inline_run(&self, children: &[Node]) -> String {
        children.iter().map(|c| self.render_text(c)).collect()
    }

    // -----------------------------------------------------------------------
    // Blocks
    // -----------------------------------------------------------------------

    pub fn render_block(&self, node: &Node) -> String {
        match node {
            Node::Heading(heading) => self.render_heading(heading),
            Node::Paragraph(block) | Node::CodeBlock(block) => self.render_paragraph(block),
            Node::MediaSingle(media) | Node::MediaGroup(media) => render_media(media),
            Node::Rule => format!("\n\n{}\n\n", "-".repeat(self.options.rule_width)),
            Node::Unknown(raw) => render_fallback(node.kind(), raw),
            other => self.render_node(other),
        }
    }

    fn render_heading(&self, heading: &Heading) -> String {
        let hashes = "#".repeat(usize::from(heading.attrs.level));
        format!("\n\n{hashes} {}", self.render_inline_run(&heading.content))
    }

    fn render_paragraph(&self, block: &Container) -> String {
        format!("\n\n{}", self.render_inline_run(&block.content))
    }
}

fn render_media(media: &Media) -> String {
    media
        .content
        .iter()
        .map(|r| if r.is_picture() { PICTURE_PLACEHOLDER } else { FILE_PLACEHOLDER })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Unrecognised nodes are shown as their pretty-printed JSON.
fn render_fallback(kind: &str, raw: &Value) -> String {
    debug!(kind, "Rendering unrecognised node verbatim");
    let dump = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
    format!("\n\n{dump}\n\n")
}

/// Trim the document and collapse every run of three or more newlines to a
/// single blank line. Idempotent.
pub fn normalize_whitespace(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text.trim(), "\n\n").into_owned()
}
