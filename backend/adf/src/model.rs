//! Rich-text document model
//!
//! Typed mirror of the tracker's structured description format. Every node
//! carries a `type` tag; nodes whose tag is unknown (or whose payload does not
//! fit the known schema) are kept verbatim as [`Node::Unknown`] so the renderer
//! can still show them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top-level wrapper: `{ "type": "doc", "content": [...] }`.
///
/// `content` stays raw until the envelope tag has been checked, so a rejected
/// document can be dumped exactly as it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Value,
}

impl Envelope {
    /// The only accepted root tag.
    pub const DOC: &'static str = "doc";

    pub fn doc(content: Value) -> Self {
        Self {
            kind: Self::DOC.to_string(),
            content,
        }
    }
}

/// One element of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(Text),
    InlineCard(InlineCard),
    Heading(Heading),
    Paragraph(Container),
    CodeBlock(Container),
    BulletList(List),
    OrderedList(List),
    ListItem(Container),
    MediaSingle(Media),
    MediaGroup(Media),
    Rule,
    /// Anything the model does not recognise, kept as received.
    Unknown(Value),
}

impl Node {
    /// The wire tag of this node (`"?"` for untagged unknown nodes).
    pub fn kind(&self) -> &str {
        match self {
            Node::Text(_) => "text",
            Node::InlineCard(_) => "inlineCard",
            Node::Heading(_) => "heading",
            Node::Paragraph(_) => "paragraph",
            Node::CodeBlock(_) => "codeBlock",
            Node::BulletList(_) => "bulletList",
            Node::OrderedList(_) => "orderedList",
            Node::ListItem(_) => "listItem",
            Node::MediaSingle(_) => "mediaSingle",
            Node::MediaGroup(_) => "mediaGroup",
            Node::Rule => "rule",
            Node::Unknown(raw) => raw.get("type").and_then(Value::as_str).unwrap_or("?"),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::BulletList(_) | Node::OrderedList(_))
    }
}

/// A run of literal text with optional marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<Mark>,
}

impl Text {
    /// Target of the first non-empty `link` mark, if any.
    pub fn link_href(&self) -> Option<&str> {
        self.marks
            .iter()
            .filter(|m| m.kind == Mark::LINK)
            .find_map(|m| m.href())
            .filter(|href| !href.is_empty())
    }
}

/// Inline formatting annotation (`strong`, `em`, `link`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attrs: Value,
}

impl Mark {
    pub const LINK: &'static str = "link";

    pub fn href(&self) -> Option<&str> {
        self.attrs.get("href").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineCard {
    pub attrs: CardAttrs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAttrs {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Heading {
    pub attrs: HeadingAttrs,
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

/// Paragraphs, code blocks and list items: an ordered run of child nodes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub content: Vec<Node>,
}

/// Bullet and ordered lists. Entries are normally `listItem` nodes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct List {
    #[serde(default)]
    pub content: Vec<Node>,
}

/// `mediaSingle` / `mediaGroup` wrapper around media references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub content: Vec<MediaRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRef {
    #[serde(default)]
    pub attrs: MediaAttrs,
}

impl MediaRef {
    /// Pictures carry their dimensions; plain file attachments do not.
    pub fn is_picture(&self) -> bool {
        self.attrs.width.is_some() || self.attrs.height.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaAttrs {
    #[serde(default)]
    pub id: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum Tagged {
    Text(Text),
    InlineCard(InlineCard),
    Heading(Heading),
    Paragraph(Container),
    CodeBlock(Container),
    BulletList(List),
    OrderedList(List),
    ListItem(Container),
    MediaSingle(Media),
    MediaGroup(Media),
    Rule,
}

impl From<Tagged> for Node {
    fn from(tagged: Tagged) -> Self {
        match tagged {
            Tagged::Text(t) => Node::Text(t),
            Tagged::InlineCard(c) => Node::InlineCard(c),
            Tagged::Heading(h) => Node::Heading(h),
            Tagged::Paragraph(c) => Node::Paragraph(c),
            Tagged::CodeBlock(c) => Node::CodeBlock(c),
            Tagged::BulletList(l) => Node::BulletList(l),
            Tagged::OrderedList(l) => Node::OrderedList(l),
            Tagged::ListItem(c) => Node::ListItem(c),
            Tagged::MediaSingle(m) => Node::MediaSingle(m),
            Tagged::MediaGroup(m) => Node::MediaGroup(m),
            Tagged::Rule => Node::Rule,
        }
    }
}

/// Tags whose `content` is a list of child nodes.
const PARENT_KINDS: &[&str] = &[
    "heading",
    "paragraph",
    "codeBlock",
    "bulletList",
    "orderedList",
    "listItem",
];

impl Node {
    /// Build a node from raw JSON. Children are detached before the node's own
    /// fields are decoded, so every subtree is moved once rather than copied
    /// at each nesting level.
    pub fn from_value(mut raw: Value) -> Node {
        let is_parent = raw
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|kind| PARENT_KINDS.contains(&kind));
        let detached = if is_parent {
            raw.as_object_mut().and_then(|fields| fields.remove("content"))
        } else {
            None
        };

        let children = match detached {
            None => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => return Node::Unknown(reattach(raw, other)),
        };

        let mut node = match Tagged::deserialize(&raw) {
            Ok(tagged) => Node::from(tagged),
            Err(_) if is_parent => return Node::Unknown(reattach(raw, Value::Array(children))),
            Err(_) => return Node::Unknown(raw),
        };
        if let Some(slot) = node.children_mut() {
            *slot = children.into_iter().map(Node::from_value).collect();
        }
        node
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Heading(heading) => Some(&mut heading.content),
            Node::Paragraph(block) | Node::CodeBlock(block) | Node::ListItem(block) => {
                Some(&mut block.content)
            }
            Node::BulletList(list) | Node::OrderedList(list) => Some(&mut list.content),
            _ => None,
        }
    }
}

fn reattach(mut raw: Value, content: Value) -> Value {
    if let Some(fields) = raw.as_object_mut() {
        fields.insert("content".to_string(), content);
    }
    raw
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Node::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_nested_list() {
        let list = node(json!({
            "type": "bulletList",
            "content": [{
                "type": "listItem",
                "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "a" }] }]
            }]
        }));
        let Node::BulletList(list) = list else { panic!("expected bullet list") };
        let Node::ListItem(item) = &list.content[0] else { panic!("expected list item") };
        assert!(matches!(item.content[0], Node::Paragraph(_)));
    }

    #[test]
    fn unknown_tag_is_kept_verbatim() {
        let raw = json!({ "type": "panel", "attrs": { "panelType": "info" } });
        let parsed = node(raw.clone());
        assert_eq!(parsed, Node::Unknown(raw));
        assert_eq!(parsed.kind(), "panel");
    }

    #[test]
    fn malformed_known_tag_falls_back() {
        let parsed = node(json!({ "type": "heading", "content": [] }));
        assert!(matches!(parsed, Node::Unknown(_)));
    }

    #[test]
    fn non_list_content_keeps_whole_node() {
        let raw = json!({ "type": "paragraph", "content": "plain" });
        assert_eq!(node(raw.clone()), Node::Unknown(raw));
    }

    #[test]
    fn malformed_parent_keeps_its_children() {
        let raw = json!({
            "type": "heading",
            "attrs": {},
            "content": [{ "type": "text", "text": "Hi" }]
        });
        assert_eq!(Node::from_value(raw.clone()), Node::Unknown(raw));
    }

    #[test]
    fn deep_nesting_keeps_every_level() {
        let mut raw = json!({
            "type": "paragraph",
            "content": [{ "type": "text", "text": "leaf" }]
        });
        for _ in 0..50 {
            let item = json!({ "type": "listItem", "content": [raw] });
            raw = json!({ "type": "bulletList", "content": [item] });
        }

        let mut current = Node::from_value(raw);
        let mut depth = 0;
        while let Node::BulletList(list) = current {
            let Node::ListItem(item) = &list.content[0] else { panic!("expected list item") };
            current = item.content[0].clone();
            depth += 1;
        }
        assert_eq!(depth, 50);
        let Node::Paragraph(p) = current else { panic!("expected paragraph") };
        assert_eq!(p.content, vec![Node::Text(Text { text: "leaf".into(), marks: vec![] })]);
    }

    #[test]
    fn unknown_child_does_not_poison_parent() {
        let parsed = node(json!({
            "type": "paragraph",
            "content": [
                { "type": "text", "text": "hi " },
                { "type": "emoji", "attrs": { "shortName": ":smile:" } }
            ]
        }));
        let Node::Paragraph(p) = parsed else { panic!("expected paragraph") };
        assert!(matches!(p.content[0], Node::Text(_)));
        assert_eq!(p.content[1].kind(), "emoji");
    }

    #[test]
    fn rule_ignores_extra_fields() {
        assert_eq!(node(json!({ "type": "rule", "attrs": {} })), Node::Rule);
    }

    #[test]
    fn link_href_skips_other_marks() {
        let text: Text = serde_json::from_value(json!({
            "text": "docs",
            "marks": [
                { "type": "strong" },
                { "type": "link", "attrs": { "href": "https://example.com" } }
            ]
        }))
        .unwrap();
        assert_eq!(text.link_href(), Some("https://example.com"));
    }

    #[test]
    fn media_dimensions_mark_pictures() {
        let media: Media = serde_json::from_value(json!({
            "content": [
                { "type": "media", "attrs": { "id": "a", "width": 640, "height": 480 } },
                { "type": "media", "attrs": { "id": "b" } }
            ]
        }))
        .unwrap();
        assert!(media.content[0].is_picture());
        assert!(!media.content[1].is_picture());
    }
}
