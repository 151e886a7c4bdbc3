//! Bullet and ordered lists.
//!
//! Lists and blocks are mutually recursive: item bodies go through the block
//! renderer, nested lists come back here and are shifted right by
//! [`NESTED_INDENT`] per level.

use crate::model::{Container, List, Node};
use crate::renderer::Renderer;

/// Extra indentation applied to every line of a nested list.
pub const NESTED_INDENT: &str = "  ";

/// Line prefixes for one list item.
struct Marker {
    /// Prefix of the item's first block: `- ` or `{index}. `.
    first: String,
    /// Prefix of later blocks in the same item.
    next: String,
    /// Indentation of continuation lines inside a block.
    hang: String,
}

impl Marker {
    fn new(index: Option<usize>) -> Self {
        match index {
            None => Self {
                first: "\n- ".to_string(),
                next: "\n- ".to_string(),
                hang: String::new(),
            },
            Some(index) => {
                // One space per digit of the index.
                let hang = " ".repeat(index.to_string().len());
                Self {
                    first: format!("\n{index}. "),
                    next: format!("\n{hang}"),
                    hang,
                }
            }
        }
    }
}

impl Renderer {
    pub fn render_bullet_list(&self, list: &List) -> String {
        list.content
            .iter()
            .map(|entry| self.render_entry(entry, None))
            .collect()
    }

    /// Items are numbered from 1 by position within this list only.
    pub fn render_ordered_list(&self, list: &List) -> String {
        list.content
            .iter()
            .enumerate()
            .map(|(i, entry)| self.render_entry(entry, Some(i + 1)))
            .collect()
    }

    /// Render one item; `index` is `Some` for ordered lists.
    pub fn render_list_item(&self, item: &Container, index: Option<usize>) -> String {
        self.render_item_body(&item.content, index)
    }

    fn render_entry(&self, entry: &Node, index: Option<usize>) -> String {
        match entry {
            Node::ListItem(item) => self.render_list_item(item, index),
            // Entries that are not items are treated as a one-block item.
            other => self.render_item_body(std::slice::from_ref(other), index),
        }
    }

    fn render_item_body(&self, children: &[Node], index: Option<usize>) -> String {
        let marker = Marker::new(index);
        let mut out = String::new();
        let mut first = true;

        for child in children {
            if child.is_list() || matches!(child, Node::Unknown(_)) {
                out.push_str(&indent(&self.render_node(child), NESTED_INDENT));
                continue;
            }

            let body = self.render_node(child);
            out.push_str(if first { &marker.first } else { &marker.next });
            out.push_str(&indent(body.trim(), &marker.hang));
            first = false;
        }

        out
    }
}

/// Insert `prefix` after every newline.
fn indent(text: &str, prefix: &str) -> String {
    text.replace('\n', &format!("\n{prefix}"))
}
