//! Document node schema for stored rich-text content.
//!
//! Mirrors the JSON the rich-text editor persists: a tree of typed nodes
//! with optional attributes, children, leaf text, and inline marks. The
//! schema is deliberately open — unknown node and mark types deserialize
//! fine and are dealt with at render time, so content written by a newer
//! editor never breaks an older renderer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single node in a rich-text document tree.
///
/// Which of `attrs` / `content` / `text` / `marks` are meaningful depends
/// on `node_type`: text leaves carry `text` and `marks`, container nodes
/// carry `content`, and nodes like images carry only `attrs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    /// Node kind ("paragraph", "heading", "text", "image", ...).
    #[serde(rename = "type")]
    pub node_type: String,

    /// Node-specific attributes (heading `level`, image `src`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,

    /// Ordered child nodes. Absent on leaf nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<DocumentNode>>,

    /// Literal text. Present only on text leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Inline formatting marks attached to a text leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Mark>>,
}

impl DocumentNode {
    /// Child nodes, or an empty slice for leaves.
    pub fn children(&self) -> &[DocumentNode] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Look up a raw attribute value.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.as_ref()?.get(name)
    }

    /// Look up a string attribute. Absent or non-string values yield `None`.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name)?.as_str()
    }

    /// Look up an integer attribute. Absent or non-integer values yield `None`.
    pub fn attr_i64(&self, name: &str) -> Option<i64> {
        self.attr(name)?.as_i64()
    }

    /// Concatenate the text of this node and all descendants, depth-first.
    ///
    /// Marks are ignored — this is the plain-text view a code block renders.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }
}

/// An inline formatting annotation attached to a text node.
///
/// Known types: bold, italic, underline, strike, code, link. Anything else
/// is carried through and ignored by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    /// Mark kind ("bold", "link", ...).
    #[serde(rename = "type")]
    pub mark_type: String,

    /// Mark-specific attributes (link `href` and `target`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

impl Mark {
    /// Look up a string attribute. Absent or non-string values yield `None`.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attrs.as_ref()?.get(name)?.as_str()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_editor_output() {
        let node: DocumentNode = serde_json::from_value(json!({
            "type": "paragraph",
            "content": [
                { "type": "text", "text": "Plain " },
                {
                    "type": "text",
                    "text": "bold",
                    "marks": [ { "type": "bold" } ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(node.node_type, "paragraph");
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[1].text.as_deref(), Some("bold"));
        assert_eq!(
            node.children()[1].marks.as_ref().unwrap()[0].mark_type,
            "bold"
        );
    }

    #[test]
    fn unknown_node_and_mark_types_deserialize() {
        let node: DocumentNode = serde_json::from_value(json!({
            "type": "futureWidget",
            "attrs": { "mode": "shiny" },
            "content": [
                {
                    "type": "text",
                    "text": "x",
                    "marks": [ { "type": "sparkle" } ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(node.node_type, "futureWidget");
        assert_eq!(node.attr_str("mode"), Some("shiny"));
    }

    #[test]
    fn attr_accessors_tolerate_wrong_types() {
        let node: DocumentNode = serde_json::from_value(json!({
            "type": "heading",
            "attrs": { "level": "not a number", "id": 7 }
        }))
        .unwrap();

        assert_eq!(node.attr_i64("level"), None);
        assert_eq!(node.attr_str("id"), None);
        assert_eq!(node.attr_str("missing"), None);
    }

    #[test]
    fn plain_text_concatenates_descendants() {
        let node: DocumentNode = serde_json::from_value(json!({
            "type": "codeBlock",
            "content": [
                { "type": "text", "text": "foo" },
                {
                    "type": "span",
                    "content": [ { "type": "text", "text": "bar" } ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(node.plain_text(), "foobar");
    }

    #[test]
    fn children_of_leaf_is_empty() {
        let node: DocumentNode = serde_json::from_value(json!({
            "type": "text",
            "text": "leaf"
        }))
        .unwrap();

        assert!(node.children().is_empty());
    }

    #[test]
    fn link_mark_attrs() {
        let mark: Mark = serde_json::from_value(json!({
            "type": "link",
            "attrs": { "href": "https://example.com", "target": "_blank" }
        }))
        .unwrap();

        assert_eq!(mark.attr_str("href"), Some("https://example.com"));
        assert_eq!(mark.attr_str("target"), Some("_blank"));
        assert_eq!(mark.attr_str("rel"), None);
    }
}
