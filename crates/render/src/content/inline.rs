//! Inline rendering of text runs with marks.
//!
//! Turns a sequence of inline nodes (text leaves, hard breaks, and
//! whatever containers the editor nests them in) into formatted HTML.
//! All text is escaped before any tags are wrapped around it.

use crate::content::document::{DocumentNode, Mark};
use crate::escape::html_escape;

/// Render an optional sequence of inline nodes to HTML.
///
/// Absent or empty input renders as an empty string — a paragraph with no
/// content is empty, not an error.
pub fn render_inline(nodes: Option<&[DocumentNode]>) -> String {
    let mut html = String::new();
    for node in nodes.unwrap_or_default() {
        render_inline_node(node, &mut html);
    }
    html
}

fn render_inline_node(node: &DocumentNode, html: &mut String) {
    match node.node_type.as_str() {
        "text" => match &node.text {
            Some(text) => {
                html.push_str(&apply_marks(text, node.marks.as_deref().unwrap_or_default()));
            }
            None => {
                tracing::warn!("skipping text node without text");
            }
        },
        "hardBreak" => html.push_str("<br>"),
        // Container nodes flatten into the surrounding run; anything else
        // (no children, not a text leaf) contributes nothing.
        _ => {
            for child in node.children() {
                render_inline_node(child, html);
            }
        }
    }
}

/// Wrap escaped text in mark tags.
///
/// Wrapping order is fixed regardless of the order marks appear in the
/// input: link outermost, then code, strike, underline, italic, bold
/// innermost. Mark types outside this set have no effect.
fn apply_marks(text: &str, marks: &[Mark]) -> String {
    let has = |mark_type: &str| marks.iter().any(|m| m.mark_type == mark_type);

    let mut out = html_escape(text);
    if has("bold") {
        out = format!("<strong>{out}</strong>");
    }
    if has("italic") {
        out = format!("<em>{out}</em>");
    }
    if has("underline") {
        out = format!("<u>{out}</u>");
    }
    if has("strike") {
        out = format!("<s>{out}</s>");
    }
    if has("code") {
        out = format!("<code>{out}</code>");
    }
    if let Some(link) = marks.iter().find(|m| m.mark_type == "link") {
        // A link mark without an href is not a usable link; leave the
        // inner formatting as-is.
        if let Some(href) = link.attr_str("href") {
            let href = html_escape(href);
            out = if link.attr_str("target") == Some("_blank") {
                format!(
                    "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{out}</a>"
                )
            } else {
                format!("<a href=\"{href}\">{out}</a>")
            };
        }
    }
    out
}
