//! Server-side block rendering for stored rich-text documents.
//!
//! Converts a document's ordered [`Block`] records into semantic HTML:
//! paragraph, heading, quote, code, bullet/ordered list, divider, image,
//! and gallery. Inline text runs through the mark-aware inline renderer;
//! code blocks render their plain text only.
//!
//! Each block renders independently. A block whose content does not match
//! its declared type, or that is missing a required attribute, is skipped
//! with a warning — one bad block never takes down the rest of the page.

use uuid::Uuid;

use crate::content::block_types::BlockType;
use crate::content::document::DocumentNode;
use crate::content::inline::render_inline;
use crate::escape::html_escape;
use crate::models::Block;

/// Render an ordered sequence of blocks into a single HTML string.
///
/// Input order is preserved. Blocks that fail their checks contribute
/// nothing; a fully malformed document renders as an empty string rather
/// than an error.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        if let Some(rendered) = render_block(block) {
            html.push_str(&rendered);
        }
    }
    html
}

/// Render a single block, or `None` if its content is unusable.
pub fn render_block(block: &Block) -> Option<String> {
    let Some(block_type) = BlockType::parse(&block.block_type) else {
        tracing::warn!(
            block_id = %block.id,
            block_type = %block.block_type,
            "skipping block of unknown type"
        );
        return None;
    };

    // Dividers are fixed output; every other type must carry a content
    // tree whose root matches the declared block type.
    if block_type == BlockType::Divider {
        return Some("<hr>".to_string());
    }

    let node = &block.content;
    if node.node_type != block_type.node_type() {
        tracing::warn!(
            block_id = %block.id,
            expected = block_type.node_type(),
            found = %node.node_type,
            "skipping block whose content does not match its declared type"
        );
        return None;
    }

    match block_type {
        BlockType::Paragraph => Some(render_paragraph(node)),
        BlockType::Heading => Some(render_heading(node)),
        BlockType::Quote => Some(render_quote(node)),
        BlockType::Code => Some(render_code(node)),
        BlockType::BulletList => Some(render_bullet_list(node)),
        BlockType::OrderedList => Some(render_ordered_list(node)),
        BlockType::Image => render_image(block.id, node),
        BlockType::Gallery => render_gallery(block.id, node),
        // Returned above; the arm keeps the match exhaustive.
        BlockType::Divider => Some("<hr>".to_string()),
    }
}

/// Render a paragraph wrapper around inline content.
fn render_paragraph(node: &DocumentNode) -> String {
    format!("<p>{}</p>", render_inline(node.content.as_deref()))
}

/// Render a heading at the rank given by the `level` attribute.
///
/// Absent or out-of-range levels fall back to `<h2>` — the authoring
/// surface's default rank.
fn render_heading(node: &DocumentNode) -> String {
    let level = match node.attr_i64("level") {
        Some(level @ 1..=6) => level,
        _ => 2,
    };
    let inner = render_inline(node.content.as_deref());
    format!("<h{level}>{inner}</h{level}>")
}

/// Render a blockquote. Paragraph children keep their `<p>` wrapper;
/// other children contribute their inline content bare.
fn render_quote(node: &DocumentNode) -> String {
    let mut inner = String::new();
    for child in node.children() {
        let child_html = render_inline(child.content.as_deref());
        if child.node_type == "paragraph" {
            inner.push_str(&format!("<p>{child_html}</p>"));
        } else {
            inner.push_str(&child_html);
        }
    }
    format!("<blockquote>{inner}</blockquote>")
}

/// Render a code block as escaped plain text.
///
/// Marks on nested text nodes are ignored. The `language` attribute is
/// carried as a class for client-side highlighting, defaulting to
/// "plaintext".
fn render_code(node: &DocumentNode) -> String {
    let language = node.attr_str("language").unwrap_or("plaintext");
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        html_escape(language),
        html_escape(&node.plain_text())
    )
}

/// Render the `<li>` entries of a list node.
///
/// Only the first child of each `listItem` is consulted when extracting
/// inline content; anything after it is dropped. The authoring surface
/// produces single-paragraph items, and what multi-paragraph items should
/// look like has never been settled, so the renderer keeps the observed
/// behavior. Items without a first child produce no entry.
fn render_list_items(node: &DocumentNode) -> String {
    let mut html = String::new();
    for item in node.children() {
        if item.node_type != "listItem" {
            continue;
        }
        let Some(first) = item.children().first() else {
            continue;
        };
        html.push_str(&format!(
            "<li>{}</li>",
            render_inline(first.content.as_deref())
        ));
    }
    html
}

fn render_bullet_list(node: &DocumentNode) -> String {
    format!("<ul>{}</ul>", render_list_items(node))
}

/// Render an ordered list, honoring the `start` attribute. The attribute
/// is only emitted when it differs from the HTML default of 1.
fn render_ordered_list(node: &DocumentNode) -> String {
    let items = render_list_items(node);
    match node.attr_i64("start") {
        Some(start) if start != 1 => format!("<ol start=\"{start}\">{items}</ol>"),
        _ => format!("<ol>{items}</ol>"),
    }
}

/// Render an image block as a figure.
///
/// The `src` attribute is required; `alt` defaults to an empty string and
/// `title` becomes a figcaption when present.
fn render_image(block_id: Uuid, node: &DocumentNode) -> Option<String> {
    let Some(src) = node.attr_str("src") else {
        tracing::warn!(block_id = %block_id, "skipping image block without src");
        return None;
    };
    let alt = node.attr_str("alt").unwrap_or_default();

    let mut html = format!(
        "<figure><img src=\"{}\" alt=\"{}\">",
        html_escape(src),
        html_escape(alt)
    );
    if let Some(title) = node.attr_str("title") {
        html.push_str(&format!("<figcaption>{}</figcaption>", html_escape(title)));
    }
    html.push_str("</figure>");
    Some(html)
}

/// Render a gallery block.
///
/// Requires a non-empty `images` attribute. The `layout` attribute is
/// carried as a class; the grid is the only layout rendered server-side.
/// Images without an `alt` get a generated "Gallery image N" fallback.
fn render_gallery(block_id: Uuid, node: &DocumentNode) -> Option<String> {
    let images = node
        .attr("images")
        .and_then(|v| v.as_array())
        .filter(|images| !images.is_empty());
    let Some(images) = images else {
        tracing::warn!(block_id = %block_id, "skipping gallery block without images");
        return None;
    };

    let layout = node.attr_str("layout").unwrap_or("grid");
    let mut html = format!("<div class=\"gallery gallery-{}\">", html_escape(layout));
    for (i, image) in images.iter().enumerate() {
        let Some(url) = image.get("url").and_then(|v| v.as_str()) else {
            tracing::warn!(block_id = %block_id, index = i, "skipping gallery image without url");
            continue;
        };
        let fallback = format!("Gallery image {}", i + 1);
        let alt = image
            .get("alt")
            .and_then(|v| v.as_str())
            .unwrap_or(&fallback);
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            html_escape(url),
            html_escape(alt)
        ));
    }
    html.push_str("</div>");
    Some(html)
}
