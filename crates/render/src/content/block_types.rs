//! Block type definitions and content validation.
//!
//! Storage keeps a simplified block type per content unit ("quote",
//! "code", ...), while the node tree inside uses the editor's own type
//! names ("blockquote", "codeBlock", ...). This module owns the mapping
//! between the two and the check that a stored block's tree actually is
//! what the block claims it is.

use crate::content::document::DocumentNode;
use crate::error::RenderError;
use crate::models::Block;

/// Storage-level block kinds understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Image,
    Gallery,
    Quote,
    Code,
    BulletList,
    OrderedList,
    Divider,
}

impl BlockType {
    /// All known block types, in authoring-palette order.
    pub const ALL: [BlockType; 9] = [
        BlockType::Paragraph,
        BlockType::Heading,
        BlockType::Image,
        BlockType::Gallery,
        BlockType::Quote,
        BlockType::Code,
        BlockType::BulletList,
        BlockType::OrderedList,
        BlockType::Divider,
    ];

    /// Parse a storage-level type name. Returns `None` for unknown types.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "paragraph" => Some(BlockType::Paragraph),
            "heading" => Some(BlockType::Heading),
            "image" => Some(BlockType::Image),
            "gallery" => Some(BlockType::Gallery),
            "quote" => Some(BlockType::Quote),
            "code" => Some(BlockType::Code),
            "bullet_list" => Some(BlockType::BulletList),
            "ordered_list" => Some(BlockType::OrderedList),
            "divider" => Some(BlockType::Divider),
            _ => None,
        }
    }

    /// Storage-level machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Image => "image",
            BlockType::Gallery => "gallery",
            BlockType::Quote => "quote",
            BlockType::Code => "code",
            BlockType::BulletList => "bullet_list",
            BlockType::OrderedList => "ordered_list",
            BlockType::Divider => "divider",
        }
    }

    /// Document node type the stored content's root node must have.
    pub fn node_type(self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Image => "image",
            BlockType::Gallery => "gallery",
            BlockType::Quote => "blockquote",
            BlockType::Code => "codeBlock",
            BlockType::BulletList => "bulletList",
            BlockType::OrderedList => "orderedList",
            BlockType::Divider => "horizontalRule",
        }
    }
}

/// Map a simplified block type name to the expected document node type.
///
/// Unknown block types are returned unchanged so callers can treat the
/// result as "no known mapping" without a separate error path.
pub fn expected_node_type(block_type: &str) -> &str {
    match BlockType::parse(block_type) {
        Some(bt) => bt.node_type(),
        None => block_type,
    }
}

/// Check that a block's content tree matches its declared type.
///
/// Used by authoring and intake validation; the renderer performs its own
/// per-dispatch check and skips mismatches instead of erroring. The
/// mismatch error carries the expected node type for the caller's message.
pub fn validate_block_content(
    block_type: &str,
    content: &DocumentNode,
) -> Result<(), RenderError> {
    let Some(bt) = BlockType::parse(block_type) else {
        return Err(RenderError::UnknownBlockType(block_type.to_string()));
    };

    if content.node_type == bt.node_type() {
        Ok(())
    } else {
        Err(RenderError::TypeMismatch {
            expected: bt.node_type().to_string(),
            found: content.node_type.clone(),
        })
    }
}

/// Validate a stored block the way the renderer will judge it.
///
/// Returns every problem found; an empty list means the block renders.
/// Authoring flows call this at save time so that content which would be
/// silently skipped on the page surfaces as an editor error instead.
pub fn validate_block(block: &Block) -> Vec<RenderError> {
    let mut errors = Vec::new();

    let Some(bt) = BlockType::parse(&block.block_type) else {
        errors.push(RenderError::UnknownBlockType(block.block_type.clone()));
        return errors;
    };

    // Dividers carry no content worth inspecting.
    if bt == BlockType::Divider {
        return errors;
    }

    let node = &block.content;
    if node.node_type != bt.node_type() {
        errors.push(RenderError::TypeMismatch {
            expected: bt.node_type().to_string(),
            found: node.node_type.clone(),
        });
        return errors;
    }

    match bt {
        BlockType::Image => {
            if node.attr_str("src").is_none() {
                errors.push(RenderError::MissingAttribute {
                    node_type: "image".to_string(),
                    attribute: "src".to_string(),
                });
            }
        }
        BlockType::Gallery => match node.attr("images") {
            None => {
                errors.push(RenderError::MissingAttribute {
                    node_type: "gallery".to_string(),
                    attribute: "images".to_string(),
                });
            }
            Some(images) => {
                // The renderer needs a non-empty array of image objects.
                if images.as_array().is_none_or(|imgs| imgs.is_empty()) {
                    errors.push(RenderError::MalformedContent {
                        node_type: "gallery".to_string(),
                    });
                }
            }
        },
        _ => {}
    }

    errors
}
