//! Block model — stored content units belonging to a document.
//!
//! A document owns an ordered sequence of blocks; each block wraps exactly
//! one editor-produced node tree. Blocks are created, edited, and reordered
//! by the authoring side — the renderer only ever reads them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::DocumentNode;

/// Stored content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// Parent document ID.
    pub document_id: Uuid,

    /// Simplified block type ("paragraph", "heading", "quote", ...).
    #[serde(rename = "type")]
    pub block_type: String,

    /// Root node of the content tree for this block. Its node type is
    /// expected to match the mapping for `block_type`.
    pub content: DocumentNode,

    /// Position among sibling blocks. Callers fetch blocks already sorted;
    /// the renderer preserves whatever order it is given.
    pub order: i32,

    /// Unix timestamp when created.
    pub created: i64,
}
