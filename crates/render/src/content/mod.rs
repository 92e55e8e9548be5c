//! Content rendering module.
//!
//! This module provides:
//! - DocumentNode / Mark: the rich-text document schema
//! - BlockType: storage-level block kinds and their node-type mapping
//! - render_inline: inline text rendering with mark support
//! - render_blocks: server-side block rendering to semantic HTML

pub mod block_render;
pub mod block_types;
pub mod document;
pub mod inline;

pub use block_render::{render_block, render_blocks};
pub use block_types::{BlockType, expected_node_type, validate_block, validate_block_content};
pub use document::{DocumentNode, Mark};
pub use inline::render_inline;
