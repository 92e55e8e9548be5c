//! Foglio content rendering.
//!
//! Converts stored rich-text documents — ordered [`Block`] records, each
//! wrapping one editor-produced node tree — into semantic HTML. Rendering
//! is pure and synchronous: no I/O, no shared state, safe to call
//! concurrently for independent documents.
//!
//! Malformed content never fails a page. A block whose content does not
//! match its declared type, or that is missing a required attribute, is
//! skipped with a warning while its siblings render normally.

pub mod content;
pub mod error;
pub mod escape;
pub mod models;

pub use content::{
    BlockType, DocumentNode, Mark, expected_node_type, render_block, render_blocks,
    render_inline, validate_block, validate_block_content,
};
pub use error::RenderError;
pub use models::Block;
