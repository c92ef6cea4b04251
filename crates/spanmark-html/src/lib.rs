//! spanmark-html - HTML node tree and serialization
//!
//! This crate provides the small HTML tree that inline spans are translated
//! into, and the rules for serializing that tree to markup.
//!
//! # Architecture
//!
//! ```text
//!                  ┌───────────────────────┐
//! Terminal ───────▶│                       │
//!                  │   HtmlNode (tree)     │ ──render──▶ HTML String
//! Container ──────▶│                       │
//!                  └───────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use spanmark_html::{render, HtmlNode};
//!
//! let node = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::text(" text."),
//!     ],
//! );
//!
//! let html = render(&node).unwrap();
//! assert_eq!(html, "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod options;
mod render;

pub use node::{Attributes, HtmlNode};
pub use options::RenderOptions;
pub use render::{attributes_to_markup, render, render_with};

/// A node is missing a field it needs to be rendered
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Terminal node has no value")]
    MissingValue,

    #[error("Container node has no tag")]
    MissingTag,

    #[error("Container node <{tag}> has no children")]
    MissingChildren { tag: String },
}
