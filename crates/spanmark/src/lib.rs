//! # spanmark
//!
//! Convert a restricted flavor of markdown inline text to HTML.
//!
//! Text is first segmented into typed [`Span`]s (plain, bold, italic, code,
//! link, image), each span is translated into an [`HtmlNode`], and the nodes
//! are rendered to markup.
//!
//! ## Supported syntax
//!
//! - `**bold**`, `_italic_` and `` `code` `` delimiter pairs
//! - `[text](url)` links and `![alt](url)` images
//!
//! Anything else passes through as plain text. Delimiters do not nest.
//!
//! ## Example (service)
//!
//! ```rust
//! use spanmark::InlineService;
//!
//! let service = InlineService::new();
//! let html = service
//!     .text_to_html("This is **bold** with a [link](https://example.com)")
//!     .unwrap();
//! assert_eq!(
//!     html,
//!     "This is <b>bold</b> with a <a href=\"https://example.com\">link</a>"
//! );
//! ```
//!
//! ## Example (individual steps)
//!
//! ```rust
//! use spanmark::{render, split_by_delimiter, translate, Span, SpanKind};
//!
//! let spans = split_by_delimiter(vec![Span::plain("a `b` c")], "`", SpanKind::Code).unwrap();
//! assert_eq!(
//!     spans,
//!     vec![Span::plain("a "), Span::code("b"), Span::plain(" c")]
//! );
//!
//! let html = render(&translate(&spans[1])).unwrap();
//! assert_eq!(html, "<code>b</code>");
//! ```

mod delimiter;
mod extract;
mod rules;
mod service;
pub mod span;
mod translate;

pub use delimiter::split_by_delimiter;
pub use extract::{
    extract_markdown_images, extract_markdown_links, split_nodes_image, split_nodes_link,
};
pub use rules::{default_rules, Rule, Rules};
pub use service::{InlineOptions, InlineService};
pub use span::{Span, SpanKind};
pub use spanmark_html::{
    attributes_to_markup, render, render_with, Attributes, HtmlNode, RenderOptions,
    ValidationError,
};
pub use translate::translate;

/// Error type for spanmark operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanmarkError {
    #[error("Invalid node: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown span kind: {0}")]
    UnknownSpanKind(String),

    #[error("Invalid span: {0}")]
    InvalidSpan(String),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Unbalanced delimiter `{delimiter}`: opened at byte {offset} of the span text but never closed")]
    UnbalancedDelimiter { delimiter: String, offset: usize },
}

impl SpanmarkError {
    /// Whether this error reports malformed input data rather than
    /// malformed markdown text
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SpanmarkError::Validation(_)
                | SpanmarkError::UnknownSpanKind(_)
                | SpanmarkError::InvalidSpan(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SpanmarkError>;
