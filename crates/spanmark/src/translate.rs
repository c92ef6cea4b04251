//! Span to HTML node translation.

use spanmark_html::HtmlNode;

use crate::span::{Span, SpanKind};

/// Map a span to the terminal node that renders it
///
/// | kind   | tag    | value     | attributes         |
/// |--------|--------|-----------|--------------------|
/// | Plain  | none   | text      | none               |
/// | Bold   | `b`    | text      | none               |
/// | Italic | `i`    | text      | none               |
/// | Code   | `code` | text      | none               |
/// | Link   | `a`    | text      | `href`             |
/// | Image  | `img`  | empty     | `src`, `alt`       |
pub fn translate(span: &Span) -> HtmlNode {
    let text = span.text();
    let url = span.url().unwrap_or_default();

    match span.kind() {
        SpanKind::Plain => HtmlNode::text(text),
        SpanKind::Bold => HtmlNode::leaf("b", text),
        SpanKind::Italic => HtmlNode::leaf("i", text),
        SpanKind::Code => HtmlNode::leaf("code", text),
        SpanKind::Link => HtmlNode::leaf("a", text).with_attr("href", url),
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attr("src", url)
            .with_attr("alt", text),
    }
}
