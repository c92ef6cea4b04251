//! InlineService - the main entry point for inline text to HTML conversion.

use spanmark_html::{render_with, HtmlNode, RenderOptions};

use crate::rules::{Rule, Rules};
use crate::span::Span;
use crate::translate::translate;
use crate::Result;

/// Options for InlineService
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineOptions {
    /// Splitting rules, applied in order
    pub rules: Rules,

    /// HTML serialization options
    pub render: RenderOptions,
}

/// Converts inline markdown text into spans, nodes and HTML
#[derive(Debug, Clone, Default)]
pub struct InlineService {
    options: InlineOptions,
}

impl InlineService {
    /// Create an InlineService with the built-in rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an InlineService with custom options
    pub fn with_options(options: InlineOptions) -> Self {
        Self { options }
    }

    /// Add or replace a rule
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.options.rules.add(key, rule);
        self
    }

    /// Remove a rule
    pub fn remove_rule(&mut self, key: &str) -> &mut Self {
        self.options.rules.remove(key);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &InlineOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut InlineOptions {
        &mut self.options
    }

    /// Split text into typed spans
    pub fn text_to_spans(&self, text: &str) -> Result<Vec<Span>> {
        let spans = self.options.rules.apply(vec![Span::plain(text)])?;
        log::debug!(
            "split {} byte(s) of inline text into {} span(s)",
            text.len(),
            spans.len()
        );
        Ok(spans)
    }

    /// Translate spans into HTML nodes
    pub fn spans_to_nodes(&self, spans: &[Span]) -> Vec<HtmlNode> {
        spans.iter().map(translate).collect()
    }

    /// Convert text to a sequence of HTML nodes
    pub fn text_to_nodes(&self, text: &str) -> Result<Vec<HtmlNode>> {
        let spans = self.text_to_spans(text)?;
        Ok(self.spans_to_nodes(&spans))
    }

    /// Convert text to HTML markup
    pub fn text_to_html(&self, text: &str) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        for node in self.text_to_nodes(text)? {
            output.push_str(&render_with(&node, &self.options.render)?);
        }
        Ok(output)
    }

    /// Convert text to a `p` element
    pub fn paragraph(&self, text: &str) -> Result<HtmlNode> {
        Ok(HtmlNode::parent("p", self.text_to_nodes(text)?))
    }

    /// Render any node with this service's render options
    pub fn render(&self, node: &HtmlNode) -> Result<String> {
        Ok(render_with(node, &self.options.render)?)
    }
}
