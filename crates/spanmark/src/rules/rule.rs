//! A single inline splitting step.

use crate::delimiter::split_by_delimiter;
use crate::extract::{split_nodes_image, split_nodes_link};
use crate::span::{Span, SpanKind};
use crate::{Result, SpanmarkError};

/// A rule splits plain spans into typed spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Literal delimiter pair, e.g. `**bold**`
    Delimiter { delimiter: String, kind: SpanKind },
    /// `![alt](url)`
    Images,
    /// `[text](url)`
    Links,
}

impl Rule {
    /// Create a delimiter rule. Only bold, italic and code regions can be
    /// delimited.
    pub fn delimiter(delimiter: &str, kind: SpanKind) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(SpanmarkError::InvalidRule(
                "delimiter must not be empty".to_string(),
            ));
        }
        if !kind.is_delimitable() {
            return Err(SpanmarkError::InvalidRule(format!(
                "`{delimiter}` cannot delimit {kind} spans"
            )));
        }
        Ok(Rule::Delimiter {
            delimiter: delimiter.to_string(),
            kind,
        })
    }

    /// Apply this rule to a sequence of spans
    pub fn apply(&self, spans: Vec<Span>) -> Result<Vec<Span>> {
        match self {
            Rule::Delimiter { delimiter, kind } => split_by_delimiter(spans, delimiter, *kind),
            Rule::Images => Ok(split_nodes_image(spans)),
            Rule::Links => Ok(split_nodes_link(spans)),
        }
    }
}
