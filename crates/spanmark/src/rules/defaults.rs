//! Built-in inline rules.

use super::Rule;
use crate::span::SpanKind;

/// Built-in rules, in the order they are applied
///
/// Links and images go first so urls are never split on emphasis markers,
/// and code goes before emphasis so code content is kept literal.
pub fn default_rules() -> Vec<(&'static str, Rule)> {
    vec![
        ("image", Rule::Images),
        ("link", Rule::Links),
        ("code", delimited("`", SpanKind::Code)),
        ("bold", delimited("**", SpanKind::Bold)),
        ("italic", delimited("_", SpanKind::Italic)),
    ]
}

fn delimited(delimiter: &str, kind: SpanKind) -> Rule {
    Rule::Delimiter {
        delimiter: delimiter.to_string(),
        kind,
    }
}
