//! Splitting plain spans on a literal delimiter pair.

use crate::span::{Span, SpanKind};
use crate::{Result, SpanmarkError};

/// Split every plain span on `delimiter`, turning each delimited region into
/// a span of `kind`.
///
/// Only bold, italic and code regions can be delimited. Non-plain spans
/// pass through unchanged. Each opening delimiter closes at
/// the nearest following occurrence. A plain span always contributes a final
/// plain span for the text after its last pair, even when that text is empty.
///
/// Fails with [`SpanmarkError::UnbalancedDelimiter`] when an opening
/// delimiter is never closed.
pub fn split_by_delimiter(spans: Vec<Span>, delimiter: &str, kind: SpanKind) -> Result<Vec<Span>> {
    if delimiter.is_empty() {
        return Err(SpanmarkError::InvalidRule(
            "delimiter must not be empty".to_string(),
        ));
    }
    if !kind.is_delimitable() {
        return Err(SpanmarkError::InvalidRule(format!(
            "cannot split `{delimiter}` into {kind} spans"
        )));
    }

    let mut output = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_plain() {
            split_text(span.text(), delimiter, kind, &mut output)?;
        } else {
            output.push(span);
        }
    }

    Ok(output)
}

fn split_text(text: &str, delimiter: &str, kind: SpanKind, out: &mut Vec<Span>) -> Result<()> {
    let mut rest = text;
    let mut offset = 0;

    while let Some(open) = rest.find(delimiter) {
        let inner_start = open + delimiter.len();
        let Some(close) = rest[inner_start..].find(delimiter) else {
            return Err(SpanmarkError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                offset: offset + open,
            });
        };
        let inner_end = inner_start + close;

        if open > 0 {
            out.push(Span::plain(&rest[..open]));
        }
        out.push(Span::styled(&rest[inner_start..inner_end], kind));
        log::trace!(
            "split `{}` region at byte {}: {:?}",
            delimiter,
            offset + open,
            &rest[inner_start..inner_end]
        );

        let consumed = inner_end + delimiter.len();
        offset += consumed;
        rest = &rest[consumed..];
    }

    out.push(Span::plain(rest));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block() {
        let spans = split_by_delimiter(vec![Span::plain("a `b` c")], "`", SpanKind::Code).unwrap();
        assert_eq!(
            spans,
            vec![Span::plain("a "), Span::code("b"), Span::plain(" c")]
        );
    }

    #[test]
    fn test_bold_pair() {
        let spans = split_by_delimiter(
            vec![Span::plain("This is **bold** and **more bold** text")],
            "**",
            SpanKind::Bold,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is "),
                Span::bold("bold"),
                Span::plain(" and "),
                Span::bold("more bold"),
                Span::plain(" text"),
            ]
        );
    }

    #[test]
    fn test_trailing_plain_span_is_always_emitted() {
        let spans = split_by_delimiter(vec![Span::plain("_word_")], "_", SpanKind::Italic).unwrap();
        assert_eq!(spans, vec![Span::italic("word"), Span::plain("")]);
    }

    #[test]
    fn test_adjacent_pairs() {
        let spans = split_by_delimiter(vec![Span::plain("`a``b`")], "`", SpanKind::Code).unwrap();
        assert_eq!(spans, vec![Span::code("a"), Span::code("b"), Span::plain("")]);
    }

    #[test]
    fn test_absent_delimiter_is_identity() {
        let input = vec![Span::plain("nothing to see here")];
        let spans = split_by_delimiter(input.clone(), "**", SpanKind::Bold).unwrap();
        assert_eq!(spans, input);
    }

    #[test]
    fn test_non_plain_spans_pass_through() {
        let input = vec![
            Span::code("a **not bold** b"),
            Span::link("x **y**", "https://example.com"),
            Span::plain("**z**"),
        ];
        let spans = split_by_delimiter(input, "**", SpanKind::Bold).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::code("a **not bold** b"),
                Span::link("x **y**", "https://example.com"),
                Span::bold("z"),
                Span::plain(""),
            ]
        );
    }

    #[test]
    fn test_unbalanced() {
        let err = split_by_delimiter(vec![Span::plain("a `b")], "`", SpanKind::Code).unwrap_err();
        assert_eq!(
            err,
            SpanmarkError::UnbalancedDelimiter {
                delimiter: "`".to_string(),
                offset: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "Unbalanced delimiter ```: opened at byte 2 of the span text but never closed"
        );
    }

    #[test]
    fn test_unbalanced_after_closed_pair() {
        let err = split_by_delimiter(vec![Span::plain("**a** and **b")], "**", SpanKind::Bold)
            .unwrap_err();
        assert_eq!(
            err,
            SpanmarkError::UnbalancedDelimiter {
                delimiter: "**".to_string(),
                offset: 10,
            }
        );
    }

    #[test]
    fn test_multibyte_text() {
        let spans =
            split_by_delimiter(vec![Span::plain("héllo _wörld_ ✓")], "_", SpanKind::Italic).unwrap();
        assert_eq!(
            spans,
            vec![Span::plain("héllo "), Span::italic("wörld"), Span::plain(" ✓")]
        );
    }

    #[test]
    fn test_rejects_empty_delimiter_and_undelimitable_kinds() {
        assert!(matches!(
            split_by_delimiter(vec![Span::plain("x")], "", SpanKind::Bold),
            Err(SpanmarkError::InvalidRule(_))
        ));
        for kind in [SpanKind::Plain, SpanKind::Link, SpanKind::Image] {
            assert!(matches!(
                split_by_delimiter(vec![Span::plain("*x*")], "*", kind),
                Err(SpanmarkError::InvalidRule(_))
            ));
        }
    }
}
