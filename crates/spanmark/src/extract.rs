//! Link and image syntax recognition.
//!
//! Images are `![alt](url)` and links are `[text](url)`. Neither part may
//! contain square brackets or parentheses. A bracket pair preceded by `!`
//! is always an image, never a link.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::span::{Span, SpanKind};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\[\]\(\)]*)\)").expect("image pattern is valid"));

// The regex crate has no lookbehind, so a leading `!` is matched and the
// image matches are dropped afterwards.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!?\[([^\[\]]*)\]\(([^\[\]\(\)]*)\)").expect("link pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Image,
    Link,
}

impl Syntax {
    fn kind(self) -> SpanKind {
        match self {
            Syntax::Image => SpanKind::Image,
            Syntax::Link => SpanKind::Link,
        }
    }
}

/// A located occurrence of link or image syntax
struct Found<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    url: &'a str,
}

fn find_all(text: &str, syntax: Syntax) -> Vec<Found<'_>> {
    let re = match syntax {
        Syntax::Image => &*IMAGE_RE,
        Syntax::Link => &*LINK_RE,
    };

    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if syntax == Syntax::Link && whole.as_str().starts_with('!') {
                return None;
            }
            Some(Found {
                start: whole.start(),
                end: whole.end(),
                text: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// All `![alt](url)` occurrences as `(alt, url)` pairs, left to right
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_all(text, Syntax::Image)
        .into_iter()
        .map(|found| (found.text.to_string(), found.url.to_string()))
        .collect()
}

/// All `[text](url)` occurrences not preceded by `!`, as `(text, url)`
/// pairs, left to right
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_all(text, Syntax::Link)
        .into_iter()
        .map(|found| (found.text.to_string(), found.url.to_string()))
        .collect()
}

/// Split image syntax out of every plain span
pub fn split_nodes_image(spans: Vec<Span>) -> Vec<Span> {
    split_nodes(spans, Syntax::Image)
}

/// Split link syntax out of every plain span
pub fn split_nodes_link(spans: Vec<Span>) -> Vec<Span> {
    split_nodes(spans, Syntax::Link)
}

// Unlike delimiter splitting, empty text between or after matches is dropped.
fn split_nodes(spans: Vec<Span>, syntax: Syntax) -> Vec<Span> {
    let mut output = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            output.push(span);
            continue;
        }

        let text = span.text();
        let found = find_all(text, syntax);
        if found.is_empty() {
            output.push(span);
            continue;
        }
        log::trace!("found {} {} span(s) in {:?}", found.len(), syntax.kind(), text);

        let mut cursor = 0;
        for item in &found {
            if item.start > cursor {
                output.push(Span::plain(&text[cursor..item.start]));
            }
            output.push(match syntax {
                Syntax::Image => Span::image(item.text, item.url),
                Syntax::Link => Span::link(item.text, item.url),
            });
            cursor = item.end;
        }
        if cursor < text.len() {
            output.push(Span::plain(&text[cursor..]));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_images() {
        assert_eq!(
            extract_markdown_images("![x](u1) and ![y](u2)"),
            pairs(&[("x", "u1"), ("y", "u2")])
        );
    }

    #[test]
    fn test_extract_images_ignores_links() {
        assert!(extract_markdown_images("a [link](https://example.com)").is_empty());
    }

    #[test]
    fn test_extract_links() {
        assert_eq!(
            extract_markdown_links(
                "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev)"
            ),
            pairs(&[
                ("to boot dev", "https://www.boot.dev"),
                ("to youtube", "https://www.youtube.com/@bootdotdev"),
            ])
        );
    }

    #[test]
    fn test_extract_links_ignores_images() {
        assert_eq!(
            extract_markdown_links("![img](a.png) then [link](b.html)"),
            pairs(&[("link", "b.html")])
        );
        assert!(extract_markdown_links("![img](a.png)").is_empty());
        assert!(extract_markdown_links("!![img](a.png)").is_empty());
    }

    #[test]
    fn test_adjacent_links() {
        assert_eq!(
            extract_markdown_links("[a](u)[b](v)"),
            pairs(&[("a", "u"), ("b", "v")])
        );
    }

    #[test]
    fn test_rejects_nested_brackets() {
        assert!(extract_markdown_links("[a [b] c](u)").is_empty());
        assert!(extract_markdown_images("![a](u (v))").is_empty());
    }

    #[test]
    fn test_rejects_brackets_in_url() {
        assert!(extract_markdown_links("[a](u[1])").is_empty());
        assert!(extract_markdown_images("![x](p]q.png)").is_empty());
        assert_eq!(
            split_nodes_link(vec![Span::plain("see [a](u[1]) end")]),
            vec![Span::plain("see [a](u[1]) end")]
        );
        assert_eq!(
            split_nodes_image(vec![Span::plain("![x](p]q.png)")]),
            vec![Span::plain("![x](p]q.png)")]
        );
    }

    #[test]
    fn test_empty_parts_are_allowed() {
        assert_eq!(extract_markdown_images("![](x.png)"), pairs(&[("", "x.png")]));
        assert_eq!(extract_markdown_links("[text]()"), pairs(&[("text", "")]));
    }

    #[test]
    fn test_split_image_no_trailing_span() {
        assert_eq!(
            split_nodes_image(vec![Span::plain("![a](u)Text")]),
            vec![Span::image("a", "u"), Span::plain("Text")]
        );
    }

    #[test]
    fn test_split_images() {
        let spans = split_nodes_image(vec![Span::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with an "),
                Span::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                Span::plain(" and another "),
                Span::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn test_split_links() {
        let spans = split_nodes_link(vec![Span::plain(
            "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev) end",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a link "),
                Span::link("to boot dev", "https://www.boot.dev"),
                Span::plain(" and "),
                Span::link("to youtube", "https://www.youtube.com/@bootdotdev"),
                Span::plain(" end"),
            ]
        );
    }

    #[test]
    fn test_split_links_leaves_images_in_plain_text() {
        let spans = split_nodes_link(vec![Span::plain("![i](a.png) [l](b)")]);
        assert_eq!(
            spans,
            vec![Span::plain("![i](a.png) "), Span::link("l", "b")]
        );
    }

    #[test]
    fn test_split_without_matches_passes_through() {
        let input = vec![Span::plain("no syntax here"), Span::bold("[x](y)")];
        assert_eq!(split_nodes_link(input.clone()), input);
        assert_eq!(split_nodes_image(input.clone()), input);
    }

    #[test]
    fn test_split_only_match() {
        assert_eq!(
            split_nodes_link(vec![Span::plain("[only](u)")]),
            vec![Span::link("only", "u")]
        );
    }
}
