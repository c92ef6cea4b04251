//! Typed inline text spans.
//!
//! A span is a fragment of inline text tagged with how it should be
//! rendered. Link and image spans always carry a url; every other kind
//! never does.

use std::fmt;
use std::str::FromStr;

use crate::{Result, SpanmarkError};

/// The kind of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub const ALL: [SpanKind; 6] = [
        SpanKind::Plain,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ];

    /// Lowercase name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }

    /// Whether a delimiter pair can mark up spans of this kind
    pub fn is_delimitable(&self) -> bool {
        matches!(self, SpanKind::Bold | SpanKind::Italic | SpanKind::Code)
    }

    /// Whether spans of this kind carry a url
    pub fn has_url(&self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = SpanmarkError;

    fn from_str(s: &str) -> Result<Self> {
        SpanKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SpanmarkError::UnknownSpanKind(s.to_string()))
    }
}

/// An immutable fragment of inline text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    text: String,
    kind: SpanKind,
    url: Option<String>,
}

impl Span {
    /// Create a span, checking that `url` is present exactly when `kind`
    /// is a link or image
    pub fn try_new(text: &str, kind: SpanKind, url: Option<&str>) -> Result<Self> {
        match (kind.has_url(), url) {
            (true, None) => Err(SpanmarkError::InvalidSpan(format!(
                "{kind} span \"{text}\" has no url"
            ))),
            (false, Some(url)) => Err(SpanmarkError::InvalidSpan(format!(
                "{kind} span \"{text}\" cannot have url \"{url}\""
            ))),
            _ => Ok(Self {
                text: text.to_string(),
                kind,
                url: url.map(str::to_string),
            }),
        }
    }

    pub fn plain(text: &str) -> Self {
        Self::styled(text, SpanKind::Plain)
    }

    pub fn bold(text: &str) -> Self {
        Self::styled(text, SpanKind::Bold)
    }

    pub fn italic(text: &str) -> Self {
        Self::styled(text, SpanKind::Italic)
    }

    pub fn code(text: &str) -> Self {
        Self::styled(text, SpanKind::Code)
    }

    pub fn link(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SpanKind::Link,
            url: Some(url.to_string()),
        }
    }

    pub fn image(alt: &str, url: &str) -> Self {
        Self {
            text: alt.to_string(),
            kind: SpanKind::Image,
            url: Some(url.to_string()),
        }
    }

    /// Callers guarantee `kind` has no url
    pub(crate) fn styled(text: &str, kind: SpanKind) -> Self {
        debug_assert!(!kind.has_url());
        Self {
            text: text.to_string(),
            kind,
            url: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Span({}, {}, {})",
            self.text,
            self.kind,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
