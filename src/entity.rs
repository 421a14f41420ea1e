use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub type SpanList = Vec<Span>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Text => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SpanKind::Text),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            other => Err(Error::UnsupportedKind(other.to_string())),
        }
    }
}

/// A run of source text tagged with one inline markup kind.
///
/// `url` is only set for [`SpanKind::Link`] and [`SpanKind::Image`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl Span {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Text)
    }

    pub fn is_text(&self) -> bool {
        self.kind == SpanKind::Text
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "Span({}, {}, {})", self.text, self.kind, url),
            None => write!(f, "Span({}, {})", self.text, self.kind),
        }
    }
}
