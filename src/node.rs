//! HTML element descriptors and their serialization.
//!
//! Nodes may be built in an invalid shape (a leaf without a value, a parent
//! without a tag or children); [`HtmlNode::to_html`] is where that is caught.

use std::fmt;

use crate::entity::{Span, SpanKind};
use crate::error::{Error, Result};

/// String attributes that serialize in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, keeping its original position when it is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(k, v)| format!(" {}=\"{}\"", k, v))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Attributes::new();
        for (k, v) in iter {
            attributes.insert(k, v);
        }
        attributes
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (n, (k, v)) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        f.write_str("}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// An untagged leaf, rendered as its bare value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn to_html(&self) -> Result<String> {
        let value = self.value.as_deref().ok_or(Error::MissingValue)?;
        match &self.tag {
            None => Ok(value.to_string()),
            Some(tag) => Ok(format!(
                "<{}{}>{}</{}>",
                tag,
                self.attributes.to_html(),
                value,
                tag
            )),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn to_html(&self) -> Result<String> {
        let tag = self.tag.as_deref().ok_or(Error::MissingTag)?;
        if self.children.is_empty() {
            return Err(Error::MissingChildren);
        }
        let mut html = format!("<{}{}>", tag, self.attributes.to_html());
        for child in &self.children {
            html += &child.to_html()?;
        }
        html += &format!("</{}>", tag);
        Ok(html)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn to_html(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag().unwrap_or("None");
        match self {
            HtmlNode::Leaf(leaf) => write!(
                f,
                "LeafNode(tag={}, value={}, attributes={})",
                tag,
                leaf.value.as_deref().unwrap_or("None"),
                leaf.attributes
            ),
            HtmlNode::Parent(parent) => {
                write!(f, "ParentNode(tag={}, children=[", tag)?;
                for (n, child) in parent.children.iter().enumerate() {
                    if n > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "], attributes={})", parent.attributes)
            }
        }
    }
}

pub fn span_to_node(span: &Span) -> HtmlNode {
    let url = span.url.as_deref().unwrap_or_default();
    let leaf = match span.kind {
        SpanKind::Text => LeafNode::text(&span.text),
        SpanKind::Bold => LeafNode::new("b", &span.text),
        SpanKind::Italic => LeafNode::new("i", &span.text),
        SpanKind::Code => LeafNode::new("code", &span.text),
        SpanKind::Link => LeafNode::new("a", &span.text).with_attribute("href", url),
        SpanKind::Image => LeafNode::new("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", &span.text),
    };
    HtmlNode::Leaf(leaf)
}

/// Converts a span whose kind is given by name, e.g. `"bold"`.
pub fn named_span_to_node(text: &str, kind: &str, url: Option<&str>) -> Result<HtmlNode> {
    let kind = kind.parse::<SpanKind>()?;
    let span = Span {
        text: text.to_string(),
        kind,
        url: url.map(str::to_string),
    };
    Ok(span_to_node(&span))
}
