use crate::error::Result;
use crate::node::{span_to_node, HtmlNode, ParentNode};
use crate::parser::text_to_spans;

use log::debug;

pub const DEFAULT_WRAP_TAG: &str = "p";

/// One leaf node per inline span of `text`.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    let spans = text_to_spans(text)?;
    debug!("{} spans", spans.len());
    Ok(spans.iter().map(span_to_node).collect())
}

pub fn text_to_parent(text: &str, tag: &str) -> Result<HtmlNode> {
    Ok(ParentNode::new(tag, text_to_children(text)?).into())
}

/// Renders `text` as a single `<p>` element.
pub fn translate(text: &str) -> Result<String> {
    text_to_parent(text, DEFAULT_WRAP_TAG)?.to_html()
}
