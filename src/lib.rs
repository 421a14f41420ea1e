//! Inline markdown to HTML.
//!
//! [`parser::text_to_spans`] classifies a string into bold, italic, code,
//! link and image spans; [`node`] turns spans into HTML element descriptors
//! and renders them.

pub mod entity;
pub mod error;
pub mod node;
pub mod parser;
pub mod translator;

pub use entity::{Span, SpanKind, SpanList};
pub use error::{Error, Result};
pub use node::{span_to_node, Attributes, HtmlNode, LeafNode, ParentNode};
pub use parser::text_to_spans;
pub use translator::translate;
