//! Errors raised while parsing inline markdown or rendering HTML nodes.

use thiserror::Error;

/// Every failure is terminal for the document being converted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bold, italic or code marker opens without a matching close.
    #[error("invalid markdown syntax: unmatched '{delimiter}' in text '{text}'")]
    UnmatchedDelimiter { delimiter: String, text: String },

    /// A span kind name outside the supported set.
    #[error("span kind '{0}' is not supported")]
    UnsupportedKind(String),

    #[error("all leaf nodes must have a value")]
    MissingValue,

    #[error("all parent nodes must have a tag")]
    MissingTag,

    #[error("all parent nodes must have children")]
    MissingChildren,
}

pub type Result<T> = std::result::Result<T, Error>;
