//! Error types for YIN parsing.

use thiserror::Error;

/// Result type alias for yangview-yin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a YIN document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// XML syntax error from quick-xml.
    #[error("XML syntax error: {message} at byte {position}")]
    Syntax { message: String, position: u64 },

    /// Unexpected end of input.
    #[error("unexpected end of input, expected closing tag </{expected}>")]
    UnexpectedEof { expected: String },

    /// Closing tag without a matching open element.
    #[error("unexpected closing tag </{found}>")]
    UnexpectedClose { found: String },

    /// Empty document (no root element).
    #[error("empty document: no root element found")]
    EmptyDocument,

    /// More than one root element.
    #[error("multiple root elements")]
    MultipleRoots,
}
