//! Error types for mdscribe library.

use crate::model::ElementKind;
use std::io;
use thiserror::Error;

/// Result type alias for mdscribe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid content supplied to an element builder.
    #[error("Invalid element content: {0}")]
    Construction(String),

    /// Mutation attempted on a locked element.
    #[error("Operation on locked element: {0}")]
    Locked(ElementKind),

    /// A code block with no text reached the renderer.
    #[error("Rendering error: empty code blocks are not supported")]
    EmptyCodeblock,

    /// An element kind that cannot be rendered in its position.
    #[error("Rendering error: unsupported element {kind} in {context}")]
    UnsupportedElement {
        /// Kind of the offending element
        kind: ElementKind,
        /// Where the element was found
        context: &'static str,
    },

    /// Error reading or writing the JSON form of a document.
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Check if this error was raised by the renderer.
    ///
    /// Output produced before a render error must be discarded.
    pub fn is_render_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyCodeblock | Error::UnsupportedElement { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
