//! Error types for document access and codec operations.

use thiserror::Error;

/// Errors that can occur while reading, writing, or mutating a
/// configuration document.
///
/// A path that resolves to nothing is *not* an error: read operations
/// return `Option`/defaults for absent values, so Not-Found never
/// appears here.
#[derive(Error, Debug)]
pub enum ConfError {
    /// The binary input violated the wire format (truncated stream, unknown
    /// tag, stray end marker, over-long length, trailing bytes, ...).
    /// Includes the byte offset where the violation was detected.
    #[error("malformed input at byte {offset}: {message}")]
    MalformedInput { offset: usize, message: String },

    /// A write target (or one of its ancestors) already exists with an
    /// incompatible shape, e.g. setting a value where a container lives.
    /// The document is left unmodified.
    #[error("type mismatch at path {path:?}")]
    TypeMismatch { path: String },

    /// The input string was not valid JSON (JSON interop path).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The underlying resource could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfError {
    pub(crate) fn malformed(offset: usize, message: impl Into<String>) -> Self {
        ConfError::MalformedInput {
            offset,
            message: message.into(),
        }
    }

    pub(crate) fn mismatch(path: &str) -> Self {
        ConfError::TypeMismatch {
            path: path.to_string(),
        }
    }
}

/// Convenience alias used throughout binconf-core.
pub type Result<T> = std::result::Result<T, ConfError>;
