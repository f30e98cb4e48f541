//! Error types for the unembed library.

use std::io;
use thiserror::Error;

/// Result type alias for unembed operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Maximum number of bytes of the failing payload included in a decode error.
pub(crate) const SNIPPET_LEN: usize = 200;

/// Error types that can occur during extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source document or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The target key literal does not occur in the document, or no opening
    /// brace follows it.
    #[error("target key not found: {0}")]
    KeyNotFound(String),

    /// The scan reached the end of the document with braces still open.
    #[error("unbalanced braces: document ended at depth {depth}")]
    Unbalanced {
        /// Nesting depth when the document ended.
        depth: usize,
    },

    /// The extracted span is not valid JSON.
    #[error("JSON decode error: {message} (near: {snippet})")]
    Decode {
        /// Message from the underlying deserializer.
        message: String,
        /// Prefix of the offending text, for diagnosis.
        snippet: String,
    },

    /// Error serializing the decoded value.
    #[error("rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a decode error from a serde_json error and the failing payload.
    pub(crate) fn decode(err: serde_json::Error, payload: &str) -> Self {
        let mut end = payload.len().min(SNIPPET_LEN);
        while !payload.is_char_boundary(end) {
            end -= 1;
        }
        Error::Decode {
            message: err.to_string(),
            snippet: payload[..end].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::KeyNotFound("\"config\":".to_string());
        assert_eq!(err.to_string(), "target key not found: \"config\":");

        let err = Error::Unbalanced { depth: 3 };
        assert_eq!(
            err.to_string(),
            "unbalanced braces: document ended at depth 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_decode_snippet_truncation() {
        let payload = "x".repeat(500);
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::decode(serde_err, &payload);
        match err {
            Error::Decode { snippet, .. } => assert_eq!(snippet.len(), SNIPPET_LEN),
            _ => panic!("expected decode error"),
        }
    }

    #[test]
    fn test_decode_snippet_multibyte_boundary() {
        // Snippet must cut on a char boundary even for multibyte input
        let payload = "한".repeat(100);
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::decode(serde_err, &payload);
        match err {
            Error::Decode { snippet, .. } => {
                assert!(snippet.len() <= SNIPPET_LEN);
                assert!(snippet.chars().all(|c| c == '한'));
            }
            _ => panic!("expected decode error"),
        }
    }
}
