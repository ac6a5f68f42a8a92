//! Decoding errors.

use thiserror::Error;

/// Result type for decoding tool output.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Reasons a tool's standard output could not be turned into a record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The tool printed nothing (or only whitespace).
    #[error("tool produced no output")]
    Empty,

    /// The outer layer of a double-encoded answer is not a JSON string.
    #[error("output is not a JSON string literal: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The JSON document itself is malformed or has the wrong shape.
    #[error("malformed JSON document: {0}")]
    Document(#[source] serde_json::Error),

    /// A value could not be serialized.
    #[error("could not encode value: {0}")]
    Encode(#[source] serde_json::Error),
}
