//! The two output envelopes used by the external tools.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DecodeError, DecodeResult};

/// Envelope of a tool's standard output.
///
/// The envelope is a property of the operation being called, never
/// sniffed from the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// A JSON string literal wrapping a JSON document.
    Double,
    /// A JSON document.
    Single,
}

impl Encoding {
    /// Decode tool output into `T`.
    ///
    /// Surrounding whitespace (the tools end with a newline) is ignored.
    /// Either the whole value decodes or an error is returned.
    pub fn decode<T: DeserializeOwned>(self, stdout: &str) -> DecodeResult<T> {
        let text = stdout.trim();
        if text.is_empty() {
            return Err(DecodeError::Empty);
        }

        match self {
            Self::Double => {
                let inner: String = serde_json::from_str(text).map_err(DecodeError::Envelope)?;
                serde_json::from_str(&inner).map_err(DecodeError::Document)
            }
            Self::Single => serde_json::from_str(text).map_err(DecodeError::Document),
        }
    }

    /// Encode `value` the way a tool using this envelope prints it.
    pub fn encode<T: Serialize>(self, value: &T) -> DecodeResult<String> {
        let document = serde_json::to_string(value).map_err(DecodeError::Encode)?;
        match self {
            Self::Double => serde_json::to_string(&document).map_err(DecodeError::Encode),
            Self::Single => Ok(document),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Double => write!(f, "double-encoded JSON"),
            Self::Single => write!(f, "JSON"),
        }
    }
}
