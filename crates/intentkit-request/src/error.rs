//! Error types for reading and encoding extras
//!
//! Building a request never fails. Errors only surface when a caller reads a
//! payload entry back with a type that does not match how it was stored, or
//! asks for a value to be encoded as a serializable extra.

use crate::extra::ExtraKind;

/// Errors produced by typed extra access
#[derive(Debug, thiserror::Error)]
pub enum ExtraError {
    /// The entry exists but was stored under a different kind
    #[error("extra `{key}` holds a {found} value, expected {expected}")]
    KindMismatch {
        /// Key that was read
        key: String,
        /// Kind the caller asked for
        expected: ExtraKind,
        /// Kind actually stored under the key
        found: ExtraKind,
    },

    /// A serializable entry did not decode into the requested type
    #[error("extra `{key}` could not be decoded: {source}")]
    Decode {
        /// Key that was read
        key: String,
        /// Underlying decoder error
        source: serde_json::Error,
    },

    /// A value could not be encoded as a serializable extra
    #[error("value could not be encoded as a serializable extra: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ExtraError {
    /// Key involved in the failure, if any
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::KindMismatch { key, .. } | Self::Decode { key, .. } => Some(key),
            Self::Encode(_) => None,
        }
    }
}
