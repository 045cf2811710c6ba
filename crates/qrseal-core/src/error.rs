//! Error types for the payload protocol.

use thiserror::Error;

/// Errors from decoding a token into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The wire version is not the supported one.
    #[error("unsupported payload version: {0}")]
    UnsupportedVersion(u32),

    /// The mode string is outside the closed set.
    #[error("unknown integrity mode: {0:?}")]
    UnknownMode(String),

    /// Anything else: outer base64, JSON shape, field contents.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Errors from embedding a token into a carrier URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// The carrier URL has no `scheme://` part.
    #[error("carrier url has no scheme: {0:?}")]
    MissingScheme(String),
}
