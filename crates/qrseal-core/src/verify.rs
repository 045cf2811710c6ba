//! Verification state machine for tokens and token-bearing URLs.
//!
//! Verification never panics and never returns `Err`: every outcome is a
//! [`Verification`] value. Once a record parses, the message and its
//! metadata are surfaced even when the tag does not match, so callers
//! can inspect what a tampered artifact claimed to carry.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::codec::{self, Token};
use crate::error::DecodeError;
use crate::integrity::{self, SecretKey};
use crate::record::IntegrityMode;
use crate::url;

/// A decoded message, split by whether the bytes are valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageView {
    /// The message bytes were valid UTF-8.
    Text(String),
    /// Arbitrary bytes; renders as standard base64.
    Binary(Bytes),
}

impl MessageView {
    /// Classify message bytes.
    pub fn from_bytes(bytes: Bytes) -> Self {
        match std::str::from_utf8(&bytes) {
            Ok(text) => Self::Text(text.to_string()),
            Err(_) => Self::Binary(bytes),
        }
    }

    /// Check for the binary variant.
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    /// The exact message bytes, whichever variant.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    /// A printable form: the text itself, or standard base64 for binary.
    pub fn display_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Binary(bytes) => STANDARD.encode(bytes),
        }
    }
}

impl fmt::Display for MessageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

/// Metadata surfaced alongside a parsed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordMetadata {
    /// How the record's tag was computed.
    pub mode: IntegrityMode,
    /// Creation time claimed by the sealer, if present.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Why a verification was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyReason {
    /// The wire version is not the supported one.
    #[error("unsupported payload version: {got}")]
    UnsupportedVersion { got: u32 },

    /// The mode string is outside the closed set.
    #[error("unknown integrity mode: {got:?}")]
    UnknownMode { got: String },

    /// The token or its inner JSON could not be decoded.
    #[error("malformed payload: {detail}")]
    MalformedPayload { detail: String },

    /// The input carried no token at all.
    #[error("no payload found in input")]
    NoPayloadFound,

    /// The record is keyed but no key was supplied.
    #[error("payload is keyed; a verification key is required")]
    KeyRequired,

    /// The recomputed tag differs: message or key does not match.
    #[error("integrity mismatch: message or key differs from sealing")]
    IntegrityMismatch,
}

impl From<DecodeError> for VerifyReason {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::UnsupportedVersion(got) => Self::UnsupportedVersion { got },
            DecodeError::UnknownMode(got) => Self::UnknownMode { got },
            DecodeError::Malformed(detail) => Self::MalformedPayload { detail },
        }
    }
}

/// Outcome of the verification state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// The overall verdict.
    pub valid: bool,
    /// Decoded message; present whenever the record parsed.
    pub message: Option<MessageView>,
    /// Mode and timestamp; present whenever the record parsed.
    pub metadata: Option<RecordMetadata>,
    /// Rejection reason; `None` when valid.
    pub reason: Option<VerifyReason>,
}

impl Verification {
    /// A passing verdict.
    pub fn accepted(message: MessageView, metadata: RecordMetadata) -> Self {
        Self {
            valid: true,
            message: Some(message),
            metadata: Some(metadata),
            reason: None,
        }
    }

    /// A rejection from before the record could be parsed.
    pub fn rejected(reason: VerifyReason) -> Self {
        Self {
            valid: false,
            message: None,
            metadata: None,
            reason: Some(reason),
        }
    }

    /// A rejection that still surfaces the parsed record.
    pub fn rejected_with_record(
        reason: VerifyReason,
        message: MessageView,
        metadata: RecordMetadata,
    ) -> Self {
        Self {
            valid: false,
            message: Some(message),
            metadata: Some(metadata),
            reason: Some(reason),
        }
    }

    /// Check the verdict.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Verify a token or a token-bearing URL.
///
/// `input` may be a bare token or an http(s) URL whose query carries
/// one under the default parameter. The key is consulted only for keyed
/// records; hash-mode records ignore it. Tag comparison is
/// constant-time.
pub fn verify_token(input: &str, key: Option<&SecretKey>) -> Verification {
    verify_token_with_param(input, key, url::DEFAULT_PARAM)
}

/// Verify with a custom carrier query parameter name.
pub fn verify_token_with_param(
    input: &str,
    key: Option<&SecretKey>,
    param: &str,
) -> Verification {
    let token = match url::extract(input, param) {
        Some(token) => token,
        None if url::is_http_url(input) => {
            return Verification::rejected(VerifyReason::NoPayloadFound);
        }
        None => Token::new(input),
    };

    let record = match codec::decode(&token) {
        Ok(record) => record,
        Err(err) => return Verification::rejected(err.into()),
    };

    let view = MessageView::from_bytes(record.message.clone());
    let metadata = RecordMetadata {
        mode: record.mode,
        timestamp: record.timestamp,
    };

    let expected = match record.mode {
        IntegrityMode::Hash => integrity::digest(&record.message),
        IntegrityMode::Hmac => match key {
            Some(key) => integrity::authenticate(&record.message, key),
            None => {
                return Verification::rejected_with_record(VerifyReason::KeyRequired, view, metadata)
            }
        },
    };

    if expected.ct_eq(&record.tag) {
        Verification::accepted(view, metadata)
    } else {
        Verification::rejected_with_record(VerifyReason::IntegrityMismatch, view, metadata)
    }
}
