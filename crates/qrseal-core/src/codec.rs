//! Token codec: compact JSON wrapped in URL-safe base64.
//!
//! The wire format is a small JSON object with fixed field order:
//!
//! ```json
//! {"v":1,"mode":"hash","mac":"...","msg_b64":"...","ts":"..."}
//! ```
//!
//! `mac` is lowercase hex in hash mode and standard base64 in hmac mode;
//! both encodings are load-bearing for tokens produced by older sealers.
//! `msg_b64` is standard base64 of the message bytes. The whole object is
//! encoded with the padded URL-safe base64 alphabet to form the token.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DecodeError;
use crate::integrity::{IntegrityTag, TAG_LEN};
use crate::record::{IntegrityMode, PayloadRecord, RECORD_VERSION};

/// A serialized payload record: URL-safe base64 over compact JSON.
///
/// Tokens are opaque to carriers; the only structure a carrier may rely
/// on is the URL-safe alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap an already-serialized token string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// View as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Token length in characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Inner JSON shape. Field order here fixes the serialized order.
#[derive(Serialize, Deserialize)]
struct WireRecord {
    v: u32,
    mode: String,
    mac: String,
    msg_b64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ts: Option<String>,
}

/// Serialize a record into a token.
pub fn encode(record: &PayloadRecord) -> Token {
    let mac = match record.mode {
        IntegrityMode::Hash => record.tag.to_hex(),
        IntegrityMode::Hmac => STANDARD.encode(record.tag.as_bytes()),
    };

    let wire = WireRecord {
        v: record.version,
        mode: record.mode.as_str().to_string(),
        mac,
        msg_b64: STANDARD.encode(&record.message),
        ts: record
            .timestamp
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Micros, false)),
    };

    let json = serde_json::to_vec(&wire).expect("wire record serializes to json");
    Token(URL_SAFE.encode(json))
}

/// Deserialize a token back into a record.
///
/// The version is checked before any other field is validated. Unknown
/// extra JSON keys are ignored, and a missing `ts` is tolerated; every
/// other field is required.
pub fn decode(token: &Token) -> Result<PayloadRecord, DecodeError> {
    let json = URL_SAFE
        .decode(token.as_str())
        .map_err(|e| DecodeError::Malformed(format!("outer base64: {}", e)))?;

    let wire: WireRecord = serde_json::from_slice(&json)
        .map_err(|e| DecodeError::Malformed(format!("payload json: {}", e)))?;

    if wire.v != RECORD_VERSION {
        return Err(DecodeError::UnsupportedVersion(wire.v));
    }

    let mode = IntegrityMode::parse(&wire.mode)
        .ok_or_else(|| DecodeError::UnknownMode(wire.mode.clone()))?;

    let tag_bytes = match mode {
        IntegrityMode::Hash => {
            hex::decode(&wire.mac).map_err(|e| DecodeError::Malformed(format!("mac hex: {}", e)))?
        }
        IntegrityMode::Hmac => STANDARD
            .decode(&wire.mac)
            .map_err(|e| DecodeError::Malformed(format!("mac base64: {}", e)))?,
    };
    if tag_bytes.len() != TAG_LEN {
        return Err(DecodeError::Malformed(format!(
            "mac must be {} bytes, got {}",
            TAG_LEN,
            tag_bytes.len()
        )));
    }
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&tag_bytes);

    let message = STANDARD
        .decode(&wire.msg_b64)
        .map_err(|e| DecodeError::Malformed(format!("msg_b64: {}", e)))?;

    let timestamp = match wire.ts {
        Some(ts) => Some(
            DateTime::parse_from_rfc3339(&ts)
                .map_err(|e| DecodeError::Malformed(format!("ts: {}", e)))?
                .with_timezone(&Utc),
        ),
        None => None,
    };

    Ok(PayloadRecord {
        version: wire.v,
        mode,
        tag: IntegrityTag::from_bytes(tag),
        message: message.into(),
        timestamp,
    })
}
