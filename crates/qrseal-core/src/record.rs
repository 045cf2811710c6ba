//! Payload record: a message bound to its integrity tag.
//!
//! A record is immutable once sealed. The timestamp is metadata only and
//! never participates in the integrity computation.

use bytes::Bytes;
use chrono::{DateTime, Timelike, Utc};

use crate::integrity::{self, IntegrityTag, SecretKey};

/// The current wire format version.
pub const RECORD_VERSION: u32 = 1;

/// How a record's integrity tag was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrityMode {
    /// Unkeyed SHA-256 digest.
    Hash,
    /// Keyed HMAC-SHA256 tag.
    Hmac,
}

impl IntegrityMode {
    /// Wire name for serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::Hmac => "hmac",
        }
    }

    /// Try to parse from a wire name. The set is closed; anything else
    /// is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hash" => Some(Self::Hash),
            "hmac" => Some(Self::Hmac),
            _ => None,
        }
    }

    /// Check if this mode needs a key to verify.
    pub fn is_keyed(self) -> bool {
        matches!(self, Self::Hmac)
    }
}

/// A complete payload record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadRecord {
    /// Wire format version (currently 1).
    pub version: u32,

    /// How `tag` was computed.
    pub mode: IntegrityMode,

    /// SHA-256 or HMAC-SHA256 over the message bytes only.
    pub tag: IntegrityTag,

    /// The protected content. Arbitrary bytes.
    pub message: Bytes,

    /// Creation time. Metadata only; tolerated absent on the wire.
    pub timestamp: Option<DateTime<Utc>>,
}

impl PayloadRecord {
    /// Check if this record needs a key to verify.
    pub fn is_keyed(&self) -> bool {
        self.mode.is_keyed()
    }

    /// Message length in bytes.
    pub fn message_len(&self) -> usize {
        self.message.len()
    }
}

/// Builder for creating payload records.
pub struct RecordBuilder {
    message: Bytes,
    timestamp: Option<DateTime<Utc>>,
}

impl RecordBuilder {
    /// Start building a record around the given message bytes.
    pub fn new(message: impl Into<Bytes>) -> Self {
        Self {
            message: message.into(),
            timestamp: None,
        }
    }

    /// Set the creation timestamp.
    ///
    /// Sub-microsecond precision is dropped; the wire format carries
    /// microseconds.
    pub fn timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(truncate_to_micros(ts));
        self
    }

    /// Seal the record, deriving the mode from key presence.
    ///
    /// A key, even an empty one, selects [`IntegrityMode::Hmac`]; no key
    /// selects [`IntegrityMode::Hash`]. Sealing cannot fail.
    pub fn seal(self, key: Option<&SecretKey>) -> PayloadRecord {
        let (mode, tag) = match key {
            Some(key) => (
                IntegrityMode::Hmac,
                integrity::authenticate(&self.message, key),
            ),
            None => (IntegrityMode::Hash, integrity::digest(&self.message)),
        };

        PayloadRecord {
            version: RECORD_VERSION,
            mode,
            tag,
            message: self.message,
            timestamp: self.timestamp,
        }
    }
}

fn truncate_to_micros(ts: DateTime<Utc>) -> DateTime<Utc> {
    let micros = ts.timestamp_subsec_nanos() / 1000 * 1000;
    ts.with_nanosecond(micros).unwrap_or(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mode_wire_name_roundtrip() {
        for mode in [IntegrityMode::Hash, IntegrityMode::Hmac] {
            let name = mode.as_str();
            let recovered = IntegrityMode::parse(name).unwrap();
            assert_eq!(mode, recovered);
        }
    }

    #[test]
    fn test_mode_set_is_closed() {
        assert_eq!(IntegrityMode::parse("sha1"), None);
        assert_eq!(IntegrityMode::parse("HASH"), None);
        assert_eq!(IntegrityMode::parse(""), None);
    }

    #[test]
    fn test_builder_hash_mode() {
        let record = RecordBuilder::new(b"hello".to_vec()).seal(None);

        assert_eq!(record.version, RECORD_VERSION);
        assert_eq!(record.mode, IntegrityMode::Hash);
        assert!(!record.is_keyed());
        assert_eq!(record.tag, integrity::digest(b"hello"));
        assert_eq!(record.message.as_ref(), b"hello");
        assert_eq!(record.timestamp, None);
    }

    #[test]
    fn test_builder_hmac_mode() {
        let key = SecretKey::from_passphrase("sealing-key");
        let record = RecordBuilder::new(b"hello".to_vec()).seal(Some(&key));

        assert_eq!(record.mode, IntegrityMode::Hmac);
        assert!(record.is_keyed());
        assert_eq!(record.tag, integrity::authenticate(b"hello", &key));
    }

    #[test]
    fn test_empty_key_selects_hmac() {
        let key = SecretKey::from_passphrase("");
        let record = RecordBuilder::new(b"hello".to_vec()).seal(Some(&key));

        assert_eq!(record.mode, IntegrityMode::Hmac);
        assert_ne!(record.tag, integrity::digest(b"hello"));
    }

    #[test]
    fn test_timestamp_truncated_to_micros() {
        let ts = Utc
            .with_ymd_and_hms(2025, 1, 14, 12, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();

        let record = RecordBuilder::new(b"x".to_vec()).timestamp(ts).seal(None);

        let stored = record.timestamp.unwrap();
        assert_eq!(stored.timestamp_subsec_nanos(), 123_456_000);
    }

    #[test]
    fn test_message_len() {
        let record = RecordBuilder::new(vec![0u8; 42]).seal(None);
        assert_eq!(record.message_len(), 42);
    }
}
