//! The Sealer: unified API for sealing and opening payloads.
//!
//! The Sealer owns the optional secret key and the carrier-facing
//! configuration, stamps records with the clock, and drives the
//! carrier boundary for emit and recover flows.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use qrseal_core::{
    codec, url, verify_token_with_param, RecordBuilder, SecretKey, Token, Verification,
    VerifyReason,
};

use crate::carrier::{Carrier, CarrierArtifact, CarrierError};
use crate::error::Result;

/// Configuration for the Sealer.
#[derive(Debug, Clone)]
pub struct SealerConfig {
    /// Query parameter that carries tokens in wrapped URLs.
    pub query_param: String,
}

impl Default for SealerConfig {
    fn default() -> Self {
        Self {
            query_param: url::DEFAULT_PARAM.to_string(),
        }
    }
}

/// The main Sealer struct.
///
/// A Sealer is either keyed or unkeyed from construction. Keyed
/// sealers produce authenticated records; unkeyed sealers produce
/// integrity-only records. Nothing falls back to a built-in secret.
pub struct Sealer {
    /// Optional secret key; presence selects keyed mode.
    key: Option<SecretKey>,
    /// Configuration.
    config: SealerConfig,
}

impl Sealer {
    /// Create a sealer with an explicit key and configuration.
    pub fn new(key: Option<SecretKey>, config: SealerConfig) -> Self {
        Self { key, config }
    }

    /// A sealer producing unkeyed (hash mode) records.
    pub fn unkeyed() -> Self {
        Self::new(None, SealerConfig::default())
    }

    /// A sealer producing keyed (hmac mode) records.
    pub fn keyed(key: SecretKey) -> Self {
        Self::new(Some(key), SealerConfig::default())
    }

    /// Check whether this sealer produces keyed records.
    pub fn is_keyed(&self) -> bool {
        self.key.is_some()
    }

    /// The carrier query parameter this sealer embeds and extracts.
    pub fn query_param(&self) -> &str {
        &self.config.query_param
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sealing
    // ─────────────────────────────────────────────────────────────────────────

    /// Seal a message into a token, stamped with the current time.
    pub fn seal(&self, message: &[u8]) -> Token {
        self.seal_at(message, Utc::now())
    }

    /// Seal a message with an explicit timestamp.
    pub fn seal_at(&self, message: &[u8], timestamp: DateTime<Utc>) -> Token {
        let record = RecordBuilder::new(message.to_vec())
            .timestamp(timestamp)
            .seal(self.key.as_ref());
        debug!(
            len = message.len(),
            mode = record.mode.as_str(),
            "sealed message"
        );
        codec::encode(&record)
    }

    /// Seal a message and embed the token into a carrier URL.
    pub fn seal_into_url(&self, base_url: &str, message: &[u8]) -> Result<String> {
        let token = self.seal(message);
        let wrapped = url::embed_with_param(base_url, &token, &self.config.query_param)?;
        Ok(wrapped)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Opening
    // ─────────────────────────────────────────────────────────────────────────

    /// Verify a token or token-bearing URL against this sealer's key.
    ///
    /// Never fails: bad input comes back as a rejected [`Verification`]
    /// with a classified reason.
    pub fn open(&self, input: &str) -> Verification {
        verify_token_with_param(input, self.key.as_ref(), &self.config.query_param)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Carrier Pipeline
    // ─────────────────────────────────────────────────────────────────────────

    /// Seal a message and hand the token text to a carrier.
    ///
    /// With `wrap_url` set, the carrier receives the token embedded in
    /// that URL; otherwise it receives the bare token.
    pub async fn seal_to_carrier<C: Carrier + ?Sized>(
        &self,
        carrier: &C,
        message: &[u8],
        wrap_url: Option<&str>,
    ) -> Result<CarrierArtifact> {
        let text = match wrap_url {
            Some(base) => self.seal_into_url(base, message)?,
            None => self.seal(message).into_inner(),
        };
        let artifact = carrier.emit(&text).await?;
        Ok(artifact)
    }

    /// Recover token text from a carrier artifact and verify it.
    ///
    /// A carrier that finds no payload yields a rejected verification,
    /// not an error; other carrier failures are errors.
    pub async fn open_from_carrier<C: Carrier + ?Sized>(
        &self,
        carrier: &C,
        artifact: &CarrierArtifact,
    ) -> Result<Verification> {
        match carrier.recover(artifact).await {
            Ok(text) => Ok(self.open(&text)),
            Err(CarrierError::NoPayloadFound) => {
                warn!("carrier artifact holds no payload");
                Ok(Verification::rejected(VerifyReason::NoPayloadFound))
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SealError;
    use chrono::TimeZone;
    use qrseal_core::{decode, IntegrityMode, MessageView};

    fn fixed_ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_unkeyed_seal_open() {
        let sealer = Sealer::unkeyed();
        let token = sealer.seal(b"Hello");

        let result = sealer.open(token.as_str());
        assert!(result.is_valid());
        assert_eq!(result.message, Some(MessageView::Text("Hello".to_string())));
        assert_eq!(result.metadata.unwrap().mode, IntegrityMode::Hash);
    }

    #[test]
    fn test_keyed_seal_open() {
        let sealer = Sealer::keyed(SecretKey::from_passphrase("shared-secret"));
        assert!(sealer.is_keyed());

        let token = sealer.seal(b"keyed message");
        let result = sealer.open(token.as_str());

        assert!(result.is_valid());
        assert_eq!(result.metadata.unwrap().mode, IntegrityMode::Hmac);
    }

    #[test]
    fn test_seal_at_stamps_timestamp() {
        let sealer = Sealer::unkeyed();
        let token = sealer.seal_at(b"stamped", fixed_ts());

        let record = decode(&token).unwrap();
        assert_eq!(record.timestamp, Some(fixed_ts()));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let sealer_a = Sealer::keyed(SecretKey::from_passphrase("key-a"));
        let sealer_b = Sealer::keyed(SecretKey::from_passphrase("key-b"));

        let token = sealer_a.seal(b"between friends");
        let result = sealer_b.open(token.as_str());

        assert!(!result.is_valid());
        assert_eq!(result.reason, Some(VerifyReason::IntegrityMismatch));
    }

    #[test]
    fn test_unkeyed_open_of_keyed_token() {
        let keyed = Sealer::keyed(SecretKey::from_passphrase("key-a"));
        let token = keyed.seal(b"keyed message");

        let result = Sealer::unkeyed().open(token.as_str());
        assert!(!result.is_valid());
        assert_eq!(result.reason, Some(VerifyReason::KeyRequired));
    }

    #[test]
    fn test_seal_into_url_roundtrip() {
        let sealer = Sealer::unkeyed();
        let wrapped = sealer
            .seal_into_url("https://example.com/scan", b"Hello")
            .unwrap();

        assert!(wrapped.starts_with("https://example.com/scan?data="));
        assert!(sealer.open(&wrapped).is_valid());
    }

    #[test]
    fn test_seal_into_url_rejects_bare_host() {
        let sealer = Sealer::unkeyed();
        let err = sealer.seal_into_url("example.com", b"Hello").unwrap_err();
        assert!(matches!(err, SealError::Embed(_)));
    }

    #[test]
    fn test_custom_query_param() {
        let config = SealerConfig {
            query_param: "p".to_string(),
        };
        let sealer = Sealer::new(None, config);
        assert_eq!(sealer.query_param(), "p");

        let wrapped = sealer
            .seal_into_url("https://example.com/", b"Hello")
            .unwrap();
        assert!(wrapped.contains("?p="));
        assert!(sealer.open(&wrapped).is_valid());

        // The default-config sealer does not find the payload under "p".
        let result = Sealer::unkeyed().open(&wrapped);
        assert_eq!(result.reason, Some(VerifyReason::NoPayloadFound));
    }
}
