//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use chrono::{DateTime, TimeZone, Utc};

use qrseal::{Sealer, SecretKey, Token};
use qrseal_core::{decode, encode};

/// The deterministic passphrase fixtures seal with.
pub const FIXTURE_PASSPHRASE: &str = "fixture-shared-secret";

/// The instant all fixtures seal at: 2025-01-14T12:00:00Z.
pub fn fixture_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 14, 12, 0, 0)
        .single()
        .expect("fixture instant is valid")
}

/// A test fixture with a deterministic key and clock.
pub struct TestFixture {
    pub key: SecretKey,
    pub sealed_at: DateTime<Utc>,
}

impl TestFixture {
    /// Create a fixture with the standard passphrase and instant.
    pub fn new() -> Self {
        Self {
            key: SecretKey::from_passphrase(FIXTURE_PASSPHRASE),
            sealed_at: fixture_instant(),
        }
    }

    /// Create with a custom passphrase.
    pub fn with_passphrase(passphrase: &str) -> Self {
        Self {
            key: SecretKey::from_passphrase(passphrase),
            sealed_at: fixture_instant(),
        }
    }

    /// A keyed sealer over this fixture's key.
    pub fn keyed_sealer(&self) -> Sealer {
        Sealer::keyed(self.key.clone())
    }

    /// An unkeyed sealer.
    pub fn unkeyed_sealer(&self) -> Sealer {
        Sealer::unkeyed()
    }

    /// Seal a message in hash mode at the fixture instant.
    pub fn make_hash_token(&self, message: &[u8]) -> Token {
        self.unkeyed_sealer().seal_at(message, self.sealed_at)
    }

    /// Seal a message in hmac mode at the fixture instant.
    pub fn make_hmac_token(&self, message: &[u8]) -> Token {
        self.keyed_sealer().seal_at(message, self.sealed_at)
    }

    /// Seal a message and wrap the token into a carrier URL.
    pub fn make_wrapped_url(&self, base_url: &str, message: &[u8]) -> String {
        self.unkeyed_sealer()
            .seal_into_url(base_url, message)
            .expect("fixture base url embeds")
    }

    /// A hash-mode token whose message was swapped after sealing.
    ///
    /// The tag still covers the original message, so verification must
    /// reject the result.
    pub fn make_tampered_token(&self, message: &[u8], tampered: &[u8]) -> Token {
        let token = self.make_hash_token(message);
        let mut record = decode(&token).expect("fixture token decodes");
        record.message = tampered.to_vec().into();
        encode(&record)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple fixtures with distinct keys for cross-key tests.
pub fn multi_key_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| TestFixture::with_passphrase(&format!("fixture-key-{}", i)))
        .collect()
}
