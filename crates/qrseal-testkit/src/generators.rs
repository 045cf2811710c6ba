//! Proptest generators for property-based testing.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use qrseal_core::{IntegrityMode, PayloadRecord, RecordBuilder, SecretKey, Token};

/// Generate message bytes up to `max_len`.
pub fn message(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a printable passphrase.
pub fn passphrase() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{1,32}".prop_map(String::from)
}

/// Generate a secret key from arbitrary bytes.
pub fn secret_key() -> impl Strategy<Value = SecretKey> {
    prop::collection::vec(any::<u8>(), 1..=64).prop_map(SecretKey::from_bytes)
}

/// Generate an integrity mode.
pub fn integrity_mode() -> impl Strategy<Value = IntegrityMode> {
    prop_oneof![Just(IntegrityMode::Hash), Just(IntegrityMode::Hmac)]
}

/// Generate a sealing instant with microsecond precision.
pub fn sealing_instant() -> impl Strategy<Value = DateTime<Utc>> {
    // 2001-09-09 through 2033-05-18, the comfortable range.
    (1_000_000_000i64..2_000_000_000i64, 0u32..1_000_000u32).prop_map(|(secs, micros)| {
        Utc.timestamp_opt(secs, micros * 1_000)
            .single()
            .expect("generated instant is valid")
    })
}

/// Parameters for generating a sealed record.
#[derive(Debug, Clone)]
pub struct TokenParams {
    pub message: Vec<u8>,
    pub key: Option<SecretKey>,
    pub sealed_at: DateTime<Utc>,
}

impl Arbitrary for TokenParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            message(512),
            prop::option::of(secret_key()),
            sealing_instant(),
        )
            .prop_map(|(message, key, sealed_at)| TokenParams {
                message,
                key,
                sealed_at,
            })
            .boxed()
    }
}

/// Build a record from parameters.
pub fn record_from_params(params: &TokenParams) -> PayloadRecord {
    RecordBuilder::new(params.message.clone())
        .timestamp(params.sealed_at)
        .seal(params.key.as_ref())
}

/// Seal parameters into a token.
pub fn token_from_params(params: &TokenParams) -> Token {
    qrseal_core::encode(&record_from_params(params))
}
