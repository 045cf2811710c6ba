//! # qrseal Core
//!
//! Pure primitives for qrseal: payload records, integrity tags, the token
//! codec, URL embedding, and the verification state machine.
//!
//! This crate contains no I/O, no clock, no async. It is pure computation
//! over byte strings, so every operation can be called freely from
//! concurrent contexts.
//!
//! ## Key Types
//!
//! - [`PayloadRecord`] - A message bound to its integrity tag
//! - [`IntegrityTag`] - 32-byte SHA-256 or HMAC-SHA256 output
//! - [`IntegrityMode`] - Discriminator for how the tag was computed
//! - [`Token`] - The URL-safe serialized form of a record
//! - [`Verification`] - Outcome of the verification state machine
//!
//! ## Wire format
//!
//! Records serialize to compact JSON wrapped in URL-safe base64. See the
//! [`codec`] module.

pub mod codec;
pub mod error;
pub mod integrity;
pub mod record;
pub mod url;
pub mod verify;

pub use codec::{decode, encode, Token};
pub use error::{DecodeError, EmbedError};
pub use integrity::{authenticate, digest, IntegrityTag, SecretKey, TAG_LEN};
pub use record::{IntegrityMode, PayloadRecord, RecordBuilder, RECORD_VERSION};
pub use url::{embed, embed_with_param, extract, DEFAULT_PARAM};
pub use verify::{
    verify_token, verify_token_with_param, MessageView, RecordMetadata, Verification,
    VerifyReason,
};
