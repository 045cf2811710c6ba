//! # qrseal
//!
//! Tamper-evident, self-describing payloads for QR codes and links.
//!
//! ## Overview
//!
//! qrseal seals a message into a compact token that travels through
//! hostile channels (QR scans, copy-paste, query strings) and proves
//! on arrival that nothing changed in transit:
//!
//! - **Records**: self-describing payloads carrying version, mode, tag,
//!   message, and an optional timestamp
//! - **Tokens**: the URL-safe wire form of a record
//! - **Modes**: `hash` (unkeyed SHA-256) and `hmac` (keyed HMAC-SHA256)
//! - **Carriers**: a pluggable boundary for rendering tokens into
//!   physical artifacts and scanning them back
//!
//! ## Key Concepts
//!
//! - **Token**: opaque and printable. Survives copy-paste. Decodes
//!   without a key.
//! - **Tag**: 32 bytes, always present, compared in constant time.
//! - **Keyed mode**: requires the same key at both ends. There is no
//!   built-in default secret.
//! - **Verification**: total. Bad input becomes a classified
//!   rejection, never a panic.
//!
//! ## Usage
//!
//! ```rust
//! use qrseal::{Sealer, SecretKey};
//!
//! let sealer = Sealer::keyed(SecretKey::from_passphrase("shared-secret"));
//! let token = sealer.seal(b"met at the workshop");
//!
//! let opened = sealer.open(token.as_str());
//! assert!(opened.is_valid());
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the protocol crate for direct access:
//!
//! - `qrseal::core` - Protocol primitives (records, codec, URL
//!   embedding, verification)

pub mod carrier;
pub mod error;
pub mod sealer;

// Re-export the protocol crate
pub use qrseal_core as core;

// Re-export main types for convenience
pub use carrier::{Carrier, CarrierArtifact, CarrierError};
pub use error::{Result, SealError};
pub use sealer::{Sealer, SealerConfig};

// Re-export commonly used core types
pub use qrseal_core::{
    decode, encode, verify_token, DecodeError, IntegrityMode, IntegrityTag, MessageView,
    PayloadRecord, RecordBuilder, RecordMetadata, SecretKey, Token, Verification, VerifyReason,
};
