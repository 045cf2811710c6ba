//! Integrity primitives: SHA-256 digests and HMAC-SHA256 tags.
//!
//! Both modes produce a 32-byte [`IntegrityTag`]. Tag comparison is
//! constant-time; `PartialEq` on tags delegates to it.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of every integrity tag.
pub const TAG_LEN: usize = 32;

/// A 32-byte integrity tag: SHA-256 digest or HMAC-SHA256 output.
#[derive(Clone, Copy)]
pub struct IntegrityTag(pub [u8; TAG_LEN]);

impl IntegrityTag {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != TAG_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; TAG_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Constant-time equality over the full 32 bytes.
    pub fn ct_eq(&self, other: &Self) -> bool {
        bool::from(self.0.ct_eq(&other.0))
    }

    /// The zero tag (sentinel value).
    pub const ZERO: Self = Self([0u8; TAG_LEN]);
}

impl PartialEq for IntegrityTag {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl Eq for IntegrityTag {}

impl fmt::Debug for IntegrityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for IntegrityTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; TAG_LEN]> for IntegrityTag {
    fn from(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }
}

/// A secret key for keyed tagging.
///
/// Any byte string is a valid key, including the empty one. Key presence,
/// not length, is what selects keyed mode upstream.
#[derive(Clone)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Create from a UTF-8 passphrase.
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self(passphrase.as_bytes().to_vec())
    }

    /// Get the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the key is empty. An empty key is still a key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material never reaches logs.
        write!(f, "SecretKey({} bytes)", self.0.len())
    }
}

/// Compute the unkeyed SHA-256 digest of a message.
pub fn digest(message: &[u8]) -> IntegrityTag {
    let mut hasher = Sha256::new();
    hasher.update(message);
    IntegrityTag(hasher.finalize().into())
}

/// Compute the keyed HMAC-SHA256 tag of a message.
pub fn authenticate(message: &[u8], key: &SecretKey) -> IntegrityTag {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    IntegrityTag(mac.finalize().into_bytes().into())
}
