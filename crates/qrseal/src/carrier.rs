//! Carrier abstraction for moving sealed payloads through the world.
//!
//! A carrier turns token text into a physical or transport artifact (a
//! QR image, a printed label, an NFC frame) and recovers the text on
//! the other side. The payload protocol never inspects artifact bytes;
//! capacity limits and scanning quirks live entirely behind this trait.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors from carrier operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarrierError {
    /// The artifact holds no payload at all.
    #[error("no payload found in carrier artifact")]
    NoPayloadFound,

    /// The text exceeds what this carrier can hold.
    #[error("payload of {len} bytes exceeds carrier capacity of {max}")]
    CapacityExceeded { len: usize, max: usize },

    /// Underlying device or transport failure.
    #[error("carrier i/o: {0}")]
    Io(String),
}

/// Result type for carrier operations.
pub type Result<T> = std::result::Result<T, CarrierError>;

/// An opaque artifact produced by a carrier.
///
/// The bytes mean whatever the carrier says they mean: image data,
/// raw frames, or the token text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierArtifact(Bytes);

impl CarrierArtifact {
    /// Wrap raw artifact bytes.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// The raw artifact bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwrap into the raw bytes.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Artifact size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check for an empty artifact.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Carrier trait for emitting and recovering token text.
///
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Carrier: Send + Sync {
    /// Render token text into an artifact.
    async fn emit(&self, text: &str) -> Result<CarrierArtifact>;

    /// Recover token text from an artifact.
    ///
    /// Returns [`CarrierError::NoPayloadFound`] when the artifact
    /// holds nothing to decode.
    async fn recover(&self, artifact: &CarrierArtifact) -> Result<String>;

    /// Maximum text size in bytes this carrier can hold, if bounded.
    fn capacity(&self) -> Option<usize> {
        None
    }
}

/// A simple in-memory carrier for testing.
///
/// Stores the text verbatim as the artifact bytes and keeps a journal
/// of everything emitted.
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    /// In-memory carrier implementation.
    pub struct MemoryCarrier {
        /// Byte limit for emitted text, None for unbounded.
        capacity: Option<usize>,
        /// Every artifact emitted so far, oldest first.
        emitted: RwLock<Vec<CarrierArtifact>>,
    }

    impl MemoryCarrier {
        /// Create an unbounded memory carrier.
        pub fn new() -> Self {
            Self {
                capacity: None,
                emitted: RwLock::new(Vec::new()),
            }
        }

        /// Create a carrier that rejects text longer than `max` bytes.
        pub fn bounded(max: usize) -> Self {
            Self {
                capacity: Some(max),
                emitted: RwLock::new(Vec::new()),
            }
        }

        /// Artifacts emitted so far, oldest first.
        pub async fn emitted(&self) -> Vec<CarrierArtifact> {
            self.emitted.read().await.clone()
        }
    }

    impl Default for MemoryCarrier {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Carrier for MemoryCarrier {
        async fn emit(&self, text: &str) -> Result<CarrierArtifact> {
            if let Some(max) = self.capacity {
                if text.len() > max {
                    return Err(CarrierError::CapacityExceeded {
                        len: text.len(),
                        max,
                    });
                }
            }
            let artifact = CarrierArtifact::new(text.as_bytes().to_vec());
            self.emitted.write().await.push(artifact.clone());
            Ok(artifact)
        }

        async fn recover(&self, artifact: &CarrierArtifact) -> Result<String> {
            if artifact.is_empty() {
                return Err(CarrierError::NoPayloadFound);
            }
            String::from_utf8(artifact.as_bytes().to_vec())
                .map_err(|_| CarrierError::Io("artifact is not utf-8".into()))
        }

        fn capacity(&self) -> Option<usize> {
            self.capacity
        }
    }
}
