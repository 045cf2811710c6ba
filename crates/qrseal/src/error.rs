//! Error types for the Sealer.

use qrseal_core::EmbedError;
use thiserror::Error;

use crate::carrier::CarrierError;

/// Errors that can occur during Sealer operations.
///
/// Verification outcomes are not errors; they come back as a
/// [`Verification`](qrseal_core::Verification) with a reject reason.
#[derive(Debug, Error)]
pub enum SealError {
    /// URL embedding error.
    #[error("embed error: {0}")]
    Embed(#[from] EmbedError),

    /// Carrier error.
    #[error("carrier error: {0}")]
    Carrier(#[from] CarrierError),
}

/// Result type for Sealer operations.
pub type Result<T> = std::result::Result<T, SealError>;
