//! Error types for the core primitives.

use thiserror::Error;

use crate::types::ChainId;

/// Errors raised by the pure primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The chain identifier is not in the network table.
    #[error("unsupported chain: {0}")]
    UnsupportedChain(ChainId),

    /// The name was rejected by namehash.
    #[error("invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
