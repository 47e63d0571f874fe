//! Error types for contract calls.

use ens_reverse_core::Address;
use thiserror::Error;

/// Errors a chain backend can report for a contract call.
///
/// Backends must report an address without deployed code as [`CallError::NoCode`]
/// rather than as a generic failure; resolver validation depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// No contract code is deployed at the target address.
    #[error("no contract code at {0}")]
    NoCode(Address),

    /// The contract executed and reverted.
    #[error("execution reverted: {0}")]
    Reverted(String),

    /// The call never reached the chain or the response was lost.
    #[error("transport error: {0}")]
    Transport(String),

    /// The return data does not decode as the expected ABI type.
    #[error("decoding error: {0}")]
    Decode(String),
}

impl CallError {
    /// Whether this is the "no contract code" condition.
    pub fn is_no_code(&self) -> bool {
        matches!(self, CallError::NoCode(_))
    }
}

/// Result type for contract calls.
pub type Result<T> = std::result::Result<T, CallError>;
