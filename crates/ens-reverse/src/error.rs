//! Error types for reverse resolution.

use ens_reverse_chain::CallError;
use ens_reverse_core::{Address, ChainId, CoreError};
use thiserror::Error;

/// Errors that can occur while discovering a resolver or reading a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The chain identifier is not in the network table.
    #[error("unsupported chain: {0}")]
    UnsupportedChain(ChainId),

    /// A constructed label was rejected by namehash.
    #[error("invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// A contract call failed for any reason other than missing code
    /// during resolver validation.
    #[error("chain query failed: {0}")]
    ChainQuery(#[from] CallError),

    /// The address has no contract code, so it cannot be a resolver.
    #[error("{0} is not a resolver")]
    NotAResolver(Address),

    /// The resolver answered with an empty name.
    #[error("no resolution for {0}")]
    NoResolution(Address),

    /// The registry has no owner for the reverse suffix on this chain.
    #[error("no reverse registrar on chain {0}")]
    NoReverseRegistrar(ChainId),
}

impl ResolveError {
    /// Whether the address has no usable reverse record, either because no
    /// resolver is deployed or because the resolver returned an empty name.
    pub fn is_unregistered(&self) -> bool {
        matches!(
            self,
            ResolveError::NotAResolver(_) | ResolveError::NoResolution(_)
        )
    }
}

impl From<CoreError> for ResolveError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnsupportedChain(id) => ResolveError::UnsupportedChain(id),
            CoreError::InvalidName { name, reason } => ResolveError::InvalidName { name, reason },
        }
    }
}

/// Result type for reverse resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
