//! Strong type definitions for ENS reverse resolution.
//!
//! Digests and chain identifiers are newtypes so they cannot be swapped for
//! one another at a call site. Addresses are the `alloy-primitives` type.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte account address.
///
/// `Display` is the EIP-55 checksummed form, and `FromStr` accepts hex with
/// or without a `0x` prefix.
pub use alloy_primitives::Address;

/// Identifier of a deployed network.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const MAINNET: Self = Self(1);
    pub const GOERLI: Self = Self(5);
    pub const HOLESKY: Self = Self(17000);
    pub const SEPOLIA: Self = Self(11_155_111);
}

impl fmt::Debug for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainId({})", self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A 32-byte namehash digest.
///
/// This is the key under which the registry and resolvers store records.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NameDigest(pub B256);

impl NameDigest {
    /// The digest of the empty (root) name.
    pub const ROOT: Self = Self(B256::ZERO);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(B256::new(bytes))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        Ok(Self(B256::from_slice(&bytes)))
    }
}

impl fmt::Debug for NameDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameDigest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for NameDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl AsRef<[u8]> for NameDigest {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<[u8; 32]> for NameDigest {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<B256> for NameDigest {
    fn from(digest: B256) -> Self {
        Self(digest)
    }
}
