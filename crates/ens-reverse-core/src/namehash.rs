//! The ENS namehash primitive (EIP-137).
//!
//! `namehash("")` is the all-zero digest. Otherwise labels are folded from
//! right to left as `node = keccak256(node || keccak256(label))`.
//!
//! Names are lower-cased before hashing. Full UTS-46 normalisation is not
//! performed; callers passing non-ASCII names get the lower-cased form hashed.

use alloy_primitives::{keccak256, B256};

use crate::error::{CoreError, Result};
use crate::types::NameDigest;

/// Longest label accepted, in bytes.
pub const MAX_LABEL_LEN: usize = 255;

/// Hash a single label.
pub fn labelhash(label: &str) -> B256 {
    keccak256(label.as_bytes())
}

/// Compute the namehash of a dotted name.
///
/// Fails with [`CoreError::InvalidName`] on an empty label (a leading,
/// trailing or doubled dot) or on a label longer than [`MAX_LABEL_LEN`].
pub fn namehash(name: &str) -> Result<NameDigest> {
    if name.is_empty() {
        return Ok(NameDigest::ROOT);
    }

    let normalized = name.to_lowercase();
    let mut node = B256::ZERO;
    for label in normalized.rsplit('.') {
        if label.is_empty() {
            return Err(invalid(name, "empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(invalid(
                name,
                format!("label of {} bytes exceeds {MAX_LABEL_LEN}", label.len()),
            ));
        }

        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(labelhash(label).as_slice());
        node = keccak256(buf);
    }

    Ok(NameDigest(node))
}

fn invalid(name: &str, reason: impl Into<String>) -> CoreError {
    CoreError::InvalidName {
        name: name.to_string(),
        reason: reason.into(),
    }
}
