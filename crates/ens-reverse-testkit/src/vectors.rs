//! Golden test vectors for namehash.
//!
//! Any implementation of the naming system must produce these digests.

use serde::{Deserialize, Serialize};

use ens_reverse_core::namehash;

/// A golden namehash vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamehashVector {
    /// Name fed to namehash.
    pub name: String,
    /// Expected digest (hex, no prefix).
    pub digest: String,
}

impl NamehashVector {
    fn new(name: &str, digest: &str) -> Self {
        Self {
            name: name.to_string(),
            digest: digest.to_string(),
        }
    }

    /// Check the vector against [`namehash`].
    pub fn verify(&self) -> Result<(), String> {
        let actual = namehash(&self.name)
            .map_err(|e| format!("{}: {e}", self.name))?
            .to_hex();
        if actual == self.digest {
            Ok(())
        } else {
            Err(format!(
                "{:?}: expected {}, got {actual}",
                self.name, self.digest
            ))
        }
    }
}

/// Get all golden namehash vectors.
pub fn all_vectors() -> Vec<NamehashVector> {
    vec![
        NamehashVector::new(
            "",
            "0000000000000000000000000000000000000000000000000000000000000000",
        ),
        NamehashVector::new(
            "eth",
            "93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae",
        ),
        NamehashVector::new(
            "foo.eth",
            "de9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f",
        ),
        NamehashVector::new(
            "alice.eth",
            "787192fc5378cc32aa956ddfdedbf26b24e8d78e40109add0eea2c1a012c3dec",
        ),
        NamehashVector::new(
            "reverse",
            "a097f6721ce401e757d1223a763fef49b8b5f90bb18567ddb86fd205dff71d34",
        ),
        NamehashVector::new(
            "addr.reverse",
            "91d1777781884d03a6757a803996e38de2a42967fb37eeaca72729271025a9e2",
        ),
        NamehashVector::new(
            "0.addr.reverse",
            "68d3cf674cfc1dbcea90ac43bb06b3fecc47b8fc849438205d8c638ad936604c",
        ),
        NamehashVector::new(
            "d8da6bf26964af9d7eed9e03e53415d37aa96045.addr.reverse",
            "7aef81fbd30c83431369026d62ee533af8b69f246b63d75b40fe223346e6fa9a",
        ),
    ]
}

/// Verify every golden vector, reporting the first mismatch.
pub fn verify_all_vectors() -> Result<(), String> {
    all_vectors().iter().try_for_each(NamehashVector::verify)
}
