//! In-memory chain backend.
//!
//! This is primarily for testing. Contracts are Rust objects keyed by address;
//! calling an address with nothing deployed fails with [`CallError::NoCode`],
//! as a node does for an account without code.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use bytes::Bytes;
use ens_reverse_core::Address;

use crate::backend::ChainBackend;
use crate::error::{CallError, Result};

/// Contract code executed by [`MemoryChain`].
pub trait Contract: Send + Sync {
    /// Handle raw calldata and return raw ABI-encoded output.
    fn call(&self, data: &[u8]) -> Result<Bytes>;
}

/// A chain whose state is a table of in-process contracts.
///
/// Thread-safe via RwLock.
#[derive(Default)]
pub struct MemoryChain {
    contracts: RwLock<HashMap<Address, Arc<dyn Contract>>>,
    calls: AtomicUsize,
}

impl MemoryChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy `contract` at `address`, replacing whatever was there.
    pub fn deploy(&self, address: Address, contract: Arc<dyn Contract>) {
        self.contracts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(address, contract);
    }

    /// Remove the code at `address`. Returns whether anything was deployed.
    pub fn destroy(&self, address: &Address) -> bool {
        self.contracts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(address)
            .is_some()
    }

    /// Whether code is deployed at `address`.
    pub fn has_code(&self, address: &Address) -> bool {
        self.contracts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(address)
    }

    /// Number of calls executed so far, including failed ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl ChainBackend for MemoryChain {
    fn call(&self, to: &Address, data: &[u8]) -> Result<Bytes> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        // Lock is released before the contract runs.
        let contract = self
            .contracts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(to)
            .cloned();

        match contract {
            Some(contract) => contract.call(data),
            None => {
                tracing::trace!(%to, "call to address without code");
                Err(CallError::NoCode(*to))
            }
        }
    }
}
