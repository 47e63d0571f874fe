//! In-process ENS contracts for [`MemoryChain`](ens_reverse_chain::MemoryChain).
//!
//! Each contract decodes real calldata and returns real ABI output, so the
//! code under test exercises the same encoding paths it uses against a node.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use alloy_sol_types::{SolCall, SolInterface};
use bytes::Bytes;
use ens_reverse_chain::abi::{INameResolver, IRegistry, IReverseRegistrar};
use ens_reverse_chain::{CallError, ChainBackend, Contract};
use ens_reverse_core::{Address, NameDigest};

/// Calldata a contract cannot dispatch reverts, as it would on chain.
fn revert(e: alloy_sol_types::Error) -> CallError {
    CallError::Reverted(e.to_string())
}

/// A registry record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub owner: Address,
    pub resolver: Address,
}

/// The ENS registry: `owner(bytes32)` and `resolver(bytes32)`.
#[derive(Default)]
pub struct RegistryContract {
    records: RwLock<HashMap<NameDigest, Record>>,
}

impl RegistryContract {
    /// Create a registry with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the owner of a node.
    pub fn set_owner(&self, node: NameDigest, owner: Address) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(node)
            .or_default()
            .owner = owner;
    }

    /// Set the resolver of a node.
    pub fn set_resolver(&self, node: NameDigest, resolver: Address) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(node)
            .or_default()
            .resolver = resolver;
    }

    /// Get the record of a node; absent nodes read as all-zero.
    pub fn record(&self, node: &NameDigest) -> Record {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(node)
            .copied()
            .unwrap_or_default()
    }
}

impl Contract for RegistryContract {
    fn call(&self, data: &[u8]) -> Result<Bytes, CallError> {
        let output = match IRegistry::IRegistryCalls::abi_decode(data).map_err(revert)? {
            IRegistry::IRegistryCalls::owner(call) => {
                let record = self.record(&NameDigest(call.node));
                IRegistry::ownerCall::abi_encode_returns(&record.owner)
            }
            IRegistry::IRegistryCalls::resolver(call) => {
                let record = self.record(&NameDigest(call.node));
                IRegistry::resolverCall::abi_encode_returns(&record.resolver)
            }
        };
        Ok(output.into())
    }
}

/// A resolver answering `name(bytes32)`.
///
/// Every queried node is logged so tests can assert which label was used.
#[derive(Default)]
pub struct PublicResolverContract {
    names: RwLock<HashMap<NameDigest, String>>,
    queried: Mutex<Vec<NameDigest>>,
}

impl PublicResolverContract {
    /// Create a resolver with no names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name stored for a node.
    pub fn set_name(&self, node: NameDigest, name: impl Into<String>) {
        self.names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(node, name.into());
    }

    /// The name stored for a node, empty when unset.
    pub fn name_of(&self, node: &NameDigest) -> String {
        self.names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(node)
            .cloned()
            .unwrap_or_default()
    }

    /// Nodes passed to `name(bytes32)`, in call order.
    pub fn queried(&self) -> Vec<NameDigest> {
        self.queried
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Contract for PublicResolverContract {
    fn call(&self, data: &[u8]) -> Result<Bytes, CallError> {
        let call = INameResolver::nameCall::abi_decode(data).map_err(revert)?;
        let node = NameDigest(call.node);
        self.queried
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(node);
        Ok(INameResolver::nameCall::abi_encode_returns(&self.name_of(&node)).into())
    }
}

/// The reverse registrar: `defaultResolver()`.
pub struct ReverseRegistrarContract {
    default_resolver: RwLock<Address>,
}

impl ReverseRegistrarContract {
    /// Create a registrar pointing at `default_resolver`.
    pub fn new(default_resolver: Address) -> Self {
        Self {
            default_resolver: RwLock::new(default_resolver),
        }
    }

    /// Change the default resolver.
    pub fn set_default_resolver(&self, resolver: Address) {
        *self
            .default_resolver
            .write()
            .unwrap_or_else(PoisonError::into_inner) = resolver;
    }
}

impl Contract for ReverseRegistrarContract {
    fn call(&self, data: &[u8]) -> Result<Bytes, CallError> {
        IReverseRegistrar::defaultResolverCall::abi_decode(data).map_err(revert)?;
        let resolver = *self
            .default_resolver
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(IReverseRegistrar::defaultResolverCall::abi_encode_returns(&resolver).into())
    }
}

/// A contract that reverts every call.
pub struct RevertingContract(pub String);

impl Contract for RevertingContract {
    fn call(&self, _data: &[u8]) -> Result<Bytes, CallError> {
        Err(CallError::Reverted(self.0.clone()))
    }
}

/// A contract that returns the same raw bytes for every call.
pub struct RawContract(pub Bytes);

impl Contract for RawContract {
    fn call(&self, _data: &[u8]) -> Result<Bytes, CallError> {
        Ok(self.0.clone())
    }
}

/// A backend wrapper whose calls start failing with a transport error after
/// a number of successful calls.
pub struct FailingChain<B> {
    inner: B,
    remaining: AtomicUsize,
}

impl<B: ChainBackend> FailingChain<B> {
    /// Let `successes` calls through, then fail every call.
    pub fn after(inner: B, successes: usize) -> Self {
        Self {
            inner,
            remaining: AtomicUsize::new(successes),
        }
    }

    /// Fail every call.
    pub fn always(inner: B) -> Self {
        Self::after(inner, 0)
    }
}

impl<B: ChainBackend> ChainBackend for FailingChain<B> {
    fn call(&self, to: &Address, data: &[u8]) -> Result<Bytes, CallError> {
        let allowed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if allowed {
            self.inner.call(to, data)
        } else {
            Err(CallError::Transport("connection refused".into()))
        }
    }
}
