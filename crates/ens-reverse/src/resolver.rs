//! The reverse resolver: a validated handle on a contract answering
//! `name(bytes32)`.
//!
//! Three constructors exist. [`ReverseResolver::for_address`] asks the registry
//! for the resolver of one address's reverse record, [`ReverseResolver::new`]
//! takes the reverse registrar's default resolver, and [`ReverseResolver::at`]
//! uses a caller-supplied address. All of them end in [`ReverseResolver::at`],
//! which checks that the contract answers before accepting it.

use std::fmt;

use ens_reverse_chain::abi::INameResolver;
use ens_reverse_chain::{BoundContract, CallError, ChainBackend};
use ens_reverse_core::{
    namehash, network, reverse_label, validation_label, Address, ChainId, Network,
};

use crate::error::{ResolveError, Result};
use crate::registrar::ReverseRegistrar;
use crate::registry::Registry;

/// A resolver contract known to answer `name(bytes32)`.
///
/// Immutable once constructed. The backend is borrowed, not owned.
pub struct ReverseResolver<'a, B: ChainBackend + ?Sized> {
    contract: BoundContract<'a, B>,
    network: &'static Network,
}

impl<'a, B: ChainBackend + ?Sized> ReverseResolver<'a, B> {
    /// Resolver registered for the reverse record of `address`.
    ///
    /// When the registry has no resolver for the record it returns the zero
    /// address, which fails validation with [`ResolveError::NotAResolver`].
    pub fn for_address(backend: &'a B, address: Address, chain_id: ChainId) -> Result<Self> {
        let registry = Registry::new(backend, chain_id)?;
        let label = reverse_label(&address, registry.network());
        let resolver = registry.resolver_address(&label)?;

        tracing::debug!(%label, %resolver, "registry resolver for reverse record");
        Self::at(backend, resolver, chain_id)
    }

    /// The chain-wide default resolver of the reverse registrar.
    pub fn new(backend: &'a B, chain_id: ChainId) -> Result<Self> {
        let registrar = ReverseRegistrar::new(backend, chain_id)?;
        let resolver = registrar.default_resolver_address()?;

        tracing::debug!(%chain_id, %resolver, "default reverse resolver");
        Self::at(backend, resolver, chain_id)
    }

    /// The resolver at `address`, after checking that it answers `name(bytes32)`.
    ///
    /// Missing contract code is reported as [`ResolveError::NotAResolver`].
    /// Every other call failure is returned as [`ResolveError::ChainQuery`].
    /// Any successful answer, the empty name included, accepts the contract.
    pub fn at(backend: &'a B, address: Address, chain_id: ChainId) -> Result<Self> {
        let network = network(chain_id)?;
        let contract = BoundContract::new(address, backend);

        let node = namehash(&validation_label(network))?;
        match contract.call(&INameResolver::nameCall { node: node.0 }) {
            Ok(_) => {}
            Err(CallError::NoCode(_)) => {
                tracing::debug!(%address, "no contract code, not a resolver");
                return Err(ResolveError::NotAResolver(address));
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self { contract, network })
    }

    /// Address of the resolver contract.
    pub fn contract_address(&self) -> Address {
        self.contract.address()
    }

    /// The chain this resolver was constructed for.
    pub fn chain_id(&self) -> ChainId {
        self.network.chain_id
    }

    /// The name stored for the reverse record of `address`.
    ///
    /// The label is always built from `address`, whichever way this resolver
    /// was found. The stored string is returned verbatim, even when empty.
    pub fn name(&self, address: Address) -> Result<String> {
        let node = namehash(&reverse_label(&address, self.network))?;
        Ok(self.contract.call(&INameResolver::nameCall { node: node.0 })?)
    }
}

impl<B: ChainBackend + ?Sized> fmt::Debug for ReverseResolver<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseResolver")
            .field("contract_address", &self.contract.address())
            .field("chain_id", &self.network.chain_id)
            .finish()
    }
}
