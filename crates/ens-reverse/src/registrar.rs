//! The reverse registrar: owner of the reverse suffix and source of the
//! chain-wide default resolver.

use ens_reverse_chain::abi::IReverseRegistrar;
use ens_reverse_chain::{BoundContract, ChainBackend};
use ens_reverse_core::{Address, ChainId};

use crate::error::{ResolveError, Result};
use crate::registry::Registry;

/// The reverse registrar of one network.
pub struct ReverseRegistrar<'a, B: ChainBackend + ?Sized> {
    contract: BoundContract<'a, B>,
    chain_id: ChainId,
}

impl<'a, B: ChainBackend + ?Sized> ReverseRegistrar<'a, B> {
    /// Locate the registrar as the registry owner of the reverse suffix.
    pub fn new(backend: &'a B, chain_id: ChainId) -> Result<Self> {
        let registry = Registry::new(backend, chain_id)?;
        let suffix = registry.network().reverse_suffix;
        let address = registry.owner(suffix)?;
        if address.is_zero() {
            return Err(ResolveError::NoReverseRegistrar(chain_id));
        }

        tracing::debug!(%chain_id, registrar = %address, "located reverse registrar");
        Ok(Self::at(backend, address, chain_id))
    }

    /// Bind to a registrar at a known address. No call is made.
    pub fn at(backend: &'a B, address: Address, chain_id: ChainId) -> Self {
        Self {
            contract: BoundContract::new(address, backend),
            chain_id,
        }
    }

    /// Address of the registrar contract.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// The chain this registrar was located on.
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// The resolver new reverse records are pointed at by default.
    pub fn default_resolver_address(&self) -> Result<Address> {
        Ok(self.contract.call(&IReverseRegistrar::defaultResolverCall {})?)
    }
}
