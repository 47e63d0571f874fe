//! The registry: maps name digests to owners and resolvers.

use ens_reverse_chain::abi::IRegistry;
use ens_reverse_chain::{BoundContract, ChainBackend};
use ens_reverse_core::{namehash, network, Address, ChainId, NameDigest, Network};

use crate::error::Result;

/// The registry contract of one network.
pub struct Registry<'a, B: ChainBackend + ?Sized> {
    contract: BoundContract<'a, B>,
    network: &'static Network,
}

impl<'a, B: ChainBackend + ?Sized> Registry<'a, B> {
    /// Bind to the registry of `chain_id`. No call is made.
    pub fn new(backend: &'a B, chain_id: ChainId) -> Result<Self> {
        let network = network(chain_id)?;
        Ok(Self {
            contract: BoundContract::new(network.registry, backend),
            network,
        })
    }

    /// Address of the registry contract.
    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// The network this registry belongs to.
    pub fn network(&self) -> &'static Network {
        self.network
    }

    /// Resolver registered for `name`. The zero address means none.
    pub fn resolver_address(&self, name: &str) -> Result<Address> {
        self.resolver_of(&namehash(name)?)
    }

    /// Resolver registered for a node.
    pub fn resolver_of(&self, node: &NameDigest) -> Result<Address> {
        Ok(self.contract.call(&IRegistry::resolverCall { node: node.0 })?)
    }

    /// Owner of `name`. The zero address means unowned.
    pub fn owner(&self, name: &str) -> Result<Address> {
        self.owner_of(&namehash(name)?)
    }

    /// Owner of a node.
    pub fn owner_of(&self, node: &NameDigest) -> Result<Address> {
        Ok(self.contract.call(&IRegistry::ownerCall { node: node.0 })?)
    }
}
