//! Test fixtures and helpers.
//!
//! [`EnsFixture`] deploys a registry, reverse registrar and public resolver on
//! a fresh [`MemoryChain`], wired the way the live deployment is: the
//! registrar owns the reverse suffix and points at the public resolver as its
//! default.

use std::sync::Arc;

use ens_reverse_chain::MemoryChain;
use ens_reverse_core::{
    namehash, network, reverse_label, Address, ChainId, CoreError, NameDigest, Network,
};

use crate::contracts::{PublicResolverContract, RegistryContract, ReverseRegistrarContract};

/// Where fixtures deploy the reverse registrar.
pub const REVERSE_REGISTRAR_ADDRESS: Address = Address::new([0x7e; 20]);

/// Where fixtures deploy the public resolver.
pub const DEFAULT_RESOLVER_ADDRESS: Address = Address::new([0x5e; 20]);

/// A complete ENS deployment on an in-memory chain.
pub struct EnsFixture {
    pub chain: MemoryChain,
    pub network: &'static Network,
    pub registry: Arc<RegistryContract>,
    pub registrar: Arc<ReverseRegistrarContract>,
    pub resolver: Arc<PublicResolverContract>,
}

impl EnsFixture {
    /// Deploy ENS for a supported chain.
    pub fn new(chain_id: ChainId) -> Result<Self, CoreError> {
        let network = network(chain_id)?;
        let chain = MemoryChain::new();

        let registry = Arc::new(RegistryContract::new());
        let resolver = Arc::new(PublicResolverContract::new());
        let registrar = Arc::new(ReverseRegistrarContract::new(DEFAULT_RESOLVER_ADDRESS));

        chain.deploy(network.registry, registry.clone());
        chain.deploy(DEFAULT_RESOLVER_ADDRESS, resolver.clone());
        chain.deploy(REVERSE_REGISTRAR_ADDRESS, registrar.clone());

        registry.set_owner(namehash(network.reverse_suffix)?, REVERSE_REGISTRAR_ADDRESS);

        Ok(Self {
            chain,
            network,
            registry,
            registrar,
            resolver,
        })
    }

    /// Deploy ENS for mainnet.
    pub fn mainnet() -> Self {
        Self::new(ChainId::MAINNET).expect("mainnet is a supported network")
    }

    /// The chain this fixture was deployed for.
    pub fn chain_id(&self) -> ChainId {
        self.network.chain_id
    }

    /// The reverse label of an address on this fixture's network.
    pub fn reverse_label(&self, address: Address) -> String {
        reverse_label(&address, self.network)
    }

    /// The reverse node of an address on this fixture's network.
    pub fn reverse_node(&self, address: Address) -> NameDigest {
        namehash(&self.reverse_label(address)).expect("reverse labels are valid names")
    }

    /// Register `name` as the reverse record of `address` on the public resolver.
    pub fn set_reverse_name(&self, address: Address, name: &str) {
        let node = self.reverse_node(address);
        self.registry.set_resolver(node, DEFAULT_RESOLVER_ADDRESS);
        self.resolver.set_name(node, name);
    }

    /// Point the reverse record of `address` at an arbitrary resolver.
    pub fn set_reverse_resolver(&self, address: Address, resolver: Address) {
        self.registry.set_resolver(self.reverse_node(address), resolver);
    }

    /// Deploy a second public resolver at `at`.
    pub fn deploy_resolver(&self, at: Address) -> Arc<PublicResolverContract> {
        let resolver = Arc::new(PublicResolverContract::new());
        self.chain.deploy(at, resolver.clone());
        resolver
    }
}

impl Default for EnsFixture {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// A random non-zero address.
pub fn random_address() -> Address {
    loop {
        let address = Address::new(rand::random());
        if !address.is_zero() {
            return address;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ens_reverse_chain::abi::IReverseRegistrar;
    use ens_reverse_chain::BoundContract;

    #[test]
    fn test_fixture_wiring() {
        let fixture = EnsFixture::mainnet();
        let suffix = namehash(fixture.network.reverse_suffix).unwrap();

        assert_eq!(fixture.registry.record(&suffix).owner, REVERSE_REGISTRAR_ADDRESS);
        assert!(fixture.chain.has_code(&fixture.network.registry));
        assert!(fixture.chain.has_code(&DEFAULT_RESOLVER_ADDRESS));

        let registrar = BoundContract::new(REVERSE_REGISTRAR_ADDRESS, &fixture.chain);
        assert_eq!(
            registrar.call(&IReverseRegistrar::defaultResolverCall {}).unwrap(),
            DEFAULT_RESOLVER_ADDRESS
        );
    }

    #[test]
    fn test_fixture_rejects_unsupported_chain() {
        assert!(matches!(
            EnsFixture::new(ChainId(31337)),
            Err(CoreError::UnsupportedChain(_))
        ));
    }

    #[test]
    fn test_set_reverse_name() {
        let fixture = EnsFixture::mainnet();
        let alice = random_address();
        fixture.set_reverse_name(alice, "alice.eth");

        let node = fixture.reverse_node(alice);
        assert_eq!(fixture.registry.record(&node).resolver, DEFAULT_RESOLVER_ADDRESS);
        assert_eq!(fixture.resolver.name_of(&node), "alice.eth");
    }

    #[test]
    fn test_random_addresses_differ() {
        assert_ne!(random_address(), random_address());
    }
}
