//! # ENS Reverse Testkit
//!
//! Testing utilities for ENS reverse resolution.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Contracts**: In-process stand-ins for the registry, public resolver and
//!   reverse registrar, deployable on a [`MemoryChain`](ens_reverse_chain::MemoryChain)
//! - **Fixtures**: A fully wired ENS deployment for a supported chain
//! - **Generators**: Proptest strategies for addresses, names and chain ids
//! - **Golden vectors**: Known namehash outputs for cross-implementation checks
//!
//! ## Test Fixtures
//!
//! ```rust
//! use ens_reverse_testkit::fixtures::EnsFixture;
//! use ens_reverse_core::Address;
//!
//! let fixture = EnsFixture::mainnet();
//! let alice = Address::new([0xa1; 20]);
//! fixture.set_reverse_name(alice, "alice.eth");
//! assert_eq!(fixture.resolver.name_of(&fixture.reverse_node(alice)), "alice.eth");
//! ```
//!
//! ## Golden Vectors
//!
//! ```rust
//! use ens_reverse_testkit::vectors::verify_all_vectors;
//!
//! verify_all_vectors().unwrap();
//! ```

pub mod contracts;
pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use contracts::{
    FailingChain, PublicResolverContract, RawContract, RegistryContract,
    ReverseRegistrarContract, RevertingContract,
};
pub use fixtures::{random_address, EnsFixture, DEFAULT_RESOLVER_ADDRESS, REVERSE_REGISTRAR_ADDRESS};
pub use generators::{address, chain_id, ens_name, nonzero_address, unsupported_chain_id};
pub use vectors::{all_vectors, verify_all_vectors, NamehashVector};
