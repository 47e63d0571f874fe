//! # ENS Reverse
//!
//! Reverse resolution for the Ethereum Name Service: find the name an
//! account address has claimed for itself.
//!
//! ## Overview
//!
//! Reverse records live under a per-chain suffix (`addr.reverse`). The record
//! of an address is the label `<lower-hex address>.addr.reverse`; the registry
//! maps its namehash to a resolver, and that resolver's `name(bytes32)` holds
//! the primary name.
//!
//! Before a resolver is used it is checked with a `name(bytes32)` call. An address with
//! no contract code fails with [`ResolveError::NotAResolver`]; that is also
//! what an address without a reverse record yields, since the registry answers
//! the zero address.
//!
//! ## Key Types
//!
//! - [`ReverseResolver`] - A validated resolver handle
//! - [`Registry`] - The registry contract of a network
//! - [`ReverseRegistrar`] - Owner of the reverse suffix, holder of the default resolver
//! - [`ResolveError`] - Everything that can go wrong
//!
//! ## Usage
//!
//! ```rust
//! use ens_reverse::{format, reverse_resolve, ResolveError};
//! use ens_reverse::core::{Address, ChainId};
//! use ens_reverse_testkit::EnsFixture;
//!
//! let ens = EnsFixture::mainnet();
//! let alice = Address::new([0xa1; 20]);
//! let bob = Address::new([0xb0; 20]);
//! ens.set_reverse_name(alice, "alice.eth");
//!
//! assert_eq!(reverse_resolve(&ens.chain, alice, ChainId::MAINNET).unwrap(), "alice.eth");
//! assert!(matches!(
//!     reverse_resolve(&ens.chain, bob, ChainId::MAINNET),
//!     Err(ResolveError::NotAResolver(_))
//! ));
//! assert_eq!(format(&ens.chain, bob, ChainId::MAINNET), bob.to_checksum(None));
//! ```
//!
//! ## Re-exports
//!
//! - `ens_reverse::core` - Addresses, namehash, network table
//! - `ens_reverse::chain` - Backend trait, ABI, in-memory chain

pub mod error;
pub mod registrar;
pub mod registry;
pub mod resolve;
pub mod resolver;

// Re-export component crates
pub use ens_reverse_chain as chain;
pub use ens_reverse_core as core;

pub use error::{ResolveError, Result};
pub use registrar::ReverseRegistrar;
pub use registry::Registry;
pub use resolve::{format, reverse_resolve};
pub use resolver::ReverseResolver;

// Re-export commonly used types
pub use ens_reverse_chain::{CallError, ChainBackend, MemoryChain};
pub use ens_reverse_core::{namehash, Address, ChainId, NameDigest};
