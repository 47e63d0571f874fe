//! # ENS Reverse Chain
//!
//! The boundary between the resolution protocol and a blockchain node.
//!
//! ## Overview
//!
//! Everything that touches contract state goes through the [`ChainBackend`]
//! trait: one synchronous, read-only `call` taking a contract address and
//! ABI calldata. Backends report "no contract code at this address" as the
//! typed [`CallError::NoCode`], which resolver validation relies on.
//!
//! ## Key Types
//!
//! - [`ChainBackend`] - The read-only call capability
//! - [`CallError`] - Typed failures of a contract call
//! - [`BoundContract`] - A contract address bound to a backend
//! - [`MemoryChain`] - In-memory backend for tests
//! - [`abi`] - `sol!` interfaces of the registry, resolver and registrar
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use alloy_sol_types::SolCall;
//! use bytes::Bytes;
//! use ens_reverse_chain::abi::IReverseRegistrar;
//! use ens_reverse_chain::{BoundContract, CallError, Contract, MemoryChain};
//! use ens_reverse_core::Address;
//!
//! struct Fixed(Address);
//!
//! impl Contract for Fixed {
//!     fn call(&self, _data: &[u8]) -> Result<Bytes, CallError> {
//!         Ok(IReverseRegistrar::defaultResolverCall::abi_encode_returns(&self.0).into())
//!     }
//! }
//!
//! let chain = MemoryChain::new();
//! let at = Address::new([0x01; 20]);
//! let answer = Address::new([0x02; 20]);
//! chain.deploy(at, Arc::new(Fixed(answer)));
//!
//! let contract = BoundContract::new(at, &chain);
//! let got = contract.call(&IReverseRegistrar::defaultResolverCall {}).unwrap();
//! assert_eq!(got, answer);
//! ```

pub mod abi;
pub mod backend;
pub mod contract;
pub mod error;
pub mod memory;

pub use backend::ChainBackend;
pub use contract::BoundContract;
pub use error::{CallError, Result};
pub use memory::{Contract, MemoryChain};
