//! # ENS Reverse Core
//!
//! Pure primitives for ENS reverse resolution: addresses, chain identifiers,
//! the namehash primitive, and the table of supported networks.
//!
//! This crate contains no I/O and never talks to a chain. It is pure
//! computation over names and digests.
//!
//! ## Key Types
//!
//! - [`Address`] - A 20-byte account address (`alloy-primitives`)
//! - [`ChainId`] - Identifier selecting a deployed network
//! - [`NameDigest`] - The namehash of a label, used as the on-chain lookup key
//! - [`Network`] - Registry address and reverse suffix for one chain
//!
//! ## Reverse labels
//!
//! The reverse label of an address is its lower-case hex (no `0x`) followed
//! by the chain's reverse suffix:
//!
//! ```rust
//! use ens_reverse_core::{network, reverse_label, Address, ChainId};
//!
//! let address: Address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
//! let mainnet = network(ChainId::MAINNET).unwrap();
//! assert_eq!(
//!     reverse_label(&address, mainnet),
//!     "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed.addr.reverse"
//! );
//! ```

pub mod error;
pub mod namehash;
pub mod network;
pub mod types;

pub use alloy_primitives::{keccak256, B256};
pub use error::{CoreError, Result};
pub use namehash::{labelhash, namehash, MAX_LABEL_LEN};
pub use network::{network, validation_label, reverse_label, Network, ENS_REGISTRY, NETWORKS};
pub use types::{Address, ChainId, NameDigest};
