//! Network table: where the registry lives on each supported chain.
//!
//! Unknown chain identifiers are an error. There is no default network.

use alloy_primitives::address;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::types::{Address, ChainId};

/// The ENS registry, deployed at the same address on every supported chain.
pub const ENS_REGISTRY: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

/// Deployment details of the naming service on one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Network {
    /// Chain this entry applies to.
    pub chain_id: ChainId,
    /// Human-readable network name.
    pub name: &'static str,
    /// Address of the registry contract.
    pub registry: Address,
    /// Domain under which reverse records are registered.
    pub reverse_suffix: &'static str,
}

/// Every supported network.
pub const NETWORKS: &[Network] = &[
    Network {
        chain_id: ChainId::MAINNET,
        name: "mainnet",
        registry: ENS_REGISTRY,
        reverse_suffix: "addr.reverse",
    },
    Network {
        chain_id: ChainId::GOERLI,
        name: "goerli",
        registry: ENS_REGISTRY,
        reverse_suffix: "addr.reverse",
    },
    Network {
        chain_id: ChainId::HOLESKY,
        name: "holesky",
        registry: ENS_REGISTRY,
        reverse_suffix: "addr.reverse",
    },
    Network {
        chain_id: ChainId::SEPOLIA,
        name: "sepolia",
        registry: ENS_REGISTRY,
        reverse_suffix: "addr.reverse",
    },
];

/// Look up the deployment for a chain.
pub fn network(chain_id: ChainId) -> Result<&'static Network> {
    NETWORKS
        .iter()
        .find(|n| n.chain_id == chain_id)
        .ok_or(CoreError::UnsupportedChain(chain_id))
}

/// The reverse label of an address: lower-case hex, a dot, then the suffix.
pub fn reverse_label(address: &Address, network: &Network) -> String {
    format!("{}.{}", hex::encode(address.as_slice()), network.reverse_suffix)
}

/// The label queried when checking that a contract answers `name(bytes32)`.
pub fn validation_label(network: &Network) -> String {
    format!("0.{}", network.reverse_suffix)
}
