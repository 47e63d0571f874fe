//! Proptest generators for property-based testing.

use proptest::prelude::*;

use ens_reverse_core::{Address, ChainId, NETWORKS};

/// Generate any address, the zero address included.
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::new)
}

/// Generate a non-zero address.
pub fn nonzero_address() -> impl Strategy<Value = Address> {
    address().prop_filter("non-zero address", |a| !a.is_zero())
}

/// Generate a supported chain id.
pub fn chain_id() -> impl Strategy<Value = ChainId> {
    prop::sample::select(NETWORKS.iter().map(|n| n.chain_id).collect::<Vec<_>>())
}

/// Generate a chain id with no entry in the network table.
pub fn unsupported_chain_id() -> impl Strategy<Value = ChainId> {
    any::<u64>()
        .prop_map(ChainId)
        .prop_filter("unsupported chain", |id| {
            NETWORKS.iter().all(|n| n.chain_id != *id)
        })
}

/// Generate a non-empty `.eth` name.
pub fn ens_name() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,15}\\.eth".prop_map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ens_reverse_core::{namehash, network};

    proptest! {
        #[test]
        fn test_nonzero_address_is_nonzero(a in nonzero_address()) {
            prop_assert!(!a.is_zero());
        }

        #[test]
        fn test_chain_id_is_supported(id in chain_id()) {
            prop_assert!(network(id).is_ok());
        }

        #[test]
        fn test_unsupported_chain_id_is_rejected(id in unsupported_chain_id()) {
            prop_assert!(network(id).is_err());
        }

        #[test]
        fn test_ens_name_hashes(name in ens_name()) {
            prop_assert!(namehash(&name).is_ok());
        }
    }
}
