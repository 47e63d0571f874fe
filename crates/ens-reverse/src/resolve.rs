//! Composed entry points: resolve an address to a name, or format it for display.

use ens_reverse_chain::ChainBackend;
use ens_reverse_core::{Address, ChainId};

use crate::error::{ResolveError, Result};
use crate::resolver::ReverseResolver;

/// Resolve `address` to its primary name.
///
/// The resolver is discovered through the registry record of the address.
/// An empty name is not a result: it fails with [`ResolveError::NoResolution`].
pub fn reverse_resolve<B: ChainBackend + ?Sized>(
    backend: &B,
    address: Address,
    chain_id: ChainId,
) -> Result<String> {
    let resolver = ReverseResolver::for_address(backend, address, chain_id)?;
    let name = resolver.name(address)?;
    if name.is_empty() {
        return Err(ResolveError::NoResolution(address));
    }
    Ok(name)
}

/// Render `address` for display: its name when it resolves, otherwise the
/// checksummed hex form. Never fails.
pub fn format<B: ChainBackend + ?Sized>(backend: &B, address: Address, chain_id: ChainId) -> String {
    match reverse_resolve(backend, address, chain_id) {
        Ok(name) => name,
        Err(e) => {
            tracing::debug!(%address, %chain_id, error = %e, "reverse resolution failed, showing address");
            address.to_checksum(None)
        }
    }
}
