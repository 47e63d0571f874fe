//! Contract handles bound to an address and a backend.

use alloy_sol_types::SolCall;
use ens_reverse_core::Address;

use crate::backend::ChainBackend;
use crate::error::{CallError, Result};

/// A contract at a fixed address, reached through a borrowed backend.
///
/// Binding is purely local; no call is made until a method is invoked.
pub struct BoundContract<'a, B: ChainBackend + ?Sized> {
    address: Address,
    backend: &'a B,
}

impl<'a, B: ChainBackend + ?Sized> BoundContract<'a, B> {
    /// Bind to the contract at `address`.
    pub fn new(address: Address, backend: &'a B) -> Self {
        Self { address, backend }
    }

    /// The bound address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Encode `call`, run it against the bound address and decode its return
    /// value.
    ///
    /// Return data that does not decode is [`CallError::Decode`].
    pub fn call<C: SolCall>(&self, call: &C) -> Result<C::Return> {
        let data = call.abi_encode();
        let ret = self.backend.call(&self.address, &data)?;
        C::abi_decode_returns(&ret).map_err(|e| {
            CallError::Decode(format!("{} returned {} bytes: {e}", C::SIGNATURE, ret.len()))
        })
    }
}

impl<B: ChainBackend + ?Sized> Clone for BoundContract<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ChainBackend + ?Sized> Copy for BoundContract<'_, B> {}

impl<B: ChainBackend + ?Sized> std::fmt::Debug for BoundContract<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundContract")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
