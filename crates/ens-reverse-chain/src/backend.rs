//! The chain backend capability.
//!
//! The backend executes read-only contract calls. It is supplied by the caller
//! and owns transport concerns: timeouts, retries and cancellation all live
//! behind this trait.

use std::sync::Arc;

use bytes::Bytes;
use ens_reverse_core::Address;

use crate::error::Result;

/// Synchronous, read-only access to contract state.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait ChainBackend: Send + Sync {
    /// Execute a call against the contract at `to` and return the raw
    /// ABI-encoded return data.
    ///
    /// Calling an address with no deployed code must fail with
    /// [`CallError::NoCode`](crate::CallError::NoCode).
    fn call(&self, to: &Address, data: &[u8]) -> Result<Bytes>;
}

impl<B: ChainBackend + ?Sized> ChainBackend for &B {
    fn call(&self, to: &Address, data: &[u8]) -> Result<Bytes> {
        (**self).call(to, data)
    }
}

impl<B: ChainBackend + ?Sized> ChainBackend for Box<B> {
    fn call(&self, to: &Address, data: &[u8]) -> Result<Bytes> {
        (**self).call(to, data)
    }
}

impl<B: ChainBackend + ?Sized> ChainBackend for Arc<B> {
    fn call(&self, to: &Address, data: &[u8]) -> Result<Bytes> {
        (**self).call(to, data)
    }
}
