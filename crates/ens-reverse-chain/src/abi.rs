//! Solidity interfaces of the ENS contracts used here.
//!
//! Calldata and return values are encoded by `alloy-sol-types`. Each
//! interface module also carries a `*Calls` enum, which the in-memory
//! contracts use to dispatch incoming calldata.

alloy_sol_types::sol! {
    /// The ENS registry.
    interface IRegistry {
        function owner(bytes32 node) external view returns (address);
        function resolver(bytes32 node) external view returns (address);
    }

    /// A resolver holding reverse records.
    interface INameResolver {
        function name(bytes32 node) external view returns (string);
    }

    /// The registrar owning the reverse suffix.
    interface IReverseRegistrar {
        function defaultResolver() external view returns (address);
    }
}
