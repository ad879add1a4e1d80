//! Data conversion utilities and structs for the RPC layer.

pub mod utxo;
