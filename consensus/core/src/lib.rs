//! Domain types shared by the kasparov crates: subnetwork ids, network
//! types and the per-network consensus parameters.

pub mod config;
pub mod network;
pub mod subnets;
pub mod tx;

pub use kasparov_hashes::Hash;

/// Blue score of a block, its position along the selected chain
pub type BlueScore = u64;
