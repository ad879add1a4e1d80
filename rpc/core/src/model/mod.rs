//! This module contains RPC-specific data structures
//! used in API responses.

pub mod address;
pub mod hex_cnv;
pub mod utxo;

pub use address::*;
pub use hex_cnv::*;
pub use utxo::*;
