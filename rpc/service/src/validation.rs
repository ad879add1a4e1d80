use kasparov_addresses::Address;
use kasparov_consensus_core::config::params::Params;
use kasparov_rpc_core::{RpcError, RpcResult};

/// Decodes `address` and checks it belongs to the network described by `params`.
pub fn validate_address(address: &str, params: &Params) -> RpcResult<Address> {
    Address::try_from_with_prefix(address, params.prefix).map_err(|err| RpcError::InvalidAddress(address.to_string(), err))
}
