use kasparov_consensus_core::subnets::SubnetworkIdError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum UtxoStatusError {
    /// The stored subnetwork id of the row at position `index` could not be decoded.
    /// Such a row points at corrupted or unexpected stored data rather than at bad client input.
    #[error("couldn't decode subnetwork id {raw:?} of utxo row #{index}: {source}")]
    SubnetworkIdDecode { index: usize, raw: String, source: SubnetworkIdError },
}

pub type UtxoStatusResult<T> = std::result::Result<T, UtxoStatusError>;
