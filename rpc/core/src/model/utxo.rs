use crate::RpcHash;
use kasparov_consensus_core::{BlueScore, tx::TransactionIndexType};
use serde::{Deserialize, Serialize};

/// Represents an unspent output of an address, as returned by the `GetUTXOsByAddress` handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionOutputResponse {
    pub transaction_id: RpcHash,
    pub value: u64,
    /// Hex encoded locking script
    pub script_pub_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepting_block_hash: Option<RpcHash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepting_block_blue_score: Option<BlueScore>,
    pub index: TransactionIndexType,
    pub is_coinbase: bool,
    pub is_spendable: bool,
    pub confirmations: u64,
}
