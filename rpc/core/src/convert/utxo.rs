use crate::{HexConversion, RpcTransactionOutputResponse};
use kasparov_utxostatus::UtxoJudgment;

// ----------------------------------------------------------------------------
// utxostatus to rpc_core
// ----------------------------------------------------------------------------

impl From<&UtxoJudgment> for RpcTransactionOutputResponse {
    fn from(item: &UtxoJudgment) -> Self {
        Self {
            transaction_id: item.transaction_id,
            value: item.value,
            script_pub_key: item.script_public_key.to_hex_string(),
            accepting_block_hash: item.acceptance.block_hash(),
            accepting_block_blue_score: item.acceptance.blue_score(),
            index: item.index,
            is_coinbase: item.is_coinbase,
            is_spendable: item.is_spendable,
            confirmations: item.confirmations,
        }
    }
}

pub fn judgments_into_rpc(judgments: &[UtxoJudgment]) -> Vec<RpcTransactionOutputResponse> {
    judgments.iter().map(RpcTransactionOutputResponse::from).collect()
}
