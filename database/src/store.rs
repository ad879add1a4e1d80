use crate::errors::StoreResult;
use async_trait::async_trait;
use kasparov_addresses::Address;
use kasparov_consensus_core::BlueScore;
use kasparov_utxostatus::UtxoRow;

/// Query interface over the materialized ledger.
#[async_trait]
pub trait UtxoStore: Send + Sync {
    /// Returns the unspent outputs locked to `address`, each outpoint at most once,
    /// in a stable order.
    async fn utxos_by_address(&self, address: &Address) -> StoreResult<Vec<UtxoRow>>;

    /// Returns the blue score of the current selected tip, or 0 if no tip was recorded yet.
    async fn selected_tip_blue_score(&self) -> StoreResult<BlueScore>;
}
