//! Server side implementation of the UTXO queries of the Kasparov API

use crate::validation::validate_address;
use kasparov_consensus_core::config::params::Params;
use kasparov_core::{debug, error, trace, warn};
use kasparov_database::prelude::UtxoStore;
use kasparov_rpc_core::{RpcResult, RpcTransactionOutputResponse, convert::utxo::judgments_into_rpc};
use kasparov_utxostatus::{ChainTip, NetworkRule, UtxoRow, evaluate};
use std::sync::Arc;

/// Answers UTXO queries of a single network out of a [`UtxoStore`].
///
/// Each request reads the rows of the address and the selected tip once and
/// evaluates the whole batch against that tip.
pub struct UtxoService {
    store: Arc<dyn UtxoStore>,
    params: Params,
    rule: NetworkRule,
}

impl UtxoService {
    pub fn new(store: Arc<dyn UtxoStore>, params: Params) -> Self {
        let rule = NetworkRule::from(&params);
        Self { store, params, rule }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns all unspent outputs of `address`, each with its confirmations,
    /// coinbase flag and spendability.
    pub async fn get_utxos_by_address(&self, address: &str) -> RpcResult<Vec<RpcTransactionOutputResponse>> {
        let result = self.get_utxos_by_address_call(address).await;
        if let Err(err) = &result {
            if err.is_client_error() {
                debug!("GetUTXOsByAddress rejected: {}", err);
            } else {
                error!("GetUTXOsByAddress failed for address {}: {}", address, err);
            }
        }
        result
    }

    async fn get_utxos_by_address_call(&self, address: &str) -> RpcResult<Vec<RpcTransactionOutputResponse>> {
        let address = validate_address(address, &self.params)?;
        let rows = self.store.utxos_by_address(&address).await?;
        let tip = ChainTip::new(self.store.selected_tip_blue_score().await?);
        warn_on_stale_tip(&rows, tip);

        let judgments = evaluate(&rows, tip, &self.rule)?;
        trace!("GetUTXOsByAddress {}: {} outputs at selected tip blue score {}", address, judgments.len(), tip.selected_tip_blue_score);
        Ok(judgments_into_rpc(&judgments))
    }
}

/// Outputs accepted above the tip get no confirmation. This only happens when the
/// tip read lags behind the rows, which is worth noticing server side.
fn warn_on_stale_tip(rows: &[UtxoRow], tip: ChainTip) {
    let ahead = rows.iter().filter_map(|row| row.acceptance.blue_score()).filter(|&blue_score| blue_score > tip.selected_tip_blue_score);
    if let Some(highest) = ahead.max() {
        warn!(
            "Selected tip blue score {} is behind an accepting block at blue score {}, affected outputs report 0 confirmations",
            tip.selected_tip_blue_score, highest
        );
    }
}
