use crate::{
    errors::{UtxoStatusError, UtxoStatusResult},
    model::{AcceptanceStatus, ChainTip, NetworkRule, UtxoJudgment, UtxoRow},
};
use kasparov_consensus_core::subnets::SubnetworkId;

/// Evaluates every row against the same `tip` and `rule`.
///
/// Returns exactly one judgment per row, in row order. If the subnetwork id of
/// any row cannot be decoded the whole evaluation fails and no judgment is returned.
pub fn evaluate(rows: &[UtxoRow], tip: ChainTip, rule: &NetworkRule) -> UtxoStatusResult<Vec<UtxoJudgment>> {
    rows.iter().enumerate().map(|(index, row)| evaluate_row(index, row, tip, rule)).collect()
}

/// Evaluates a single row. `position` is the row index within its batch and only
/// serves error reporting.
pub fn evaluate_row(position: usize, row: &UtxoRow, tip: ChainTip, rule: &NetworkRule) -> UtxoStatusResult<UtxoJudgment> {
    let subnetwork_id = SubnetworkId::decode(&row.subnetwork_id).map_err(|source| UtxoStatusError::SubnetworkIdDecode {
        index: position,
        raw: row.subnetwork_id.clone(),
        source,
    })?;

    let is_coinbase = subnetwork_id == rule.coinbase_subnetwork_id;
    let confirmations = confirmations(&row.acceptance, tip);
    let is_spendable = is_spendable(is_coinbase, confirmations, rule);

    Ok(UtxoJudgment {
        transaction_id: row.transaction_id,
        index: row.index,
        value: row.value,
        script_public_key: row.script_public_key.clone(),
        acceptance: row.acceptance,
        is_coinbase,
        confirmations,
        is_spendable,
    })
}

/// Number of blocks from the accepting block up to the selected tip, both included.
///
/// Unaccepted outputs have no confirmation. An accepting block above the tip
/// (the tip snapshot lags behind the rows) also yields 0.
pub fn confirmations(acceptance: &AcceptanceStatus, tip: ChainTip) -> u64 {
    match *acceptance {
        AcceptanceStatus::NotAccepted => 0,
        AcceptanceStatus::Accepted { blue_score, .. } => {
            tip.selected_tip_blue_score.checked_sub(blue_score).map_or(0, |depth| depth.saturating_add(1))
        }
    }
}

/// Regular outputs are spendable once confirmed, coinbase outputs once they
/// reached the coinbase maturity. Unconfirmed outputs are never spendable.
pub fn is_spendable(is_coinbase: bool, confirmations: u64, rule: &NetworkRule) -> bool {
    if confirmations == 0 {
        return false;
    }
    !is_coinbase || confirmations >= rule.coinbase_maturity
}
