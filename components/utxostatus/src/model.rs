use kasparov_consensus_core::{
    BlueScore,
    config::params::Params,
    subnets::SubnetworkId,
    tx::{ScriptVec, TransactionId, TransactionIndexType},
};
use kasparov_hashes::Hash;

/// Whether, and by which block, the transaction owning an output was accepted into the ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AcceptanceStatus {
    #[default]
    NotAccepted,
    Accepted {
        block_hash: Hash,
        blue_score: BlueScore,
    },
}

impl AcceptanceStatus {
    pub fn accepted(block_hash: Hash, blue_score: BlueScore) -> Self {
        Self::Accepted { block_hash, blue_score }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn block_hash(&self) -> Option<Hash> {
        match self {
            Self::NotAccepted => None,
            Self::Accepted { block_hash, .. } => Some(*block_hash),
        }
    }

    pub fn blue_score(&self) -> Option<BlueScore> {
        match self {
            Self::NotAccepted => None,
            Self::Accepted { blue_score, .. } => Some(*blue_score),
        }
    }
}

impl From<Option<(Hash, BlueScore)>> for AcceptanceStatus {
    fn from(accepting_block: Option<(Hash, BlueScore)>) -> Self {
        match accepting_block {
            Some((block_hash, blue_score)) => Self::Accepted { block_hash, blue_score },
            None => Self::NotAccepted,
        }
    }
}

/// An unspent output of an address, joined with the acceptance data and the
/// subnetwork of its owning transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtxoRow {
    pub transaction_id: TransactionId,
    pub index: TransactionIndexType,
    pub value: u64,
    pub script_public_key: ScriptVec,
    /// Subnetwork id in its stored, hex encoded form. Decoded during evaluation.
    pub subnetwork_id: String,
    pub acceptance: AcceptanceStatus,
}

impl UtxoRow {
    pub fn new(
        transaction_id: TransactionId,
        index: TransactionIndexType,
        value: u64,
        script_public_key: ScriptVec,
        subnetwork_id: String,
        acceptance: AcceptanceStatus,
    ) -> Self {
        Self { transaction_id, index, value, script_public_key, subnetwork_id, acceptance }
    }
}

/// The selected tip snapshot a whole batch is evaluated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainTip {
    pub selected_tip_blue_score: BlueScore,
}

impl ChainTip {
    pub fn new(selected_tip_blue_score: BlueScore) -> Self {
        Self { selected_tip_blue_score }
    }
}

/// The consensus rule outputs are judged by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkRule {
    pub coinbase_maturity: u64,
    pub coinbase_subnetwork_id: SubnetworkId,
}

impl NetworkRule {
    pub fn new(coinbase_maturity: u64, coinbase_subnetwork_id: SubnetworkId) -> Self {
        Self { coinbase_maturity, coinbase_subnetwork_id }
    }
}

impl From<&Params> for NetworkRule {
    fn from(params: &Params) -> Self {
        Self::new(params.coinbase_maturity, params.coinbase_subnetwork_id)
    }
}

/// The status of a single [`UtxoRow`] relative to a [`ChainTip`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtxoJudgment {
    pub transaction_id: TransactionId,
    pub index: TransactionIndexType,
    pub value: u64,
    pub script_public_key: ScriptVec,
    pub acceptance: AcceptanceStatus,
    pub is_coinbase: bool,
    pub confirmations: u64,
    pub is_spendable: bool,
}
