use kasparov_consensus_core::tx::{TransactionId, TransactionIndexType};
use kasparov_utxostatus::UtxoRow;
use std::fmt::{Display, Formatter};

/// Identifies an output by its owning transaction and its position within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionOutpoint {
    pub transaction_id: TransactionId,
    pub index: TransactionIndexType,
}

impl TransactionOutpoint {
    pub fn new(transaction_id: TransactionId, index: TransactionIndexType) -> Self {
        Self { transaction_id, index }
    }
}

impl From<&UtxoRow> for TransactionOutpoint {
    fn from(row: &UtxoRow) -> Self {
        Self::new(row.transaction_id, row.index)
    }
}

impl Display for TransactionOutpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.transaction_id, self.index)
    }
}
