use crate::{
    errors::{StoreError, StoreResult, StoreResultUnitExt},
    outpoint::TransactionOutpoint,
    snapshot::{UtxoSnapshot, UtxoSnapshotEntry},
    store::UtxoStore,
};
use async_trait::async_trait;
use indexmap::IndexMap;
use kasparov_addresses::Address;
use kasparov_consensus_core::BlueScore;
use kasparov_core::{debug, info};
use kasparov_utxostatus::UtxoRow;
use parking_lot::RwLock;
use std::path::Path;

#[derive(Default)]
struct Inner {
    // IndexMap keeps outputs in insertion order, so queries return a stable order
    utxos_by_address: IndexMap<Address, IndexMap<TransactionOutpoint, UtxoRow>>,
    selected_tip_blue_score: BlueScore,
}

/// A [`UtxoStore`] holding the whole ledger in memory.
#[derive(Default)]
pub struct MemoryUtxoStore {
    inner: RwLock<Inner>,
}

impl MemoryUtxoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `snapshot`. Repeated outpoints of an address are
    /// ignored after their first occurrence.
    pub fn from_snapshot(snapshot: UtxoSnapshot) -> StoreResult<Self> {
        let store = Self::new();
        store.set_selected_tip_blue_score(snapshot.selected_tip_blue_score);
        for entry in snapshot.utxos.iter() {
            store.insert(entry.address()?, entry.to_row()?).idempotent()?;
        }
        let duplicates = snapshot.utxos.len() - store.len();
        if duplicates > 0 {
            debug!("Ignored {} repeated utxo entries of the snapshot", duplicates);
        }
        Ok(store)
    }

    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        let snapshot = UtxoSnapshot::load(path)?;
        let selected_tip_blue_score = snapshot.selected_tip_blue_score;
        let store = Self::from_snapshot(snapshot)?;
        info!(
            "Loaded {} utxos of {} addresses from {}, selected tip blue score {}",
            store.len(),
            store.address_count(),
            path.display(),
            selected_tip_blue_score
        );
        Ok(store)
    }

    pub fn to_snapshot(&self) -> UtxoSnapshot {
        let inner = self.inner.read();
        UtxoSnapshot {
            selected_tip_blue_score: inner.selected_tip_blue_score,
            utxos: inner
                .utxos_by_address
                .iter()
                .flat_map(|(address, rows)| rows.values().map(move |row| UtxoSnapshotEntry::from((address, row))))
                .collect(),
        }
    }

    /// Adds an unspent output to `address`. Fails if the address already owns this outpoint.
    pub fn insert(&self, address: Address, row: UtxoRow) -> StoreResult<()> {
        let outpoint = TransactionOutpoint::from(&row);
        let mut inner = self.inner.write();
        let rows = inner.utxos_by_address.entry(address).or_default();
        if rows.contains_key(&outpoint) {
            return Err(StoreError::KeyAlreadyExists(outpoint.to_string()));
        }
        rows.insert(outpoint, row);
        Ok(())
    }

    /// Removes a spent output of `address` and returns it.
    pub fn remove(&self, address: &Address, outpoint: &TransactionOutpoint) -> StoreResult<UtxoRow> {
        let mut inner = self.inner.write();
        let rows = inner.utxos_by_address.get_mut(address).ok_or_else(|| StoreError::KeyNotFound(address.to_string()))?;
        // shift_remove keeps the order of the remaining outputs
        let row = rows.shift_remove(outpoint).ok_or_else(|| StoreError::KeyNotFound(outpoint.to_string()))?;
        if rows.is_empty() {
            inner.utxos_by_address.shift_remove(address);
        }
        Ok(row)
    }

    pub fn set_selected_tip_blue_score(&self, blue_score: BlueScore) {
        self.inner.write().selected_tip_blue_score = blue_score;
    }

    /// Total number of unspent outputs across all addresses
    pub fn len(&self) -> usize {
        self.inner.read().utxos_by_address.values().map(|rows| rows.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().utxos_by_address.is_empty()
    }

    pub fn address_count(&self) -> usize {
        self.inner.read().utxos_by_address.len()
    }
}

#[async_trait]
impl UtxoStore for MemoryUtxoStore {
    async fn utxos_by_address(&self, address: &Address) -> StoreResult<Vec<UtxoRow>> {
        Ok(self.inner.read().utxos_by_address.get(address).map(|rows| rows.values().cloned().collect()).unwrap_or_default())
    }

    async fn selected_tip_blue_score(&self) -> StoreResult<BlueScore> {
        Ok(self.inner.read().selected_tip_blue_score)
    }
}
