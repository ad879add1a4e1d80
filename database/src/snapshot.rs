use crate::errors::{StoreError, StoreResult};
use kasparov_addresses::Address;
use kasparov_consensus_core::{
    BlueScore,
    tx::{ScriptVec, TransactionId, TransactionIndexType},
};
use kasparov_hashes::Hash;
use kasparov_utxostatus::{AcceptanceStatus, UtxoRow};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// JSON image of the materialized ledger, as consumed by [`MemoryUtxoStore`](crate::prelude::MemoryUtxoStore).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoSnapshot {
    #[serde(default)]
    pub selected_tip_blue_score: BlueScore,
    #[serde(default)]
    pub utxos: Vec<UtxoSnapshotEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoSnapshotEntry {
    pub address: String,
    pub transaction_id: TransactionId,
    pub index: TransactionIndexType,
    pub value: u64,
    /// Hex encoded locking script
    pub script_pub_key: String,
    /// Kept verbatim, it is decoded only when the output gets evaluated
    pub subnetwork_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepting_block_hash: Option<Hash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepting_block_blue_score: Option<BlueScore>,
}

impl UtxoSnapshot {
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

impl UtxoSnapshotEntry {
    pub fn address(&self) -> StoreResult<Address> {
        Address::try_from(self.address.as_str()).map_err(|err| StoreError::InvalidSnapshotField {
            field: "address",
            value: self.address.clone(),
            reason: err.to_string(),
        })
    }

    pub fn to_row(&self) -> StoreResult<UtxoRow> {
        Ok(UtxoRow::new(
            self.transaction_id,
            self.index,
            self.value,
            self.script_public_key()?,
            self.subnetwork_id.clone(),
            self.acceptance()?,
        ))
    }

    fn script_public_key(&self) -> StoreResult<ScriptVec> {
        let invalid = |reason: String| StoreError::InvalidSnapshotField { field: "scriptPubKey", value: self.script_pub_key.clone(), reason };
        if self.script_pub_key.len() % 2 != 0 {
            return Err(invalid("odd number of hex characters".to_string()));
        }
        let mut script = ScriptVec::from_elem(0u8, self.script_pub_key.len() / 2);
        faster_hex::hex_decode(self.script_pub_key.as_bytes(), script.as_mut_slice()).map_err(|err| invalid(err.to_string()))?;
        Ok(script)
    }

    fn acceptance(&self) -> StoreResult<AcceptanceStatus> {
        match (self.accepting_block_hash, self.accepting_block_blue_score) {
            (Some(block_hash), Some(blue_score)) => Ok(AcceptanceStatus::accepted(block_hash, blue_score)),
            (None, None) => Ok(AcceptanceStatus::NotAccepted),
            _ => Err(StoreError::DataInconsistency(format!(
                "output ({}, {}) must carry either both accepting block hash and blue score or none",
                self.transaction_id, self.index
            ))),
        }
    }
}

impl From<(&Address, &UtxoRow)> for UtxoSnapshotEntry {
    fn from((address, row): (&Address, &UtxoRow)) -> Self {
        Self {
            address: address.to_string(),
            transaction_id: row.transaction_id,
            index: row.index,
            value: row.value,
            script_pub_key: faster_hex::hex_string(&row.script_public_key),
            subnetwork_id: row.subnetwork_id.clone(),
            accepting_block_hash: row.acceptance.block_hash(),
            accepting_block_blue_score: row.acceptance.blue_score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // cspell:disable
    const ADDRESS: &str = "kaspa:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqkx9awp4e";
    // cspell:enable

    fn entry_json(extra: &str) -> String {
        format!(
            r#"{{"address":"{ADDRESS}","transactionId":"{}","index":1,"value":500,"scriptPubKey":"20abac","subnetworkId":"0000000000000000000000000000000000000001"{extra}}}"#,
            Hash::from(7u64)
        )
    }

    #[test]
    fn test_entry_to_row() {
        let hash = Hash::from(100u64);
        let json = entry_json(&format!(r#","acceptingBlockHash":"{hash}","acceptingBlockBlueScore":100"#));
        let entry: UtxoSnapshotEntry = serde_json::from_str(&json).unwrap();
        let row = entry.to_row().unwrap();
        assert_eq!(row.transaction_id, Hash::from(7u64));
        assert_eq!(row.index, 1);
        assert_eq!(row.value, 500);
        assert_eq!(row.script_public_key.as_slice(), &[0x20, 0xab, 0xac]);
        assert_eq!(row.subnetwork_id, "0000000000000000000000000000000000000001");
        assert_eq!(row.acceptance, AcceptanceStatus::accepted(hash, 100));
        assert_eq!(entry.address().unwrap().to_string(), ADDRESS);

        let entry: UtxoSnapshotEntry = serde_json::from_str(&entry_json("")).unwrap();
        assert_eq!(entry.to_row().unwrap().acceptance, AcceptanceStatus::NotAccepted);
    }

    #[test]
    fn test_entry_round_trip_omits_absent_acceptance() {
        let entry: UtxoSnapshotEntry = serde_json::from_str(&entry_json("")).unwrap();
        let address = entry.address().unwrap();
        let row = entry.to_row().unwrap();
        let json = serde_json::to_string(&UtxoSnapshotEntry::from((&address, &row))).unwrap();
        assert_eq!(json, entry_json(""));
    }

    #[test]
    fn test_invalid_entries() {
        let json = entry_json(r#","acceptingBlockBlueScore":100"#);
        let entry: UtxoSnapshotEntry = serde_json::from_str(&json).unwrap();
        assert!(matches!(entry.to_row(), Err(StoreError::DataInconsistency(_))));

        let mut entry: UtxoSnapshotEntry = serde_json::from_str(&entry_json("")).unwrap();
        entry.script_pub_key = "abc".to_string();
        assert!(matches!(entry.to_row(), Err(StoreError::InvalidSnapshotField { field: "scriptPubKey", .. })));
        entry.script_pub_key = "zz".to_string();
        assert!(matches!(entry.to_row(), Err(StoreError::InvalidSnapshotField { field: "scriptPubKey", .. })));

        entry.address = "kaspa:invalid".to_string();
        assert!(matches!(entry.address(), Err(StoreError::InvalidSnapshotField { field: "address", .. })));

        assert!(matches!(UtxoSnapshot::from_json("{"), Err(StoreError::DeserializationError(_))));
        assert!(matches!(UtxoSnapshot::load("/non/existent/snapshot.json"), Err(StoreError::IoError(_))));
    }
}
