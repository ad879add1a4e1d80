use kasparov_addresses::Address;
use kasparov_consensus_core::subnets::{SUBNETWORK_ID_COINBASE, SUBNETWORK_ID_NATIVE};
use kasparov_database::prelude::*;
use kasparov_hashes::Hash;
use kasparov_utxostatus::{AcceptanceStatus, UtxoRow};
use std::io::Write;

// cspell:disable
const ALICE: &str = "kaspa:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqkx9awp4e";
const BOB: &str = "kaspa:qp0l70zd5x85ttwd6jv7g3s3a8llzj96d8dncn4zmhv4tlzx5k2jyqh70xmfj";
// cspell:enable

fn address(s: &str) -> Address {
    s.try_into().unwrap()
}

fn row(seed: u64, index: u32) -> UtxoRow {
    UtxoRow::new(
        Hash::from(seed),
        index,
        seed * 100,
        Default::default(),
        SUBNETWORK_ID_NATIVE.to_string(),
        AcceptanceStatus::accepted(Hash::from(seed + 1000), seed),
    )
}

#[tokio::test]
async fn test_insert_and_query_in_insertion_order() {
    kasparov_core::log::try_init_logger("info");
    let store = MemoryUtxoStore::new();
    assert!(store.is_empty());
    assert_eq!(store.selected_tip_blue_score().await.unwrap(), 0);

    let rows = vec![row(5, 0), row(1, 2), row(3, 1), row(1, 0)];
    for r in rows.iter() {
        store.insert(address(ALICE), r.clone()).unwrap();
    }
    store.insert(address(BOB), row(9, 0)).unwrap();
    store.set_selected_tip_blue_score(42);

    assert_eq!(store.utxos_by_address(&address(ALICE)).await.unwrap(), rows);
    assert_eq!(store.utxos_by_address(&address(BOB)).await.unwrap(), vec![row(9, 0)]);
    assert_eq!(store.selected_tip_blue_score().await.unwrap(), 42);
    assert_eq!(store.len(), 5);
    assert_eq!(store.address_count(), 2);

    let unknown: Address = "kaspatest:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqhqrxplya".try_into().unwrap();
    assert!(store.utxos_by_address(&unknown).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_outpoints_are_rejected() {
    let store = MemoryUtxoStore::new();
    store.insert(address(ALICE), row(1, 0)).unwrap();
    let err = store.insert(address(ALICE), row(1, 0)).unwrap_err();
    assert!(err.is_already_exists());
    // The same outpoint may still be listed under another address
    store.insert(address(BOB), row(1, 0)).unwrap();
    assert_eq!(store.utxos_by_address(&address(ALICE)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_keeps_remaining_order() {
    let store = MemoryUtxoStore::new();
    for seed in 1..=4 {
        store.insert(address(ALICE), row(seed, 0)).unwrap();
    }
    let removed = store.remove(&address(ALICE), &TransactionOutpoint::new(Hash::from(2u64), 0)).unwrap();
    assert_eq!(removed, row(2, 0));
    assert_eq!(store.utxos_by_address(&address(ALICE)).await.unwrap(), vec![row(1, 0), row(3, 0), row(4, 0)]);

    let err = store.remove(&address(ALICE), &TransactionOutpoint::new(Hash::from(2u64), 0)).unwrap_err();
    assert!(err.is_key_not_found());
    assert!(store.remove(&address(BOB), &TransactionOutpoint::new(Hash::from(1u64), 0)).unwrap_err().is_key_not_found());

    for seed in [1u64, 3, 4] {
        store.remove(&address(ALICE), &TransactionOutpoint::new(Hash::from(seed), 0)).unwrap();
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_load_snapshot_file() {
    let coinbase = SUBNETWORK_ID_COINBASE.to_string();
    let native = SUBNETWORK_ID_NATIVE.to_string();
    let json = format!(
        r#"{{
            "selectedTipBlueScore": 250,
            "utxos": [
                {{ "address": "{ALICE}", "transactionId": "{tx1}", "index": 0, "value": 500, "scriptPubKey": "20ab",
                   "subnetworkId": "{coinbase}", "acceptingBlockHash": "{block}", "acceptingBlockBlueScore": 100 }},
                {{ "address": "{ALICE}", "transactionId": "{tx2}", "index": 1, "value": 10, "scriptPubKey": "",
                   "subnetworkId": "{native}" }},
                {{ "address": "{ALICE}", "transactionId": "{tx2}", "index": 1, "value": 10, "scriptPubKey": "",
                   "subnetworkId": "{native}" }},
                {{ "address": "{BOB}", "transactionId": "{tx1}", "index": 1, "value": 7, "scriptPubKey": "51",
                   "subnetworkId": "garbage" }}
            ]
        }}"#,
        tx1 = Hash::from(1u64),
        tx2 = Hash::from(2u64),
        block = Hash::from(100u64),
    );
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let store = MemoryUtxoStore::load_snapshot(file.path()).unwrap();
    assert_eq!(store.selected_tip_blue_score().await.unwrap(), 250);
    // The repeated entry is dropped
    assert_eq!(store.len(), 3);

    let alice = store.utxos_by_address(&address(ALICE)).await.unwrap();
    assert_eq!(alice.len(), 2);
    assert_eq!(alice[0].acceptance, AcceptanceStatus::accepted(Hash::from(100u64), 100));
    assert_eq!(alice[0].subnetwork_id, coinbase);
    assert_eq!(alice[1].acceptance, AcceptanceStatus::NotAccepted);
    assert!(alice[1].script_public_key.is_empty());

    // Malformed subnetwork ids are kept as stored
    let bob = store.utxos_by_address(&address(BOB)).await.unwrap();
    assert_eq!(bob[0].subnetwork_id, "garbage");

    let reloaded = MemoryUtxoStore::from_snapshot(store.to_snapshot()).unwrap();
    assert_eq!(reloaded.utxos_by_address(&address(ALICE)).await.unwrap(), alice);
    assert_eq!(reloaded.selected_tip_blue_score().await.unwrap(), 250);
}

#[test]
fn test_snapshot_with_invalid_address_fails() {
    let snapshot = UtxoSnapshot {
        selected_tip_blue_score: 1,
        utxos: vec![UtxoSnapshotEntry::from((&address(ALICE), &row(1, 0)))],
    };
    let mut broken = snapshot.clone();
    broken.utxos[0].address = "kaspa".to_string();
    assert!(matches!(MemoryUtxoStore::from_snapshot(broken), Err(StoreError::InvalidSnapshotField { field: "address", .. })));
    assert_eq!(MemoryUtxoStore::from_snapshot(snapshot).unwrap().len(), 1);
}
