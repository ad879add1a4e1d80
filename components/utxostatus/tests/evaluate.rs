use itertools::Itertools;
use kasparov_consensus_core::{
    config::params::MAINNET_PARAMS,
    subnets::{SUBNETWORK_ID_COINBASE, SUBNETWORK_ID_NATIVE, SUBNETWORK_ID_REGISTRY, SubnetworkId},
    tx::ScriptVec,
};
use kasparov_hashes::Hash;
use kasparov_utxostatus::{AcceptanceStatus, ChainTip, NetworkRule, UtxoRow, UtxoStatusError, evaluate};
use smallvec::smallvec;

const TIP: u64 = 250;

fn rule() -> NetworkRule {
    NetworkRule::from(&MAINNET_PARAMS)
}

fn row(seed: u64, value: u64, subnetwork_id: SubnetworkId, accepted_at: Option<u64>) -> UtxoRow {
    let script: ScriptVec = smallvec![0x20, seed as u8, 0xac];
    UtxoRow::new(
        Hash::from(seed),
        (seed % 3) as u32,
        value,
        script,
        subnetwork_id.to_string(),
        accepted_at.map(|blue_score| (Hash::from(blue_score << 8), blue_score)).into(),
    )
}

#[test]
fn test_mature_coinbase_output() {
    let rows = vec![row(1, 500, SUBNETWORK_ID_COINBASE, Some(100))];
    let judgments = evaluate(&rows, ChainTip::new(TIP), &rule()).unwrap();

    assert_eq!(judgments.len(), 1);
    let judgment = &judgments[0];
    assert_eq!(judgment.value, 500);
    assert_eq!(judgment.confirmations, 151);
    assert!(judgment.is_coinbase);
    assert!(judgment.is_spendable);
    assert_eq!(judgment.acceptance, AcceptanceStatus::accepted(Hash::from(100u64 << 8), 100));
    assert_eq!(judgment.transaction_id, rows[0].transaction_id);
    assert_eq!(judgment.script_public_key, rows[0].script_public_key);
}

#[test]
fn test_unaccepted_regular_output() {
    let rows = vec![row(2, 10, SUBNETWORK_ID_NATIVE, None)];
    let judgments = evaluate(&rows, ChainTip::new(TIP), &rule()).unwrap();

    let judgment = &judgments[0];
    assert_eq!(judgment.value, 10);
    assert_eq!(judgment.confirmations, 0);
    assert!(!judgment.is_coinbase);
    assert!(!judgment.is_spendable);
    assert!(!judgment.acceptance.is_accepted());
}

#[test]
fn test_unaccepted_outputs_are_never_spendable() {
    for subnetwork_id in [SUBNETWORK_ID_NATIVE, SUBNETWORK_ID_COINBASE, SUBNETWORK_ID_REGISTRY] {
        for tip in [0, 1, TIP, u64::MAX] {
            let judgment = &evaluate(&[row(3, 1, subnetwork_id, None)], ChainTip::new(tip), &rule()).unwrap()[0];
            assert_eq!(judgment.confirmations, 0);
            assert!(!judgment.is_spendable);
        }
    }
}

#[test]
fn test_accepted_at_tip_has_one_confirmation() {
    let judgments = evaluate(&[row(4, 7, SUBNETWORK_ID_NATIVE, Some(TIP))], ChainTip::new(TIP), &rule()).unwrap();
    assert_eq!(judgments[0].confirmations, 1);
    assert!(judgments[0].is_spendable);
}

#[test]
fn test_accepted_above_tip_is_clamped() {
    let rows = vec![row(5, 7, SUBNETWORK_ID_NATIVE, Some(TIP + 1)), row(6, 7, SUBNETWORK_ID_COINBASE, Some(TIP + 1000))];
    let judgments = evaluate(&rows, ChainTip::new(TIP), &rule()).unwrap();
    for judgment in judgments {
        assert_eq!(judgment.confirmations, 0);
        assert!(!judgment.is_spendable);
    }
}

#[test]
fn test_coinbase_maturity_boundary() {
    // 99 confirmations
    let immature = row(7, 50, SUBNETWORK_ID_COINBASE, Some(TIP - 98));
    // 100 confirmations
    let mature = row(8, 50, SUBNETWORK_ID_COINBASE, Some(TIP - 99));
    let judgments = evaluate(&[immature, mature], ChainTip::new(TIP), &rule()).unwrap();

    assert_eq!(judgments[0].confirmations, 99);
    assert!(judgments[0].is_coinbase);
    assert!(!judgments[0].is_spendable);
    assert_eq!(judgments[1].confirmations, 100);
    assert!(judgments[1].is_spendable);
}

#[test]
fn test_regular_output_needs_a_single_confirmation() {
    let confirmed = row(9, 50, SUBNETWORK_ID_NATIVE, Some(TIP));
    let registry = row(10, 50, SUBNETWORK_ID_REGISTRY, Some(TIP));
    let judgments = evaluate(&[confirmed, registry], ChainTip::new(TIP), &rule()).unwrap();
    assert!(judgments.iter().all(|j| j.confirmations == 1 && j.is_spendable && !j.is_coinbase));
}

#[test]
fn test_order_and_length_are_preserved() {
    let rows = (0..64u64)
        .map(|i| {
            let subnetwork_id = if i % 4 == 0 { SUBNETWORK_ID_COINBASE } else { SUBNETWORK_ID_NATIVE };
            let accepted_at = if i % 5 == 0 { None } else { Some(i * 7) };
            row(i, i * 1000, subnetwork_id, accepted_at)
        })
        .collect_vec();
    // Identical rows are not de-duplicated
    let rows = rows.iter().chain(rows.iter().take(3)).cloned().collect_vec();

    let judgments = evaluate(&rows, ChainTip::new(TIP), &rule()).unwrap();
    assert_eq!(judgments.len(), rows.len());
    for (row, judgment) in rows.iter().zip(judgments.iter()) {
        assert_eq!(row.transaction_id, judgment.transaction_id);
        assert_eq!(row.index, judgment.index);
        assert_eq!(row.value, judgment.value);
        assert_eq!(row.acceptance, judgment.acceptance);
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    let rows = (0..16u64).map(|i| row(i, i, SUBNETWORK_ID_COINBASE, Some(i * 20))).collect_vec();
    let tip = ChainTip::new(TIP);
    assert_eq!(evaluate(&rows, tip, &rule()).unwrap(), evaluate(&rows, tip, &rule()).unwrap());
}

#[test]
fn test_empty_batch() {
    assert!(evaluate(&[], ChainTip::new(TIP), &rule()).unwrap().is_empty());
}

#[test]
fn test_malformed_subnetwork_id_fails_the_whole_batch() {
    let mut rows = (0..5u64).map(|i| row(i, i, SUBNETWORK_ID_NATIVE, Some(i))).collect_vec();
    rows[3].subnetwork_id = "not-a-subnetwork".to_string();
    rows[4].subnetwork_id = String::new();

    match evaluate(&rows, ChainTip::new(TIP), &rule()) {
        Err(UtxoStatusError::SubnetworkIdDecode { index, raw, .. }) => {
            assert_eq!(index, 3);
            assert_eq!(raw, "not-a-subnetwork");
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[test]
fn test_custom_network_rule() {
    let rule = NetworkRule::new(5, SubnetworkId::from_byte(9));
    let rows = vec![row(1, 1, SubnetworkId::from_byte(9), Some(TIP - 4)), row(2, 1, SUBNETWORK_ID_COINBASE, Some(TIP - 4))];
    let judgments = evaluate(&rows, ChainTip::new(TIP), &rule).unwrap();

    assert!(judgments[0].is_coinbase);
    assert!(judgments[0].is_spendable);
    // The default coinbase subnetwork is a regular one under this rule
    assert!(!judgments[1].is_coinbase);
    assert!(judgments[1].is_spendable);
}

#[test]
fn test_stored_coinbase_id_is_recognized() {
    let mut coinbase = row(11, 500, SUBNETWORK_ID_NATIVE, Some(TIP));
    coinbase.subnetwork_id = "0000000000000000000000000000000000000001".to_string();
    // Same digits in the opposite byte order name an unrelated subnetwork
    let mut other = row(12, 500, SUBNETWORK_ID_NATIVE, Some(TIP));
    other.subnetwork_id = "0100000000000000000000000000000000000000".to_string();

    let judgments = evaluate(&[coinbase, other], ChainTip::new(TIP), &rule()).unwrap();

    assert!(judgments[0].is_coinbase);
    assert_eq!(judgments[0].confirmations, 1);
    assert!(!judgments[0].is_spendable);
    assert!(!judgments[1].is_coinbase);
    assert!(judgments[1].is_spendable);
}
