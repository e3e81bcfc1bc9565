use std::fs;

use chrono::Utc;
use tally_core::storage::LedgerStorage;
use tally_domain::{EntryKind, Ledger, Transaction};
use tally_storage_json::JsonLedgerStorage;
use tempfile::tempdir;

#[test]
fn json_storage_round_trips_the_ledger() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(dir.path().join("ledger")).expect("create storage");

    let mut ledger = Ledger::new();
    ledger.add_transaction(Transaction::new("Rent", 1200.0, EntryKind::Debit, Utc::now()));
    ledger.add_transaction(Transaction::new(
        "Paycheck",
        2000.0,
        EntryKind::Credit,
        Utc::now(),
    ));

    storage.save(&ledger).expect("save ledger");
    let loaded = storage
        .load()
        .expect("load ledger")
        .expect("blob must exist");

    assert_eq!(loaded.transaction_count(), 2);
    // Display order survives the round trip.
    assert_eq!(loaded.transactions[0].name, "Paycheck");
    assert_eq!(loaded.transactions[1].name, "Rent");
    assert!(storage.ledger_path().exists());
}

#[test]
fn missing_blob_loads_as_no_prior_state() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(dir.path().join("ledger")).expect("create storage");

    assert!(storage.load().expect("load").is_none());
}

#[test]
fn corrupt_blob_surfaces_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(dir.path().join("ledger")).expect("create storage");
    fs::write(storage.ledger_path(), "{not json").expect("write corrupt blob");

    let err = storage.load().expect_err("corrupt blob must fail to load");
    assert!(matches!(err, tally_core::CoreError::Serde(_)), "got {err:?}");
}

#[test]
fn saving_leaves_no_temporary_file_behind() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(dir.path().join("ledger")).expect("create storage");

    storage.save(&Ledger::new()).expect("save ledger");
    storage.save(&Ledger::new()).expect("save ledger again");

    let mut tmp = storage.ledger_path();
    tmp.set_extension("json.tmp");
    assert!(!tmp.exists());
}
