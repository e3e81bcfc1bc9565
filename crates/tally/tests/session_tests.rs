use std::fs;

use tally::{open_at, EntryKind, TransactionStatus};
use tempfile::tempdir;

#[test]
fn fresh_directory_opens_an_empty_tracker() {
    let dir = tempdir().expect("tempdir");
    let session = open_at(dir.path().to_path_buf()).expect("open session");

    assert!(session.manager.ledger().is_empty());
    assert_eq!(session.manager.current_balance(), 0.0);
    assert_eq!(session.config.currency, "USD");
}

#[test]
fn state_survives_a_restart() {
    let dir = tempdir().expect("tempdir");

    let id = {
        let mut session = open_at(dir.path().to_path_buf()).expect("open session");
        let id = session
            .manager
            .create_transaction("Rent", "1200", EntryKind::Debit)
            .expect("create transaction");
        session
            .manager
            .set_status(id, TransactionStatus::Cleared)
            .expect("set status");
        id
    };

    let reopened = open_at(dir.path().to_path_buf()).expect("reopen session");
    assert_eq!(reopened.manager.ledger().transaction_count(), 1);
    assert_eq!(reopened.manager.current_balance(), -1200.0);
    let txn = reopened
        .manager
        .ledger()
        .transaction(id)
        .expect("restored transaction");
    assert_eq!(txn.status, TransactionStatus::Cleared);
}

#[test]
fn corrupt_blob_degrades_to_an_empty_tracker() {
    let dir = tempdir().expect("tempdir");

    {
        let mut session = open_at(dir.path().to_path_buf()).expect("open session");
        session
            .manager
            .create_transaction("Rent", "1200", EntryKind::Debit)
            .expect("create transaction");
    }

    let blob = dir.path().join("ledger").join("transactions.json");
    fs::write(&blob, "{definitely not json").expect("corrupt the blob");

    let reopened = open_at(dir.path().to_path_buf()).expect("reopen session");
    assert!(reopened.manager.ledger().is_empty());
}

#[test]
fn example_scenario_end_to_end() {
    let dir = tempdir().expect("tempdir");
    let mut session = open_at(dir.path().to_path_buf()).expect("open session");

    let rent = session
        .manager
        .create_transaction("Rent", "1200", EntryKind::Debit)
        .expect("create rent");
    assert_eq!(session.manager.current_balance(), -1200.0);

    let paycheck = session
        .manager
        .create_transaction("Paycheck", "2000", EntryKind::Credit)
        .expect("create paycheck");
    assert_eq!(session.manager.current_balance(), 800.0);

    let balances = session.manager.running_balances();
    assert_eq!(balances[&rent], -1200.0);
    assert_eq!(balances[&paycheck], 800.0);

    assert_eq!(session.manager.search("pay").len(), 1);

    session.manager.clear_all();
    assert_eq!(session.manager.current_balance(), 0.0);
    assert!(session.manager.search("rent").is_empty());
}
