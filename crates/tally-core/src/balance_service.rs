//! Pure balance computations over the current ledger snapshot.

use std::collections::HashMap;

use uuid::Uuid;

use tally_domain::{Ledger, Transaction};

/// Derives current and running balances; never mutates the ledger.
pub struct BalanceService;

impl BalanceService {
    /// Signed sum of every transaction. An empty ledger yields 0.0.
    pub fn current_balance(ledger: &Ledger) -> f64 {
        ledger
            .transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    /// Cumulative signed sum per transaction in chronological order, keyed
    /// by id so display order and accumulation order can differ.
    ///
    /// Ties on `created_at` keep insertion order (oldest insertion first);
    /// the sort is stable, so repeat computations agree.
    pub fn running_balances(ledger: &Ledger) -> HashMap<Uuid, f64> {
        // The store is most-recent-first, so reverse before the stable sort.
        let mut chronological: Vec<&Transaction> = ledger.transactions.iter().rev().collect();
        chronological.sort_by_key(|txn| txn.created_at);

        let mut balances = HashMap::with_capacity(chronological.len());
        let mut running = 0.0;
        for txn in chronological {
            running += txn.signed_amount();
            balances.insert(txn.id, running);
        }
        balances
    }
}
