//! Storage-backed facade that owns the live ledger.

use std::collections::HashMap;

use tracing::{debug, warn};
use uuid::Uuid;

use tally_domain::{EntryKind, Ledger, Transaction, TransactionStatus};

use crate::{
    balance_service::BalanceService,
    filter_service::FilterService,
    storage::LedgerStorage,
    time::{Clock, SystemClock},
    transaction_service::TransactionService,
    CoreError,
};

/// Coordinates the in-memory store, the persistence port, and the clock.
///
/// Every successful mutation is followed by a full snapshot write. A failed
/// write is logged and discarded; the in-memory state stays authoritative
/// for the session.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn LedgerStorage>,
    clock: Box<dyn Clock>,
}

impl LedgerManager {
    /// Restores the last saved state, seeding an empty ledger when no prior
    /// state exists or the saved blob cannot be read.
    pub fn open(storage: Box<dyn LedgerStorage>) -> Self {
        Self::open_with_clock(storage, Box::new(SystemClock))
    }

    pub fn open_with_clock(storage: Box<dyn LedgerStorage>, clock: Box<dyn Clock>) -> Self {
        let ledger = match storage.load() {
            Ok(Some(ledger)) => ledger,
            Ok(None) => Ledger::new(),
            Err(err) => {
                warn!("failed to restore ledger, starting empty: {err}");
                Ledger::new()
            }
        };
        Self {
            ledger,
            storage,
            clock,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Validates and records a new transaction, returning its identifier.
    pub fn create_transaction(
        &mut self,
        name: &str,
        amount_text: &str,
        kind: EntryKind,
    ) -> Result<Uuid, CoreError> {
        let now = self.clock.now();
        let id = TransactionService::create(&mut self.ledger, name, amount_text, kind, now)?;
        debug!(%id, "transaction created");
        self.persist();
        Ok(id)
    }

    /// Rewrites name, amount, and kind of an existing transaction.
    pub fn edit_transaction(
        &mut self,
        id: Uuid,
        name: &str,
        amount_text: &str,
        kind: EntryKind,
    ) -> Result<(), CoreError> {
        TransactionService::edit(&mut self.ledger, id, name, amount_text, kind)?;
        self.persist();
        Ok(())
    }

    /// Applies a workflow status to an existing transaction.
    pub fn set_status(&mut self, id: Uuid, status: TransactionStatus) -> Result<(), CoreError> {
        TransactionService::set_status(&mut self.ledger, id, status)?;
        self.persist();
        Ok(())
    }

    /// Deletes a single transaction, returning the removed record.
    pub fn remove_transaction(&mut self, id: Uuid) -> Result<Transaction, CoreError> {
        let removed = TransactionService::remove(&mut self.ledger, id)?;
        self.persist();
        Ok(removed)
    }

    /// Removes every transaction. Destructive and irreversible.
    pub fn clear_all(&mut self) {
        TransactionService::clear(&mut self.ledger);
        self.persist();
    }

    /// Case-insensitive substring search over name and amount.
    pub fn search(&self, query: &str) -> Vec<&Transaction> {
        FilterService::matching(&self.ledger, query)
    }

    pub fn current_balance(&self) -> f64 {
        BalanceService::current_balance(&self.ledger)
    }

    pub fn running_balances(&self) -> HashMap<Uuid, f64> {
        BalanceService::running_balances(&self.ledger)
    }

    /// Best-effort snapshot write; never propagates storage failures.
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.ledger) {
            warn!("failed to persist ledger snapshot: {err}");
        }
    }
}
