//! Validated mutation helpers for the transaction store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use tally_domain::{EntryKind, Ledger, Transaction, TransactionStatus};

use crate::CoreError;

/// Provides validated CRUD helpers for ledger transactions.
///
/// Validation failures surface as [`CoreError::Validation`]; callers that
/// want forgiving data-entry behavior simply discard the error and leave
/// the store untouched.
pub struct TransactionService;

impl TransactionService {
    /// Validates and prepends a new transaction, returning its identifier.
    ///
    /// `amount_text` is raw user input and must parse to a finite number
    /// greater than zero. The new record starts out `Scheduled`.
    pub fn create(
        ledger: &mut Ledger,
        name: &str,
        amount_text: &str,
        kind: EntryKind,
        created_at: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        let name = validate_name(name)?;
        let amount = parse_amount(amount_text)?;
        let id = ledger.add_transaction(Transaction::new(name, amount, kind, created_at));
        Ok(id)
    }

    /// Replaces name, amount, and kind; id, creation instant, and status
    /// survive the edit.
    pub fn edit(
        ledger: &mut Ledger,
        id: Uuid,
        name: &str,
        amount_text: &str,
        kind: EntryKind,
    ) -> Result<(), CoreError> {
        let name = validate_name(name)?;
        let amount = parse_amount(amount_text)?;
        let txn = ledger
            .transaction_mut(id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        txn.name = name;
        txn.amount = amount;
        txn.kind = kind;
        ledger.touch();
        Ok(())
    }

    /// Moves the transaction to `status`. Any transition is legal, including
    /// re-applying the current status.
    pub fn set_status(
        ledger: &mut Ledger,
        id: Uuid,
        status: TransactionStatus,
    ) -> Result<(), CoreError> {
        let txn = ledger
            .transaction_mut(id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        txn.status = status;
        ledger.touch();
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Result<Transaction, CoreError> {
        ledger
            .remove_transaction(id)
            .ok_or(CoreError::TransactionNotFound(id))
    }

    /// Unconditionally removes every transaction.
    pub fn clear(ledger: &mut Ledger) {
        ledger.clear_transactions();
    }

    /// Returns a snapshot of the store in display order.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }
}

fn validate_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

fn parse_amount(raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::Validation(format!("`{trimmed}` is not a number")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(
            "amount must be a finite number greater than zero".into(),
        ));
    }
    Ok(value)
}
