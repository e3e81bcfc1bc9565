//! Domain models for ledger transactions and their workflow status.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    /// Strictly positive magnitude; the direction lives in `kind`.
    pub amount: f64,
    pub kind: EntryKind,
    #[serde(default)]
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            kind,
            status: TransactionStatus::Scheduled,
            created_at,
        }
    }

    /// Signed contribution of this transaction to the balance.
    pub fn signed_amount(&self) -> f64 {
        self.amount * self.kind.factor()
    }

    pub fn is_credit(&self) -> bool {
        matches!(self.kind, EntryKind::Credit)
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Transaction {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.status)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Direction of a transaction relative to the balance.
pub enum EntryKind {
    Credit,
    Debit,
}

impl EntryKind {
    /// Sign applied to the stored magnitude: +1 for credits, -1 for debits.
    pub fn factor(self) -> f64 {
        match self {
            EntryKind::Credit => 1.0,
            EntryKind::Debit => -1.0,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Credit => "Credit",
            EntryKind::Debit => "Debit",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Workflow tag attached to each transaction. Purely classificatory: every
/// status contributes identically to balance math, and any transition
/// between any two statuses is legal.
#[derive(Default)]
pub enum TransactionStatus {
    #[default]
    Scheduled,
    Auto,
    Pending,
    Cleared,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionStatus::Scheduled => "Scheduled",
            TransactionStatus::Auto => "Auto",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Cleared => "Cleared",
        };
        f.write_str(label)
    }
}
