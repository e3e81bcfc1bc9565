//! tally-domain
//!
//! Pure domain models (Transaction, Ledger, workflow statuses).
//! No I/O, no storage. Only data types and core enums.

pub mod common;
pub mod ledger;
pub mod transaction;

pub use common::*;
pub use ledger::*;
pub use transaction::*;
