//! tally-core
//!
//! Business logic and services for the transaction ledger.
//! Depends on tally-domain. No terminal I/O, no storage implementations.

pub mod balance_service;
pub mod error;
pub mod filter_service;
pub mod format;
pub mod manager;
pub mod storage;
pub mod time;
pub mod transaction_service;

pub use balance_service::*;
pub use error::CoreError;
pub use filter_service::*;
pub use format::*;
pub use manager::*;
pub use storage::*;
pub use time::*;
pub use transaction_service::*;
