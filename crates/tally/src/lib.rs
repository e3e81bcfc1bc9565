//! Tally offers a local-first transaction ledger: validated mutations,
//! balance math, free-text filtering, and best-effort JSON persistence.

pub mod display;
pub mod session;

pub use session::{open_at, open_default, Session};
pub use tally_config::Config;
pub use tally_core::{BalanceService, CoreError, FilterService, LedgerManager};
pub use tally_domain::{EntryKind, Ledger, Transaction, TransactionStatus};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("tally=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Tally tracing initialized.");
    });
}
