//! Startup wiring: configuration, storage, and the live ledger manager.

use std::path::PathBuf;

use tracing::warn;

use tally_config::{Config, ConfigManager};
use tally_core::{CoreError, LedgerManager};
use tally_storage_json::JsonLedgerStorage;

/// A bootstrapped tracker: resolved configuration plus the live manager.
pub struct Session {
    pub config: Config,
    pub manager: LedgerManager,
}

/// Opens the tracker rooted at the user's platform data directory.
pub fn open_default() -> Result<Session, CoreError> {
    open_at(Config::default().resolve_data_root())
}

/// Opens the tracker rooted at an explicit base directory.
///
/// An unreadable configuration degrades to defaults; an unreadable ledger
/// blob degrades to an empty store. Only directory creation can fail here.
pub fn open_at(base: PathBuf) -> Result<Session, CoreError> {
    let config_manager =
        ConfigManager::with_base_dir(base.clone()).map_err(|err| CoreError::Storage(err.to_string()))?;
    let config = match config_manager.load() {
        Ok(config) => config,
        Err(err) => {
            warn!("failed to read configuration, using defaults: {err}");
            Config::default()
        }
    };

    let data_root = config.data_root.clone().unwrap_or(base);
    let storage = JsonLedgerStorage::new(data_root.join("ledger"))?;
    let manager = LedgerManager::open(Box::new(storage));

    Ok(Session { config, manager })
}
