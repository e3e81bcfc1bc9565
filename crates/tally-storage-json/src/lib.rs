//! Filesystem-backed JSON persistence for the transaction ledger.
//!
//! The whole store is one pretty-printed JSON blob under a fixed file name
//! inside the data directory; writes go through a temporary sibling file
//! followed by a rename.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tally_core::{storage::LedgerStorage, CoreError};
use tally_domain::Ledger;

const LEDGER_FILE: &str = "transactions.json";
const TMP_SUFFIX: &str = "tmp";

/// JSON implementation of the [`LedgerStorage`] port.
#[derive(Debug, Clone)]
pub struct JsonLedgerStorage {
    data_dir: PathBuf,
}

impl JsonLedgerStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(LEDGER_FILE)
    }
}

impl LedgerStorage for JsonLedgerStorage {
    fn save(&self, ledger: &Ledger) -> Result<(), CoreError> {
        let path = self.ledger_path();
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &serialize_ledger(ledger)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Ledger>, CoreError> {
        let path = self.ledger_path();
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        let ledger =
            serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
        Ok(Some(ledger))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn serialize_ledger(ledger: &Ledger) -> Result<String, CoreError> {
    serde_json::to_string_pretty(ledger).map_err(|err| CoreError::Serde(err.to_string()))
}
