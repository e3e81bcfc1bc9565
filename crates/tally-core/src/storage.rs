use tally_domain::Ledger;

use crate::CoreError;

/// Abstraction over persistence backends that durably hold the ledger blob.
///
/// The store is a single fixed blob scoped to the device profile; where it
/// lives is the backend's concern.
pub trait LedgerStorage: Send + Sync {
    /// Durably writes the full ledger snapshot.
    fn save(&self, ledger: &Ledger) -> Result<(), CoreError>;

    /// Reads the last saved snapshot. `Ok(None)` means no prior state.
    fn load(&self) -> Result<Option<Ledger>, CoreError>;
}
