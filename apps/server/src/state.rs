//! # Application State
//!
//! Shared state injected into every handler through axum's `State`.
//!
//! ```text
//! AppState (Clone, cheap)
//! ├── store:  DataStore        file locations, commission report
//! └── ledger: InventoryLedger  the one writer of stock + history (shared)
//! ```

use tally_store::{DataStore, InventoryLedger};

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: DataStore,
    pub ledger: InventoryLedger,
}

impl AppState {
    pub fn new(store: DataStore, ledger: InventoryLedger) -> Self {
        AppState { store, ledger }
    }

    /// Builds the state for a store, loading the movement history.
    pub async fn open(store: DataStore) -> Self {
        let ledger = store.open_ledger().await;
        AppState::new(store, ledger)
    }
}
