//! # Data Store
//!
//! Data directory configuration and repository access.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  StoreConfig::new(dir) ← file names default to the standard set        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataStore::new(config) ← cheap, no I/O                                │
//! │       │                                                                 │
//! │       ├──► commission_report()   reads vendas.json on every call       │
//! │       │                                                                 │
//! │       └──► open_ledger()         reads movimentacoes.json once         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use tally_core::commission::{build_report, CommissionReport};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::file::JsonFile;
use crate::ledger::InventoryLedger;
use crate::repository::inventory::InventoryRepository;
use crate::repository::movement::MovementRepository;
use crate::repository::sales::SalesRepository;

pub const DEFAULT_SALES_FILE: &str = "vendas.json";
pub const DEFAULT_INVENTORY_FILE: &str = "estoque.json";
pub const DEFAULT_MOVEMENTS_FILE: &str = "movimentacoes.json";

// =============================================================================
// Configuration
// =============================================================================

/// Where the data files live.
///
/// ## Example
/// ```rust
/// use tally_store::StoreConfig;
///
/// let config = StoreConfig::new("/srv/tally").inventory_file("stock.json");
/// assert!(config.inventory_path().ends_with("stock.json"));
/// assert!(config.sales_path().ends_with("vendas.json"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding all three files.
    pub data_dir: PathBuf,

    /// Sales dataset, read-only.
    pub sales_file: String,

    /// Inventory snapshot, rewritten on every movement.
    pub inventory_file: String,

    /// Movement history, rewritten on every movement.
    pub movements_file: String,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            sales_file: DEFAULT_SALES_FILE.to_string(),
            inventory_file: DEFAULT_INVENTORY_FILE.to_string(),
            movements_file: DEFAULT_MOVEMENTS_FILE.to_string(),
        }
    }

    pub fn sales_file(mut self, name: impl Into<String>) -> Self {
        self.sales_file = name.into();
        self
    }

    pub fn inventory_file(mut self, name: impl Into<String>) -> Self {
        self.inventory_file = name.into();
        self
    }

    pub fn movements_file(mut self, name: impl Into<String>) -> Self {
        self.movements_file = name.into();
        self
    }

    pub fn sales_path(&self) -> PathBuf {
        self.data_dir.join(&self.sales_file)
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn movements_path(&self) -> PathBuf {
        self.data_dir.join(&self.movements_file)
    }
}

// =============================================================================
// DataStore
// =============================================================================

/// Main storage handle providing repository access.
#[derive(Debug, Clone)]
pub struct DataStore {
    config: StoreConfig,
}

impl DataStore {
    pub fn new(config: StoreConfig) -> Self {
        info!(data_dir = %config.data_dir.display(), "Using data directory");
        DataStore { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    pub fn sales(&self) -> SalesRepository {
        SalesRepository::new(JsonFile::new(self.config.sales_path()))
    }

    pub fn inventory(&self) -> InventoryRepository {
        InventoryRepository::new(JsonFile::new(self.config.inventory_path()))
    }

    pub fn movements(&self) -> MovementRepository {
        MovementRepository::new(JsonFile::new(self.config.movements_path()))
    }

    /// Computes the commission report from the current sales file.
    ///
    /// Recomputed on every call; nothing is cached.
    pub async fn commission_report(&self) -> StoreResult<Vec<CommissionReport>> {
        let sales = self.sales().load_all().await?;
        let report = build_report(&sales)?;
        debug!(salespeople = report.len(), "Built commission report");
        Ok(report)
    }

    /// Opens the inventory ledger, loading the movement history once.
    pub async fn open_ledger(&self) -> InventoryLedger {
        InventoryLedger::open(self.inventory(), self.movements()).await
    }
}
