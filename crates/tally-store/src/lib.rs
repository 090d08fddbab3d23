//! # tally-store: File Storage Layer for Tally
//!
//! This crate provides access to the three JSON data files and owns the
//! stateful part of the system, the [`InventoryLedger`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Data Flow                                │
//! │                                                                         │
//! │  HTTP handler (POST /api/movimentacoes)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   tally-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   DataStore   │    │  Repositories │    │   JsonFile   │  │   │
//! │  │   │  (store.rs)   │    │               │    │  (file.rs)   │  │   │
//! │  │   │               │    │ SalesRepo     │    │              │  │   │
//! │  │   │ StoreConfig   │───►│ InventoryRepo │───►│ load / save  │  │   │
//! │  │   │ report()      │    │ MovementRepo  │    │ atomic swap  │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │                       ┌────────▼────────┐                      │   │
//! │  │                       │ InventoryLedger │  lock + history      │   │
//! │  │                       └─────────────────┘                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data/vendas.json   data/estoque.json   data/movimentacoes.json        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Data directory configuration and repository access
//! - [`file`] - JSON load and atomic save
//! - [`ledger`] - Serialized stock movements with in-memory history
//! - [`error`] - Storage error types
//! - [`repository`] - One repository per data file
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_store::{DataStore, StoreConfig};
//!
//! let store = DataStore::new(StoreConfig::new("./data"));
//! let report = store.commission_report().await?;
//!
//! let ledger = store.open_ledger().await;
//! let movement = ledger.apply_movement(request).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod ledger;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use ledger::InventoryLedger;
pub use store::{DataStore, StoreConfig};

// Repository re-exports for convenience
pub use repository::inventory::InventoryRepository;
pub use repository::movement::MovementRepository;
pub use repository::sales::SalesRepository;
