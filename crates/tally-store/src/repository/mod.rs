//! # Repository Module
//!
//! One repository per data file.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  DataStore                                                             │
//! │  ├── sales()      → SalesRepository      vendas.json         (read)    │
//! │  ├── inventory()  → InventoryRepository  estoque.json        (r/w)     │
//! │  └── movements()  → MovementRepository   movimentacoes.json  (r/w)     │
//! │                                                                         │
//! │  Each repository knows the root shape of its file and nothing else.    │
//! │  Rules (tiers, stock math) stay in tally-core.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SalesRepository`](sales::SalesRepository) - Static sales dataset
//! - [`InventoryRepository`](inventory::InventoryRepository) - Product stock snapshot
//! - [`MovementRepository`](movement::MovementRepository) - Movement history

pub mod inventory;
pub mod movement;
pub mod sales;
