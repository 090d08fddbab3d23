//! # tally-core: Pure Business Logic for Tally
//!
//! This crate holds the business rules of both Tally functions as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 tally-server (axum JSON API)                    │   │
//! │  │    /api/comissoes   /api/estoque   /api/movimentacoes           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               tally-store (JSON files, ledger)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │commission │  │   stock   │  │   │
//! │  │   │  Product  │  │   Money   │  │   tiers   │  │ ENTRY/EXIT│  │   │
//! │  │   │ Movement  │  │ Commission│  │  report   │  │   math    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Sale, Product, Movement, etc.)
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`commission`] - Tiered commission policy and report aggregation
//! - [`stock`] - Stock level arithmetic for movements
//! - [`error`] - Domain error types
//! - [`validation`] - Movement request validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::commission::{build_report, CommissionRate};
//! use tally_core::{Money, Sale};
//!
//! let sales = vec![
//!     Sale::new("Ana", Money::new(15_000, 2)),
//!     Sale::new("Ana", Money::new(5_000, 2)),
//! ];
//!
//! let report = build_report(&sales).unwrap();
//! assert_eq!(report[0].total_commission, Money::new(150, 2)); // 1% of 150.00
//! assert_eq!(CommissionRate::for_amount(Money::new(600, 0)).label(), "5%");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod commission;
pub mod error;
pub mod money;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of the free-text note attached to a movement.
pub const MAX_NOTE_LENGTH: usize = 500;
