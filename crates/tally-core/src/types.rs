//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Commissions (read-only)          Inventory (read-write)               │
//! │  ┌─────────────────┐              ┌─────────────────┐                  │
//! │  │  SalesDataset   │              │InventorySnapshot│                  │
//! │  │  └── Sale       │              │  └── Product    │                  │
//! │  │      vendedor   │              │      codigo     │                  │
//! │  │      valor      │              │      estoque    │                  │
//! │  └─────────────────┘              └────────┬────────┘                  │
//! │                                            │ MovementRequest           │
//! │                                            ▼                           │
//! │                                   ┌─────────────────┐                  │
//! │                                   │    Movement     │ append-only      │
//! │                                   │  id, tipo, qty  │                  │
//! │                                   │  before / after │                  │
//! │                                   └─────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Names
//! Rust fields use English names. The serde renames reproduce the JSON
//! schema of the data files (`vendas.json`, `estoque.json`,
//! `movimentacoes.json`), which existing front ends already consume.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::{self, Money};
use crate::stock::StockChange;

// =============================================================================
// Sales
// =============================================================================

/// A single sale from the static sales dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    /// Salesperson name. Grouping is by exact string match.
    #[serde(rename = "vendedor")]
    pub salesperson: String,

    /// Sale amount, stored in the file as a decimal number.
    #[serde(rename = "valor", with = "money::major_units")]
    #[ts(type = "number")]
    pub amount: Money,
}

impl Sale {
    pub fn new(salesperson: impl Into<String>, amount: Money) -> Self {
        Sale {
            salesperson: salesperson.into(),
            amount,
        }
    }
}

/// Root object of `vendas.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesDataset {
    #[serde(rename = "vendas")]
    pub sales: Vec<Sale>,
}

// =============================================================================
// Product
// =============================================================================

/// A product tracked in the inventory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Business key, unique within the snapshot.
    #[serde(rename = "codigoProduto")]
    pub product_code: i64,

    #[serde(rename = "descricaoProduto")]
    pub description: String,

    /// Current stock level. The only field a movement changes.
    #[serde(rename = "estoque")]
    pub current_stock: i64,
}

/// Root object of `estoque.json`.
///
/// Always rewritten as a whole; products keep their on-disk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(rename = "estoque")]
    pub products: Vec<Product>,
}

impl InventorySnapshot {
    /// Finds a product by code.
    pub fn find(&self, product_code: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.product_code == product_code)
    }

    /// Finds a product by code for mutation.
    pub fn find_mut(&mut self, product_code: i64) -> Option<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.product_code == product_code)
    }
}

// =============================================================================
// Movement Type
// =============================================================================

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MovementType {
    /// Goods received; stock goes up.
    #[serde(rename = "ENTRADA")]
    Entry,
    /// Goods shipped or consumed; stock goes down, never below zero.
    #[serde(rename = "SAIDA")]
    Exit,
}

impl MovementType {
    /// Wire names accepted by [`FromStr`].
    pub const WIRE_NAMES: [&'static str; 2] = ["ENTRADA", "SAIDA"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Entry => "ENTRADA",
            MovementType::Exit => "SAIDA",
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = ValidationError;

    /// Parses the wire name. Matching is exact: the stored history and
    /// the front end both use upper-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENTRADA" => Ok(MovementType::Entry),
            "SAIDA" => Ok(MovementType::Exit),
            _ => Err(ValidationError::NotAllowed {
                field: "tipo".to_string(),
                allowed: Self::WIRE_NAMES.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Movement Request
// =============================================================================

/// A request to move stock in or out of one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRequest {
    pub product_code: i64,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub note: String,
}

// =============================================================================
// Movement
// =============================================================================

/// A recorded stock movement. Immutable once created.
///
/// Uses the snapshot pattern: the product description is frozen at the time
/// of the movement so history stays readable after a product is renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Movement {
    /// Monotonic id, unique for the lifetime of the history file.
    pub id: i64,

    #[serde(rename = "codigoProduto")]
    pub product_code: i64,

    /// Product description at time of movement (frozen).
    #[serde(rename = "descricaoProduto")]
    pub product_description: String,

    #[serde(rename = "tipo")]
    pub movement_type: MovementType,

    #[serde(rename = "quantidade")]
    pub quantity: i64,

    /// Free-text note entered by the operator.
    #[serde(rename = "descricao")]
    pub note: String,

    #[serde(rename = "estoqueAnterior")]
    pub stock_before: i64,

    #[serde(rename = "estoqueFinal")]
    pub stock_after: i64,

    #[serde(rename = "dataHora")]
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    /// Builds the movement record for an applied stock change.
    pub fn record(
        id: i64,
        change: &StockChange,
        request: &MovementRequest,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Movement {
            id,
            product_code: change.product_code,
            product_description: change.product_description.clone(),
            movement_type: request.movement_type,
            quantity: request.quantity,
            note: request.note.clone(),
            stock_before: change.stock_before,
            stock_after: change.stock_after,
            timestamp,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
