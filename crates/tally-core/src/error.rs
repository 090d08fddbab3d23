//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tally-store errors (separate crate)                                   │
//! │  └── StoreError       - File read/write/parse failures                 │
//! │                                                                         │
//! │  tally-server errors (in app)                                          │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised while applying a movement.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this code exists in the inventory snapshot.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// An exit would drive stock below zero.
    ///
    /// ## User Workflow
    /// ```text
    /// POST /api/movimentacoes { codigoProduto: 1, tipo: "SAIDA", quantidade: 20 }
    ///      │
    ///      ▼
    /// Check stock: available=15
    ///      │
    ///      ▼
    /// InsufficientStock { product_code: 1, available: 15, requested: 20 }
    ///      │
    ///      ▼
    /// Nothing written, HTTP 422
    /// ```
    #[error("Insufficient stock for product {product_code}: available {available}, requested {requested}")]
    InsufficientStock {
        product_code: i64,
        available: i64,
        requested: i64,
    },

    /// A salesperson's totals no longer fit in a decimal.
    #[error("Sales totals out of range for salesperson {salesperson}")]
    AmountOutOfRange { salesperson: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
