//! # Validation Module
//!
//! Input validation for stock movement requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum Json)                                   │
//! │  └── Shape and types (codigoProduto is an integer, ...)                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── tipo is ENTRADA or SAIDA                                          │
//! │  ├── quantidade > 0                                                    │
//! │  └── descricao within MAX_NOTE_LENGTH                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger (under lock)                                          │
//! │  ├── product exists                                                    │
//! │  └── stock never goes negative                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Layers 1 and 2 run before the ledger lock is taken, so a bad request
//! never waits behind a write.

use crate::error::ValidationError;
use crate::types::{MovementRequest, MovementType};
use crate::MAX_NOTE_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a movement quantity.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-3).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantidade".to_string(),
        });
    }

    Ok(())
}

/// Validates the free-text note. Empty is fine.
///
/// Length is counted in characters, not bytes, so accented notes get the
/// same budget as plain ASCII ones.
pub fn validate_note(note: &str) -> ValidationResult<()> {
    if note.chars().count() > MAX_NOTE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "descricao".to_string(),
            max: MAX_NOTE_LENGTH,
        });
    }

    Ok(())
}

/// Parses the movement type from its wire name.
pub fn parse_movement_type(tipo: &str) -> ValidationResult<MovementType> {
    tipo.parse()
}

/// Validates every field of a movement request.
pub fn validate_movement_request(request: &MovementRequest) -> ValidationResult<()> {
    validate_quantity(request.quantity)?;
    validate_note(&request.note)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
