//! # Stock Module
//!
//! Stock arithmetic for ENTRY/EXIT movements.
//!
//! ## Movement Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ENTRY q:   after = before + q                                          │
//! │  EXIT  q:   after = before - q,  rejected if after < 0                  │
//! │                                                                         │
//! │  Rejection is all-or-nothing: the snapshot is only mutated once the    │
//! │  new level is known to be valid.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{InventorySnapshot, MovementRequest, MovementType};

/// Outcome of applying a movement to one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub product_code: i64,
    /// Description at the time of the change.
    pub product_description: String,
    pub stock_before: i64,
    pub stock_after: i64,
}

/// Computes the stock level after a movement.
///
/// ## Example
/// ```rust
/// use tally_core::stock::next_stock;
/// use tally_core::MovementType;
///
/// assert_eq!(next_stock(1, 10, MovementType::Entry, 5).unwrap(), 15);
/// assert_eq!(next_stock(1, 10, MovementType::Exit, 10).unwrap(), 0);
/// assert!(next_stock(1, 10, MovementType::Exit, 11).is_err());
/// ```
pub fn next_stock(
    product_code: i64,
    current: i64,
    movement_type: MovementType,
    quantity: i64,
) -> CoreResult<i64> {
    match movement_type {
        MovementType::Entry => current.checked_add(quantity).ok_or_else(|| {
            CoreError::Validation(ValidationError::OutOfRange {
                field: "quantidade".to_string(),
                min: 1,
                max: i64::MAX - current,
            })
        }),
        // Overflow only happens when current is already negative
        MovementType::Exit => match current.checked_sub(quantity) {
            Some(after) if after >= 0 => Ok(after),
            _ => Err(CoreError::InsufficientStock {
                product_code,
                available: current,
                requested: quantity,
            }),
        },
    }
}

/// Applies a movement request to an inventory snapshot in place.
///
/// On error the snapshot is left untouched.
pub fn apply_movement(
    snapshot: &mut InventorySnapshot,
    request: &MovementRequest,
) -> CoreResult<StockChange> {
    let product = snapshot
        .find_mut(request.product_code)
        .ok_or(CoreError::ProductNotFound(request.product_code))?;

    let stock_before = product.current_stock;
    let stock_after = next_stock(
        product.product_code,
        stock_before,
        request.movement_type,
        request.quantity,
    )?;

    product.current_stock = stock_after;

    Ok(StockChange {
        product_code: product.product_code,
        product_description: product.description.clone(),
        stock_before,
        stock_after,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
