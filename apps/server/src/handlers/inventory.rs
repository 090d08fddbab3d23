//! Inventory snapshot handler.

use axum::extract::State;
use axum::Json;
use tally_core::Product;

use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/estoque`
///
/// Reads the file on every call; no lock, the file is replaced atomically.
pub async fn get_inventory(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.ledger.current_inventory().await?;
    Ok(Json(products))
}
