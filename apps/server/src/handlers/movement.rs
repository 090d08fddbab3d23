//! Movement history and movement creation handlers.
//!
//! ## User Workflow
//! ```text
//! POST /api/movimentacoes {codigoProduto, tipo, quantidade, descricao}
//!      │
//!      ▼  Json extractor        → 400 on malformed body
//!      ▼  tipo parse            → 400 on unknown kind
//!      ▼  ledger.apply_movement → 400 / 404 / 422 / 500
//!      ▼
//! 200 + created Movement
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tally_core::{Movement, MovementRequest};
use tracing::info;

use crate::dto::CreateMovementRequest;
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/movimentacoes`
pub async fn list_movements(State(state): State<AppState>) -> Json<Vec<Movement>> {
    Json(state.ledger.list_movements().await)
}

/// `POST /api/movimentacoes`
pub async fn create_movement(
    State(state): State<AppState>,
    body: Result<Json<CreateMovementRequest>, JsonRejection>,
) -> ApiResult<Json<Movement>> {
    let Json(body) = body?;
    let request = MovementRequest::try_from(body)?;

    let movement = state.ledger.apply_movement(request).await?;
    info!(
        id = movement.id,
        product_code = movement.product_code,
        tipo = %movement.movement_type,
        quantity = movement.quantity,
        "Movement applied"
    );

    Ok(Json(movement))
}
