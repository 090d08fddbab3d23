//! Commission report handler.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::dto::CommissionReportDto;
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/comissoes`
pub async fn get_commissions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CommissionReportDto>>> {
    let report = state.store.commission_report().await?;
    debug!(salespeople = report.len(), "Serving commission report");
    Ok(Json(report.into_iter().map(CommissionReportDto::from).collect()))
}
