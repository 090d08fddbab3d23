//! # HTTP Handlers
//!
//! ## Available Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Commissions                                                           │
//! │  └── GET  /api/comissoes       → commission report, sorted by name     │
//! │                                                                         │
//! │  Inventory                                                             │
//! │  ├── GET  /api/estoque         → products, on-disk order               │
//! │  ├── GET  /api/movimentacoes   → movement history, oldest first        │
//! │  └── POST /api/movimentacoes   → apply a movement                      │
//! │                                                                         │
//! │  Ops                                                                    │
//! │  └── GET  /health              → "OK"                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commission;
pub mod inventory;
pub mod movement;

use axum::response::IntoResponse;

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    "OK"
}
