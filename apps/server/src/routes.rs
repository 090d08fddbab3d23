//! # Router
//!
//! Route table and middleware.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, commission, inventory, movement};
use crate::state::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/comissoes", get(commission::get_commissions))
        .route("/api/estoque", get(inventory::get_inventory))
        .route(
            "/api/movimentacoes",
            get(movement::list_movements).post(movement::create_movement),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Route Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tally_store::{DataStore, StoreConfig};
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    const SALES: &str = r#"{"vendas": [
        {"vendedor": "B", "valor": 600},
        {"vendedor": "A", "valor": 50},
        {"vendedor": "A", "valor": 150}
    ]}"#;

    const INVENTORY: &str = r#"{"estoque": [
        {"codigoProduto": 1, "descricaoProduto": "Caneta Azul", "estoque": 10},
        {"codigoProduto": 2, "descricaoProduto": "Caderno", "estoque": 3}
    ]}"#;

    async fn create_test_app() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("vendas.json"), SALES).unwrap();
        std::fs::write(dir.path().join("estoque.json"), INVENTORY).unwrap();

        let state = AppState::open(DataStore::new(StoreConfig::new(dir.path()))).await;
        (dir, build_router(state))
    }

    async fn get(app: &Router, uri: &str) -> Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: &Router, uri: &str, body: String) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (_dir, app) = create_test_app().await;
        let response = get(&app, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_commissions_endpoint() {
        let (_dir, app) = create_test_app().await;
        let response = get(&app, "/api/comissoes").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json[0]["vendedor"], "A");
        assert_eq!(json[0]["totalVendas"], 200.0);
        assert_eq!(json[0]["totalComissao"], 1.5);
        assert_eq!(json[0]["qtdVendas"], 2);
        assert_eq!(json[1]["vendedor"], "B");
        assert_eq!(json[1]["totalComissao"], 30.0);
        assert_eq!(json[1]["vendasDetalhes"][0]["percentualStr"], "5%");
    }

    #[tokio::test]
    async fn test_commissions_use_exact_amounts() {
        let (dir, app) = create_test_app().await;
        std::fs::write(
            dir.path().join("vendas.json"),
            r#"{"vendas": [
                {"vendedor": "A", "valor": 99.999},
                {"vendedor": "B", "valor": 123.45},
                {"vendedor": "C", "valor": 499.999}
            ]}"#,
        )
        .unwrap();

        let json = body_json(get(&app, "/api/comissoes").await).await;
        assert_eq!(json[0]["totalComissao"], 0.0);
        assert_eq!(json[0]["vendasDetalhes"][0]["percentualStr"], "0%");
        assert_eq!(json[1]["totalComissao"], 1.2345);
        assert_eq!(json[2]["vendasDetalhes"][0]["percentualStr"], "1%");
        assert_eq!(json[2]["totalComissao"], 4.99999);
    }

    #[tokio::test]
    async fn test_commissions_out_of_range_amount_is_500() {
        let (dir, app) = create_test_app().await;
        std::fs::write(
            dir.path().join("vendas.json"),
            r#"{"vendas": [{"vendedor": "A", "valor": 1e30}]}"#,
        )
        .unwrap();

        let response = get(&app, "/api/comissoes").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["code"], "STORAGE_ERROR");
    }

    #[tokio::test]
    async fn test_commissions_missing_file_is_500() {
        let (dir, app) = create_test_app().await;
        std::fs::remove_file(dir.path().join("vendas.json")).unwrap();

        let response = get(&app, "/api/comissoes").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["code"], "STORAGE_ERROR");
    }

    #[tokio::test]
    async fn test_inventory_endpoint() {
        let (_dir, app) = create_test_app().await;
        let response = get(&app, "/api/estoque").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json[0]["codigoProduto"], 1);
        assert_eq!(json[0]["estoque"], 10);
        assert_eq!(json[1]["descricaoProduto"], "Caderno");
    }

    #[tokio::test]
    async fn test_movement_flow() {
        let (_dir, app) = create_test_app().await;

        let response = get(&app, "/api/movimentacoes").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));

        let body = json!({"codigoProduto": 1, "tipo": "ENTRADA", "quantidade": 5, "descricao": "Compra"});
        let response = post_json(&app, "/api/movimentacoes", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let created = body_json(response).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["tipo"], "ENTRADA");
        assert_eq!(created["estoqueAnterior"], 10);
        assert_eq!(created["estoqueFinal"], 15);
        assert_eq!(created["descricaoProduto"], "Caneta Azul");
        assert!(created["dataHora"].as_str().unwrap().parse::<chrono::DateTime<chrono::Utc>>().is_ok());

        let inventory = body_json(get(&app, "/api/estoque").await).await;
        assert_eq!(inventory[0]["estoque"], 15);

        let history = body_json(get(&app, "/api/movimentacoes").await).await;
        assert_eq!(history.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insufficient_stock_is_422() {
        let (_dir, app) = create_test_app().await;
        let body = json!({"codigoProduto": 2, "tipo": "SAIDA", "quantidade": 4});

        let response = post_json(&app, "/api/movimentacoes", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["code"], "INSUFFICIENT_STOCK");

        let inventory = body_json(get(&app, "/api/estoque").await).await;
        assert_eq!(inventory[1]["estoque"], 3);
    }

    #[tokio::test]
    async fn test_unknown_product_is_404() {
        let (_dir, app) = create_test_app().await;
        let body = json!({"codigoProduto": 99, "tipo": "ENTRADA", "quantidade": 1});

        let response = post_json(&app, "/api/movimentacoes", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_invalid_bodies_are_400() {
        let (_dir, app) = create_test_app().await;

        let cases = [
            "{ not json".to_string(),
            json!({"codigoProduto": "um", "tipo": "ENTRADA", "quantidade": 1}).to_string(),
            json!({"codigoProduto": 1, "tipo": "AJUSTE", "quantidade": 1}).to_string(),
            json!({"codigoProduto": 1, "tipo": "ENTRADA", "quantidade": 0}).to_string(),
            json!({"codigoProduto": 1, "tipo": "ENTRADA", "quantidade": 1, "descricao": "x".repeat(501)})
                .to_string(),
        ];

        for body in cases {
            let response = post_json(&app, "/api/movimentacoes", body.clone()).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
        }

        let history = body_json(get(&app, "/api/movimentacoes").await).await;
        assert_eq!(history, json!([]));
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let (_dir, app) = create_test_app().await;
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/movimentacoes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
