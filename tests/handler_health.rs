mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use tinylink::api::handlers::health_handler;

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[sqlx::test]
async fn test_health_endpoint_closed_pool(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
