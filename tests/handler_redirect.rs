mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use tinylink::api::handlers::redirect_handler;

fn server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_url(
        &pool,
        123,
        "1Z",
        "https://example.com/target",
        "2024-01-15T10:30:00+00:00",
    )
    .await;

    let response = server(pool).get("/1Z").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_counts_click(pool: SqlitePool) {
    common::create_test_url(
        &pool,
        1,
        "1",
        "https://example.com",
        "2024-01-15T10:30:00+00:00",
    )
    .await;

    let server = server(pool.clone());
    server.get("/1").await;
    server.get("/1").await;

    assert_eq!(common::click_count(&pool, "1").await, 2);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let response = server(pool).get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_non_canonical_code(pool: SqlitePool) {
    common::create_test_url(
        &pool,
        1,
        "1",
        "https://example.com",
        "2024-01-15T10:30:00+00:00",
    )
    .await;

    let server = server(pool.clone());

    server.get("/01").await.assert_status_not_found();
    server.get("/a-b").await.assert_status_not_found();

    assert_eq!(common::click_count(&pool, "1").await, 0);
}
