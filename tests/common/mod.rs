#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use tinylink::application::services::UrlService;
use tinylink::infrastructure::persistence::{SqliteIdAllocator, SqliteUrlRepository};
use tinylink::state::{AppState, SqliteUrlService};

pub const TEST_BASE_URL: &str = "http://sho.rt";

pub fn create_service(pool: SqlitePool) -> SqliteUrlService {
    let pool = Arc::new(pool);

    UrlService::new(
        Arc::new(SqliteUrlRepository::new(pool.clone())),
        Arc::new(SqliteIdAllocator::new(pool)),
    )
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_service(pool)), TEST_BASE_URL)
}

pub async fn create_test_url(pool: &SqlitePool, id: i64, code: &str, url: &str, created_at: &str) {
    sqlx::query(
        "INSERT INTO urls (id, original_url, short_code, created_at, click_count) VALUES (?1, ?2, ?3, ?4, 0)",
    )
    .bind(id)
    .bind(url)
    .bind(code)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn url_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
