mod common;

use sqlx::SqlitePool;
use tinylink::infrastructure::persistence::migrate;

async fn create_legacy_table(pool: &SqlitePool) {
    sqlx::query(
        r#"
        CREATE TABLE urls (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            original_url TEXT NOT NULL,
            short_code TEXT UNIQUE NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            click_count INTEGER DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await
    .unwrap();

    for (id, code, url) in [
        (1, "1", "https://a.example/"),
        (2, "2", "https://b.example/"),
        (3, "3", "https://c.example/"),
    ] {
        sqlx::query(
            "INSERT INTO urls (id, original_url, short_code, created_at) VALUES (?1, ?2, ?3, '2024-01-15 10:30:00')",
        )
        .bind(id)
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
    }
}

#[sqlx::test(migrations = false)]
async fn test_sequence_starts_after_existing_rows(pool: SqlitePool) {
    create_legacy_table(&pool).await;
    migrate(&pool).await.unwrap();

    let last_id: i64 = sqlx::query_scalar("SELECT value FROM url_id_sequence WHERE name = 'urls'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(last_id, 3);

    let service = common::create_service(pool.clone());

    assert_eq!(service.shorten("https://d.example/").await.unwrap(), "4");
    assert_eq!(service.shorten("https://b.example/").await.unwrap(), "2");
    assert_eq!(common::url_count(&pool).await, 4);
}

#[sqlx::test(migrations = false)]
async fn test_sequence_starts_at_zero_on_fresh_file(pool: SqlitePool) {
    migrate(&pool).await.unwrap();

    let service = common::create_service(pool);

    assert_eq!(service.shorten("https://example.com").await.unwrap(), "1");
}
