mod common;

use sqlx::SqlitePool;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;

#[sqlx::test]
async fn test_end_to_end_first_code(pool: SqlitePool) {
    let service = common::create_service(pool);

    let code = service.shorten("https://example.com").await.unwrap();
    assert_eq!(code, "1");

    let url = service.expand("1").await.unwrap();
    assert_eq!(url, "https://example.com");

    let stats = service.stats("1").await.unwrap();
    assert_eq!(stats.original_url, "https://example.com");
    assert_eq!(stats.click_count, 1);
}

#[sqlx::test]
async fn test_shorten_is_idempotent(pool: SqlitePool) {
    let service = common::create_service(pool.clone());

    let first = service.shorten("https://a.example/x").await.unwrap();
    for _ in 0..5 {
        assert_eq!(service.shorten("https://a.example/x").await.unwrap(), first);
    }

    assert_eq!(common::url_count(&pool).await, 1);
}

#[sqlx::test]
async fn test_concurrent_shorten_yields_one_record(pool: SqlitePool) {
    let service = Arc::new(common::create_service(pool.clone()));

    let mut tasks = JoinSet::new();
    for _ in 0..16 {
        let service = service.clone();
        tasks.spawn(async move { service.shorten("https://a.example/x").await.unwrap() });
    }

    let codes: HashSet<String> = tasks.join_all().await.into_iter().collect();

    assert_eq!(codes.len(), 1);
    assert_eq!(common::url_count(&pool).await, 1);
}

#[sqlx::test]
async fn test_distinct_urls_get_distinct_codes(pool: SqlitePool) {
    let service = common::create_service(pool);

    let a = service.shorten("https://a.example/").await.unwrap();
    let b = service.shorten("https://b.example/").await.unwrap();

    assert_ne!(a, b);
    assert_eq!(a, "1");
    assert_eq!(b, "2");
}

#[sqlx::test]
async fn test_concurrent_distinct_urls(pool: SqlitePool) {
    let service = Arc::new(common::create_service(pool.clone()));

    let mut tasks = JoinSet::new();
    for i in 0..10 {
        let service = service.clone();
        tasks.spawn(async move {
            service
                .shorten(&format!("https://example.com/{}", i))
                .await
                .unwrap()
        });
    }

    let codes: HashSet<String> = tasks.join_all().await.into_iter().collect();

    assert_eq!(codes.len(), 10);
    assert_eq!(common::url_count(&pool).await, 10);
}

#[sqlx::test]
async fn test_concurrent_expands_are_all_counted(pool: SqlitePool) {
    let service = Arc::new(common::create_service(pool));
    let code = service.shorten("https://example.com").await.unwrap();

    let mut tasks = JoinSet::new();
    for _ in 0..25 {
        let service = service.clone();
        let code = code.clone();
        tasks.spawn(async move { service.expand(&code).await.unwrap() });
    }

    for url in tasks.join_all().await {
        assert_eq!(url, "https://example.com");
    }

    assert_eq!(service.stats(&code).await.unwrap().click_count, 25);
}

#[sqlx::test]
async fn test_unknown_code_is_not_found_and_mutates_nothing(pool: SqlitePool) {
    let service = common::create_service(pool.clone());
    let code = service.shorten("https://example.com").await.unwrap();

    assert!(service.expand("doesNotExist").await.unwrap_err().is_not_found());
    assert!(service.stats("doesNotExist").await.unwrap_err().is_not_found());

    assert_eq!(common::url_count(&pool).await, 1);
    assert_eq!(common::click_count(&pool, &code).await, 0);
}

#[sqlx::test]
async fn test_stats_is_read_only(pool: SqlitePool) {
    let service = common::create_service(pool);
    let code = service.shorten("https://example.com").await.unwrap();

    service.stats(&code).await.unwrap();
    service.stats(&code).await.unwrap();

    assert_eq!(service.stats(&code).await.unwrap().click_count, 0);
}

#[sqlx::test]
async fn test_list_all_is_newest_first(pool: SqlitePool) {
    let service = common::create_service(pool);

    service.shorten("https://u1.example/").await.unwrap();
    service.shorten("https://u2.example/").await.unwrap();
    service.shorten("https://u3.example/").await.unwrap();

    let urls: Vec<String> = service
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.original_url)
        .collect();

    assert_eq!(
        urls,
        vec![
            "https://u3.example/",
            "https://u2.example/",
            "https://u1.example/"
        ]
    );
}

#[sqlx::test]
async fn test_list_all_empty(pool: SqlitePool) {
    let service = common::create_service(pool);

    assert!(service.list_all().await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_shorten_skips_ids_already_taken(pool: SqlitePool) {
    common::create_test_url(
        &pool,
        1,
        "1",
        "https://old.example/",
        "2024-01-15T10:30:00+00:00",
    )
    .await;

    let service = common::create_service(pool.clone());

    let code = service.shorten("https://new.example/").await.unwrap();

    assert_eq!(code, "2");
    assert_eq!(service.expand("2").await.unwrap(), "https://new.example/");
    assert_eq!(common::url_count(&pool).await, 2);
}
