// ABOUTME: Integration tests for contest storage
// ABOUTME: Row mapping and not-found behavior

use arbiter_contests::ContestStorage;
use arbiter_core::ContestRuleType;
use arbiter_storage::StorageError;
use sqlx::SqlitePool;

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();

    sqlx::query(
        r#"
        CREATE TABLE contests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            rule_type TEXT NOT NULL,
            real_time_rank INTEGER NOT NULL DEFAULT 1,
            visible INTEGER NOT NULL DEFAULT 1,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL,
            created_by TEXT NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

#[tokio::test]
async fn test_get_contest_maps_row() {
    let pool = create_test_db().await;

    sqlx::query(
        r#"
        INSERT INTO contests (title, rule_type, real_time_rank, visible, start_time, end_time, created_by)
        VALUES ('Spring Open', 'OI', 0, 1, '2026-03-01T09:00:00+00:00', '2026-03-01 14:00:00', 'setter')
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    let storage = ContestStorage::new(pool);
    let contest = storage.get_contest(1).await.unwrap();

    assert_eq!(contest.title, "Spring Open");
    assert_eq!(contest.rule_type, ContestRuleType::Oi);
    assert!(!contest.real_time_rank);
    assert!(contest.visible);
    // Both timestamp formats parse
    assert_eq!(contest.end_time.timestamp() - contest.start_time.timestamp(), 5 * 3600);
}

#[tokio::test]
async fn test_get_contest_missing_is_not_found() {
    let pool = create_test_db().await;
    let storage = ContestStorage::new(pool);

    let err = storage.get_contest(42).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}
