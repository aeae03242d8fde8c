// ABOUTME: Integration tests for problem storage
// ABOUTME: Catalogue scoping, filters, random pick, and contest queries

use arbiter_problems::{DbState, ProblemFilter, ProblemStorage};
use arbiter_storage::StorageError;
use sqlx::SqlitePool;

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    DbState::migrate(&pool).await.unwrap();

    sqlx::query("INSERT INTO users (id, username) VALUES ('setter', 'setter')")
        .execute(&pool)
        .await
        .unwrap();

    pool
}

async fn seed_problem(
    pool: &SqlitePool,
    display_id: &str,
    title: &str,
    difficulty: &str,
    visible: bool,
    contest_id: Option<i64>,
) -> i64 {
    let result = sqlx::query(
        r#"
        INSERT INTO problems
            (display_id, title, difficulty, rule_type, visible, contest_id, created_by)
        VALUES (?, ?, ?, 'ACM', ?, ?, 'setter')
        "#,
    )
    .bind(display_id)
    .bind(title)
    .bind(difficulty)
    .bind(visible as i64)
    .bind(contest_id)
    .execute(pool)
    .await
    .unwrap();

    result.last_insert_rowid()
}

async fn seed_contest(pool: &SqlitePool) -> i64 {
    sqlx::query(
        r#"
        INSERT INTO contests (title, rule_type, start_time, end_time, created_by)
        VALUES ('Round 1', 'ACM', '2026-01-01T00:00:00+00:00', '2026-01-01T05:00:00+00:00', 'setter')
        "#,
    )
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

#[tokio::test]
async fn test_catalogue_excludes_hidden_and_contest_problems() {
    let pool = create_test_db().await;
    let contest = seed_contest(&pool).await;
    seed_problem(&pool, "1001", "Two Sum", "Low", true, None).await;
    seed_problem(&pool, "1002", "Hidden Gem", "Low", false, None).await;
    seed_problem(&pool, "A", "Contest Only", "Low", true, Some(contest)).await;

    let storage = ProblemStorage::new(pool);
    let problems = storage.list_catalogue(&ProblemFilter::default()).await.unwrap();

    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].display_id, "1001");
}

#[tokio::test]
async fn test_catalogue_keyword_matches_title_or_display_id() {
    let pool = create_test_db().await;
    seed_problem(&pool, "1001", "Shortest Path", "Mid", true, None).await;
    seed_problem(&pool, "1002", "Matrix Power", "Mid", true, None).await;
    seed_problem(&pool, "PATH-3", "Unrelated", "Mid", true, None).await;

    let storage = ProblemStorage::new(pool);

    let filter = ProblemFilter {
        keyword: Some("path".to_string()),
        difficulty: None,
    };
    let problems = storage.list_catalogue(&filter).await.unwrap();
    let ids: Vec<_> = problems.iter().map(|p| p.display_id.as_str()).collect();
    assert_eq!(ids, vec!["1001", "PATH-3"]);
}

#[tokio::test]
async fn test_catalogue_keyword_wildcards_match_literally() {
    let pool = create_test_db().await;
    seed_problem(&pool, "1001", "Two Sum", "Low", true, None).await;
    seed_problem(&pool, "1002", "Graph Walk", "Low", true, None).await;
    seed_problem(&pool, "1003", "100% Accuracy", "Low", true, None).await;
    seed_problem(&pool, "a_b", "Underscore Trick", "Low", true, None).await;

    let storage = ProblemStorage::new(pool);

    // A bare wildcard keyword must not match the whole catalogue
    let filter = ProblemFilter {
        keyword: Some("%".to_string()),
        difficulty: None,
    };
    let problems = storage.list_catalogue(&filter).await.unwrap();
    let ids: Vec<_> = problems.iter().map(|p| p.display_id.as_str()).collect();
    assert_eq!(ids, vec!["1003"]);

    let filter = ProblemFilter {
        keyword: Some("_".to_string()),
        difficulty: None,
    };
    let problems = storage.list_catalogue(&filter).await.unwrap();
    let ids: Vec<_> = problems.iter().map(|p| p.display_id.as_str()).collect();
    assert_eq!(ids, vec!["a_b"]);
}

#[tokio::test]
async fn test_catalogue_difficulty_filter() {
    let pool = create_test_db().await;
    seed_problem(&pool, "1001", "Easy One", "Low", true, None).await;
    seed_problem(&pool, "1002", "Hard One", "High", true, None).await;

    let storage = ProblemStorage::new(pool);

    let filter = ProblemFilter {
        keyword: None,
        difficulty: Some(arbiter_core::Difficulty::High),
    };
    let problems = storage.list_catalogue(&filter).await.unwrap();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].title, "Hard One");
}

#[tokio::test]
async fn test_detail_lookup_scoped_to_visible_catalogue() {
    let pool = create_test_db().await;
    let contest = seed_contest(&pool).await;
    seed_problem(&pool, "1001", "Visible", "Low", true, None).await;
    seed_problem(&pool, "1002", "Hidden", "Low", false, None).await;
    seed_problem(&pool, "A", "In Contest", "Low", true, Some(contest)).await;

    let storage = ProblemStorage::new(pool);

    assert!(storage.get_catalogue_problem("1001").await.is_ok());
    for display_id in ["1002", "A", "9999"] {
        let err = storage.get_catalogue_problem(display_id).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}

#[tokio::test]
async fn test_pick_random_errors_on_empty_catalogue() {
    let pool = create_test_db().await;
    let contest = seed_contest(&pool).await;
    // Contest-only and hidden problems are not eligible
    seed_problem(&pool, "A", "In Contest", "Low", true, Some(contest)).await;
    seed_problem(&pool, "1001", "Hidden", "Low", false, None).await;

    let storage = ProblemStorage::new(pool);
    let err = storage.pick_random().await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_pick_random_returns_an_eligible_display_id() {
    let pool = create_test_db().await;
    seed_problem(&pool, "1001", "One", "Low", true, None).await;
    seed_problem(&pool, "1002", "Two", "Low", true, None).await;

    let storage = ProblemStorage::new(pool);
    for _ in 0..10 {
        let picked = storage.pick_random().await.unwrap();
        assert!(picked == "1001" || picked == "1002");
    }
}

#[tokio::test]
async fn test_contest_problem_queries() {
    let pool = create_test_db().await;
    let contest = seed_contest(&pool).await;
    seed_problem(&pool, "B", "Second", "Mid", true, Some(contest)).await;
    seed_problem(&pool, "A", "First", "Low", true, Some(contest)).await;
    seed_problem(&pool, "C", "Hidden", "Low", false, Some(contest)).await;
    seed_problem(&pool, "1001", "Catalogue", "Low", true, None).await;

    let storage = ProblemStorage::new(pool);

    let problems = storage.list_contest_problems(contest).await.unwrap();
    let ids: Vec<_> = problems.iter().map(|p| p.display_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);

    assert!(storage.get_contest_problem(contest, "A").await.is_ok());
    // Hidden in contest, catalogue id, and wrong contest all read as missing
    for (cid, display_id) in [(contest, "C"), (contest, "1001"), (contest + 1, "A")] {
        let err = storage.get_contest_problem(cid, display_id).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}

#[tokio::test]
async fn test_update_languages() {
    let pool = create_test_db().await;
    let id = seed_problem(&pool, "1001", "Langs", "Low", true, None).await;

    let storage = ProblemStorage::new(pool);
    storage
        .update_languages(id, &["C++".to_string(), "Rust".to_string()])
        .await
        .unwrap();

    let problem = storage.get_by_id(id).await.unwrap();
    assert_eq!(problem.languages, vec!["C++", "Rust"]);

    let err = storage.update_languages(9999, &[]).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_problem_rows_carry_tag_names() {
    let pool = create_test_db().await;
    let id = seed_problem(&pool, "1001", "Tagged", "Low", true, None).await;

    let tags = arbiter_tags::TagStorage::new(pool.clone());
    let dp = tags.get_or_create("dp").await.unwrap();
    let greedy = tags.get_or_create("greedy").await.unwrap();
    tags.attach_tag(id, dp.id).await.unwrap();
    tags.attach_tag(id, greedy.id).await.unwrap();

    let storage = ProblemStorage::new(pool);
    let problem = storage.get_catalogue_problem("1001").await.unwrap();
    let mut names = problem.tags.clone();
    names.sort();
    assert_eq!(names, vec!["dp", "greedy"]);
}
