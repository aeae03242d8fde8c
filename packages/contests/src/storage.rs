// ABOUTME: Contest storage layer using SQLite
// ABOUTME: Lookup only; contest administration lives elsewhere

use sqlx::{Row, SqlitePool};
use tracing::debug;

use arbiter_core::ContestRuleType;
use arbiter_storage::{datetime, Result, StorageError};

use super::types::Contest;

pub struct ContestStorage {
    pool: SqlitePool,
}

impl ContestStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_contest(&self, contest_id: i64) -> Result<Contest> {
        debug!("Fetching contest: {}", contest_id);

        let row = sqlx::query(
            r#"
            SELECT id, title, rule_type, real_time_rank, visible,
                   start_time, end_time, created_by
            FROM contests
            WHERE id = ?
            "#,
        )
        .bind(contest_id)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::from_fetch)?;

        row_to_contest(&row)
    }
}

fn row_to_contest(row: &sqlx::sqlite::SqliteRow) -> Result<Contest> {
    let rule_type: String = row.try_get("rule_type")?;
    let start_time: String = row.try_get("start_time")?;
    let end_time: String = row.try_get("end_time")?;

    Ok(Contest {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        rule_type: ContestRuleType::parse(&rule_type)
            .ok_or_else(|| StorageError::InvalidInput(format!("unknown rule type: {rule_type}")))?,
        real_time_rank: row.try_get::<i64, _>("real_time_rank")? != 0,
        visible: row.try_get::<i64, _>("visible")? != 0,
        start_time: datetime::parse_utc(&start_time)?,
        end_time: datetime::parse_utc(&end_time)?,
        created_by: row.try_get("created_by")?,
    })
}
