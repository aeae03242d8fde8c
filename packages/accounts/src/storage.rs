// ABOUTME: Profile storage layer using SQLite
// ABOUTME: Reads users and their per-rule solve-status blobs

use sqlx::{Row, SqlitePool};
use tracing::debug;

use arbiter_storage::{Result, StorageError};

use super::types::{StatusBlob, User, UserProfile};

pub struct ProfileStorage {
    pool: SqlitePool,
}

impl ProfileStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        debug!("Fetching user: {}", user_id);

        let row = sqlx::query("SELECT id, username, is_admin FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from_fetch)?;

        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            is_admin: row.try_get::<i64, _>("is_admin")? != 0,
        })
    }

    /// Profile lookup for request decoration; absent profiles are the
    /// anonymous normal path, not an error
    pub async fn find_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        debug!("Fetching profile: {}", user_id);

        let row = sqlx::query(
            r#"
            SELECT user_id, acm_problems_status, oi_problems_status
            FROM user_profiles
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        row.map(|row| self.row_to_profile(&row)).transpose()
    }

    fn row_to_profile(&self, row: &sqlx::sqlite::SqliteRow) -> Result<UserProfile> {
        let acm: String = row.try_get("acm_problems_status")?;
        let oi: String = row.try_get("oi_problems_status")?;

        Ok(UserProfile {
            user_id: row.try_get("user_id")?,
            acm_problems_status: serde_json::from_str::<StatusBlob>(&acm)?,
            oi_problems_status: serde_json::from_str::<StatusBlob>(&oi)?,
        })
    }
}
