// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Tag listing, get-or-create, usage counters, and affinity aggregates

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use arbiter_storage::{datetime, escape_like, Result, StorageError};

use super::types::{ProblemTag, TagWithCount};

pub struct TagStorage {
    pool: SqlitePool,
}

/// "?, ?, ?" for IN clauses; SQLite has no array binds
fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List tags attached to at least one problem, with their problem counts.
    /// `keyword` filters by case-insensitive name substring.
    pub async fn list_tags(&self, keyword: Option<&str>) -> Result<Vec<TagWithCount>> {
        debug!("Listing tags (keyword: {:?})", keyword);

        let mut query_str = String::from(
            r#"
            SELECT t.id, t.name, COUNT(s.problem_id) AS problem_count
            FROM problem_tags t
            JOIN problem_tag_ships s ON s.tag_id = t.id
            "#,
        );
        if keyword.is_some() {
            query_str.push_str(" WHERE t.name LIKE ? ESCAPE '\\' ");
        }
        query_str.push_str(" GROUP BY t.id, t.name ORDER BY t.name ");

        let mut query = sqlx::query(&query_str);
        if let Some(kw) = keyword {
            query = query.bind(format!("%{}%", escape_like(kw)));
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter()
            .map(|row| {
                Ok(TagWithCount {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    problem_count: row.try_get("problem_count")?,
                })
            })
            .collect()
    }

    pub async fn get_tag_by_name(&self, name: &str) -> Result<Option<ProblemTag>> {
        let row = sqlx::query("SELECT id, name, created_at FROM problem_tags WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.map(|row| row_to_tag(&row)).transpose()
    }

    /// Find a tag by name or create it
    pub async fn get_or_create(&self, name: &str) -> Result<ProblemTag> {
        if let Some(tag) = self.get_tag_by_name(name).await? {
            return Ok(tag);
        }

        debug!("Creating tag: {}", name);

        // OR IGNORE keeps concurrent creators from racing the unique index
        sqlx::query("INSERT OR IGNORE INTO problem_tags (name, created_at) VALUES (?, ?)")
            .bind(name)
            .bind(datetime::format_utc(Utc::now()))
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        self.get_tag_by_name(name)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Get-or-create the problem/tag association and bump its usage counter
    pub async fn attach_tag(&self, problem_id: i64, tag_id: i64) -> Result<i64> {
        debug!("Attaching tag {} to problem {}", tag_id, problem_id);

        sqlx::query(
            r#"
            INSERT INTO problem_tag_ships (problem_id, tag_id, tagged_number)
            VALUES (?, ?, 0)
            ON CONFLICT (problem_id, tag_id) DO NOTHING
            "#,
        )
        .bind(problem_id)
        .bind(tag_id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        sqlx::query(
            r#"
            UPDATE problem_tag_ships
            SET tagged_number = tagged_number + 1
            WHERE problem_id = ? AND tag_id = ?
            "#,
        )
        .bind(problem_id)
        .bind(tag_id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let count: i64 = sqlx::query_scalar(
            "SELECT tagged_number FROM problem_tag_ships WHERE problem_id = ? AND tag_id = ?",
        )
        .bind(problem_id)
        .bind(tag_id)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::from_fetch)?;

        Ok(count)
    }

    /// Largest usage counter per problem, for the given problems.
    /// Untagged problems are simply absent from the map.
    pub async fn max_tagged_numbers(&self, problem_ids: &[i64]) -> Result<HashMap<i64, i64>> {
        if problem_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query_str = format!(
            r#"
            SELECT problem_id, MAX(tagged_number) AS max_tagged
            FROM problem_tag_ships
            WHERE problem_id IN ({})
            GROUP BY problem_id
            "#,
            placeholders(problem_ids.len())
        );

        let mut query = sqlx::query(&query_str);
        for id in problem_ids {
            query = query.bind(id);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let mut map = HashMap::new();
        for row in rows {
            map.insert(row.try_get("problem_id")?, row.try_get("max_tagged")?);
        }
        Ok(map)
    }

    /// Total usage counter across all problems, per tag name
    pub async fn tag_user_totals(&self, tag_names: &[String]) -> Result<HashMap<String, i64>> {
        if tag_names.is_empty() {
            return Ok(HashMap::new());
        }

        let query_str = format!(
            r#"
            SELECT t.name, SUM(s.tagged_number) AS total
            FROM problem_tag_ships s
            JOIN problem_tags t ON t.id = s.tag_id
            WHERE t.name IN ({})
            GROUP BY t.name
            "#,
            placeholders(tag_names.len())
        );

        let mut query = sqlx::query(&query_str);
        for name in tag_names {
            query = query.bind(name);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let mut map = HashMap::new();
        for row in rows {
            map.insert(row.try_get("name")?, row.try_get("total")?);
        }
        Ok(map)
    }

    /// Usage counter per (problem, tag name) pair, for the given problems
    /// and tag names
    pub async fn tagged_numbers(
        &self,
        problem_ids: &[i64],
        tag_names: &[String],
    ) -> Result<HashMap<(i64, String), i64>> {
        if problem_ids.is_empty() || tag_names.is_empty() {
            return Ok(HashMap::new());
        }

        let query_str = format!(
            r#"
            SELECT s.problem_id, t.name, s.tagged_number
            FROM problem_tag_ships s
            JOIN problem_tags t ON t.id = s.tag_id
            WHERE s.problem_id IN ({}) AND t.name IN ({})
            "#,
            placeholders(problem_ids.len()),
            placeholders(tag_names.len())
        );

        let mut query = sqlx::query(&query_str);
        for id in problem_ids {
            query = query.bind(id);
        }
        for name in tag_names {
            query = query.bind(name);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let mut map = HashMap::new();
        for row in rows {
            let problem_id: i64 = row.try_get("problem_id")?;
            let name: String = row.try_get("name")?;
            map.insert((problem_id, name), row.try_get("tagged_number")?);
        }
        Ok(map)
    }

    /// Tag names attached to a problem, for serialization
    pub async fn names_for_problem(&self, problem_id: i64) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT t.name
            FROM problem_tag_ships s
            JOIN problem_tags t ON t.id = s.tag_id
            WHERE s.problem_id = ?
            ORDER BY t.name
            "#,
        )
        .bind(problem_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        rows.iter()
            .map(|row| row.try_get("name").map_err(StorageError::Sqlx))
            .collect()
    }
}

fn row_to_tag(row: &sqlx::sqlite::SqliteRow) -> Result<ProblemTag> {
    let created_at: String = row.try_get("created_at")?;
    Ok(ProblemTag {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        created_at: datetime::parse_utc(&created_at)?,
    })
}
