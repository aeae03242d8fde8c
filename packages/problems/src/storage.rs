// ABOUTME: Problem storage layer using SQLite
// ABOUTME: Catalogue scoping (visible, non-contest), filters, and contest queries

use arbiter_core::{Difficulty, ProblemRuleType};
use rand::Rng;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use arbiter_storage::{datetime, escape_like, Result, StorageError};

use super::types::{Problem, ProblemFilter, Sample};

const PROBLEM_COLUMNS: &str = r#"
    p.id, p.display_id, p.title, p.description, p.input_description,
    p.output_description, p.samples, p.difficulty, p.rule_type, p.languages,
    p.visible, p.contest_id, p.created_by, p.submission_number,
    p.accepted_number, p.statistic_info, p.create_time,
    (SELECT group_concat(t.name, char(31))
     FROM problem_tag_ships s JOIN problem_tags t ON t.id = s.tag_id
     WHERE s.problem_id = p.id) AS tag_names
"#;

pub struct ProblemStorage {
    pool: SqlitePool,
}

impl ProblemStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Visible, non-contest problems matching the filter, ordered by
    /// creation time
    pub async fn list_catalogue(&self, filter: &ProblemFilter) -> Result<Vec<Problem>> {
        debug!(
            "Listing catalogue (keyword: {:?}, difficulty: {:?})",
            filter.keyword, filter.difficulty
        );

        let mut query_str = format!(
            r#"
            SELECT {PROBLEM_COLUMNS}
            FROM problems p
            WHERE p.visible = 1 AND p.contest_id IS NULL
            "#
        );
        if filter.keyword.is_some() {
            query_str
                .push_str(" AND (p.title LIKE ? ESCAPE '\\' OR p.display_id LIKE ? ESCAPE '\\') ");
        }
        if filter.difficulty.is_some() {
            query_str.push_str(" AND p.difficulty = ? ");
        }
        query_str.push_str(" ORDER BY p.create_time, p.id ");

        let mut query = sqlx::query(&query_str);
        if let Some(kw) = &filter.keyword {
            let pattern = format!("%{}%", escape_like(kw));
            query = query.bind(pattern.clone()).bind(pattern);
        }
        if let Some(difficulty) = filter.difficulty {
            query = query.bind(difficulty.as_str());
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_problem).collect()
    }

    /// Catalogue detail lookup by display id; hidden and contest problems
    /// are out of scope and read as not found
    pub async fn get_catalogue_problem(&self, display_id: &str) -> Result<Problem> {
        debug!("Fetching catalogue problem: {}", display_id);

        let query_str = format!(
            r#"
            SELECT {PROBLEM_COLUMNS}
            FROM problems p
            WHERE p.display_id = ? AND p.visible = 1 AND p.contest_id IS NULL
            "#
        );

        let row = sqlx::query(&query_str)
            .bind(display_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from_fetch)?;

        row_to_problem(&row)
    }

    /// Lookup by primary key regardless of visibility, used by tagging
    pub async fn get_by_id(&self, id: i64) -> Result<Problem> {
        let query_str = format!("SELECT {PROBLEM_COLUMNS} FROM problems p WHERE p.id = ?");

        let row = sqlx::query(&query_str)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from_fetch)?;

        row_to_problem(&row)
    }

    /// Uniformly random visible catalogue problem's display id
    pub async fn pick_random(&self) -> Result<String> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM problems WHERE visible = 1 AND contest_id IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if count == 0 {
            return Err(StorageError::NotFound);
        }

        let index = rand::thread_rng().gen_range(0..count);

        let display_id: String = sqlx::query_scalar(
            r#"
            SELECT display_id FROM problems
            WHERE visible = 1 AND contest_id IS NULL
            ORDER BY id
            LIMIT 1 OFFSET ?
            "#,
        )
        .bind(index)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::from_fetch)?;

        Ok(display_id)
    }

    pub async fn list_contest_problems(&self, contest_id: i64) -> Result<Vec<Problem>> {
        debug!("Listing problems for contest: {}", contest_id);

        let query_str = format!(
            r#"
            SELECT {PROBLEM_COLUMNS}
            FROM problems p
            WHERE p.contest_id = ? AND p.visible = 1
            ORDER BY p.display_id
            "#
        );

        let rows = sqlx::query(&query_str)
            .bind(contest_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_problem).collect()
    }

    pub async fn get_contest_problem(&self, contest_id: i64, display_id: &str) -> Result<Problem> {
        debug!(
            "Fetching problem {} in contest {}",
            display_id, contest_id
        );

        let query_str = format!(
            r#"
            SELECT {PROBLEM_COLUMNS}
            FROM problems p
            WHERE p.contest_id = ? AND p.display_id = ? AND p.visible = 1
            "#
        );

        let row = sqlx::query(&query_str)
            .bind(contest_id)
            .bind(display_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from_fetch)?;

        row_to_problem(&row)
    }

    /// Replace a problem's allowed language list
    pub async fn update_languages(&self, id: i64, languages: &[String]) -> Result<()> {
        debug!("Updating languages for problem: {}", id);

        let result = sqlx::query("UPDATE problems SET languages = ? WHERE id = ?")
            .bind(serde_json::to_string(languages)?)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

fn row_to_problem(row: &sqlx::sqlite::SqliteRow) -> Result<Problem> {
    let samples: String = row.try_get("samples")?;
    let languages: String = row.try_get("languages")?;
    let statistic_info: String = row.try_get("statistic_info")?;
    let difficulty: String = row.try_get("difficulty")?;
    let rule_type: String = row.try_get("rule_type")?;
    let create_time: String = row.try_get("create_time")?;
    let tag_names: Option<String> = row.try_get("tag_names")?;

    Ok(Problem {
        id: row.try_get("id")?,
        display_id: row.try_get("display_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        input_description: row.try_get("input_description")?,
        output_description: row.try_get("output_description")?,
        samples: serde_json::from_str::<Vec<Sample>>(&samples)?,
        difficulty: Difficulty::parse(&difficulty)
            .ok_or_else(|| StorageError::InvalidInput(format!("unknown difficulty: {difficulty}")))?,
        rule_type: ProblemRuleType::parse(&rule_type)
            .ok_or_else(|| StorageError::InvalidInput(format!("unknown rule type: {rule_type}")))?,
        languages: serde_json::from_str::<Vec<String>>(&languages)?,
        tags: tag_names
            .map(|names| names.split('\u{1f}').map(str::to_string).collect())
            .unwrap_or_default(),
        visible: row.try_get::<i64, _>("visible")? != 0,
        contest_id: row.try_get("contest_id")?,
        created_by: row.try_get("created_by")?,
        submission_number: row.try_get("submission_number")?,
        accepted_number: row.try_get("accepted_number")?,
        statistic_info: serde_json::from_str(&statistic_info)?,
        create_time: datetime::parse_utc(&create_time)?,
    })
}
