// ABOUTME: TEXT column timestamp handling
// ABOUTME: Accepts RFC 3339 and SQLite's datetime('now','utc') formats

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{Result, StorageError};

/// Canonical stored form for timestamps written by Rust code
pub fn format_utc(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

/// Parse a TEXT timestamp column written either by us (RFC 3339) or by a
/// SQLite default expression ("YYYY-MM-DD HH:MM:SS")
pub fn parse_utc(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| StorageError::InvalidInput(format!("unparseable timestamp: {raw}")))
}
