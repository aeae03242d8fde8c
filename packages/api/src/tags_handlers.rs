// ABOUTME: HTTP request handlers for tag listing
// ABOUTME: Only tags attached to at least one problem are served

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use tracing::info;

use arbiter_problems::DbState;

use super::response::{ok, storage_error_response};

#[derive(Deserialize)]
pub struct ListTagsQuery {
    pub keyword: Option<String>,
}

/// List tags with their problem counts, optionally filtered by keyword
pub async fn list_tags(
    State(db): State<DbState>,
    Query(params): Query<ListTagsQuery>,
) -> Response {
    info!("Listing tags (keyword: {:?})", params.keyword);

    match db.tag_storage.list_tags(params.keyword.as_deref()).await {
        Ok(tags) => ok(tags),
        Err(e) => storage_error_response(e, "Tag does not exist"),
    }
}
