// ABOUTME: HTTP API layer for the problem catalogue
// ABOUTME: Routers wiring axum handlers over the shared DbState

use axum::{
    routing::{get, post},
    Router,
};

use arbiter_problems::DbState;

pub mod auth;
pub mod contest_handlers;
pub mod problems_handlers;
pub mod response;
pub mod tags_handlers;

/// Creates the tags API router
pub fn create_tags_router() -> Router<DbState> {
    Router::new().route("/", get(tags_handlers::list_tags))
}

/// Creates the problems API router
pub fn create_problems_router() -> Router<DbState> {
    Router::new()
        .route("/", get(problems_handlers::get_problems))
        .route("/pick-one", get(problems_handlers::pick_one))
        .route("/tags", post(problems_handlers::add_tag))
}

/// Creates the contest problems API router
pub fn create_contests_router() -> Router<DbState> {
    Router::new().route(
        "/{contest_id}/problems",
        get(contest_handlers::get_contest_problems),
    )
}
