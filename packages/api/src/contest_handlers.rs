// ABOUTME: HTTP request handlers for contest-scoped problem views
// ABOUTME: Access is gated by contest start; details by the contest's rules

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use arbiter_contests::Contest;
use arbiter_problems::{DbState, ProblemListItem, ProblemSummary};

use super::auth::RequestUser;
use super::response::{error_response, ok, storage_error_response};

#[derive(Deserialize)]
pub struct ContestProblemQuery {
    pub problem_id: Option<String>,
}

/// Contest problem listing and detail, permission-gated.
/// Requesters without details permission get safe summaries.
pub async fn get_contest_problems(
    State(db): State<DbState>,
    user: RequestUser,
    Path(contest_id): Path<i64>,
    Query(query): Query<ContestProblemQuery>,
) -> Response {
    let contest = match db.contest_storage.get_contest(contest_id).await {
        Ok(contest) => contest,
        Err(e) => return storage_error_response(e, "Contest does not exist"),
    };

    // Hidden contests must not reveal their existence
    if contest.hidden_from(user.id.as_deref()) {
        return error_response(StatusCode::NOT_FOUND, "Contest does not exist");
    }

    let now = Utc::now();
    if !contest.can_view_problems(user.id.as_deref(), now) {
        return error_response(StatusCode::FORBIDDEN, "Contest has not started");
    }
    let full_details = contest.problem_details_permission(user.id.as_deref(), now);

    match &query.problem_id {
        Some(display_id) => {
            contest_problem_detail(&db, &user, &contest, display_id, full_details).await
        }
        None => contest_problem_list(&db, &user, &contest, full_details).await,
    }
}

async fn contest_problem_detail(
    db: &DbState,
    user: &RequestUser,
    contest: &Contest,
    display_id: &str,
    full_details: bool,
) -> Response {
    info!("Fetching problem {} in contest {}", display_id, contest.id);

    let problem = match db
        .problem_storage
        .get_contest_problem(contest.id, display_id)
        .await
    {
        Ok(problem) => problem,
        Err(e) => return storage_error_response(e, "Problem does not exist."),
    };

    if !full_details {
        return ok(ProblemSummary::from(&problem));
    }

    let profile = match user.id.as_deref() {
        Some(id) => db.profile_storage.find_profile(id).await.ok().flatten(),
        None => None,
    };
    ok(ProblemListItem::contest(
        profile.as_ref(),
        contest.rule_type,
        problem,
    ))
}

async fn contest_problem_list(
    db: &DbState,
    user: &RequestUser,
    contest: &Contest,
    full_details: bool,
) -> Response {
    info!("Listing problems for contest {}", contest.id);

    let problems = match db.problem_storage.list_contest_problems(contest.id).await {
        Ok(problems) => problems,
        Err(e) => return storage_error_response(e, "Problem does not exist."),
    };

    if !full_details {
        let summaries: Vec<ProblemSummary> =
            problems.iter().map(ProblemSummary::from).collect();
        return ok(summaries);
    }

    let profile = match user.id.as_deref() {
        Some(id) => db.profile_storage.find_profile(id).await.ok().flatten(),
        None => None,
    };
    let items: Vec<ProblemListItem> = problems
        .into_iter()
        .map(|problem| ProblemListItem::contest(profile.as_ref(), contest.rule_type, problem))
        .collect();

    ok(items)
}
