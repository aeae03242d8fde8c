// ABOUTME: HTTP request handlers for the problem catalogue
// ABOUTME: Listing with filters and tag-affinity ordering, detail, pick-one, tagging

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use tracing::info;

use arbiter_accounts::UserProfile;
use arbiter_core::Difficulty;
use arbiter_problems::{
    rank_by_tag_affinity, Cut, DbState, PaginatedData, ProblemFilter, ProblemListItem,
};

use super::auth::RequestUser;
use super::response::{error_response, ok, storage_error_response};

#[derive(Deserialize)]
pub struct ProblemListQuery {
    pub problem_id: Option<String>,
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: i64,
    pub keyword: Option<String>,
    pub difficulty: Option<String>,
    /// Comma-separated tag names driving affinity ordering
    pub tags: Option<String>,
}

async fn profile_for(db: &DbState, user: &RequestUser) -> Option<UserProfile> {
    let id = user.id.as_deref()?;
    // A broken profile must not take down a listing; treat it as anonymous
    db.profile_storage.find_profile(id).await.ok().flatten()
}

/// Catalogue listing and detail. A `problem_id` query switches to detail
/// lookup; listings require an explicit `limit`.
pub async fn get_problems(
    State(db): State<DbState>,
    user: RequestUser,
    Query(query): Query<ProblemListQuery>,
) -> Response {
    if let Some(display_id) = &query.problem_id {
        return problem_detail(&db, &user, display_id).await;
    }

    let Some(limit) = query.limit else {
        return error_response(StatusCode::BAD_REQUEST, "Limit is needed");
    };

    let difficulty = match &query.difficulty {
        Some(raw) => match Difficulty::parse(raw) {
            Some(difficulty) => Some(difficulty),
            None => return error_response(StatusCode::BAD_REQUEST, "Invalid difficulty"),
        },
        None => None,
    };

    let filter = ProblemFilter {
        keyword: query
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
            .map(str::to_string),
        difficulty,
    };

    info!(
        "Listing problems (keyword: {:?}, difficulty: {:?}, tags: {:?})",
        filter.keyword, filter.difficulty, query.tags
    );

    let problems = match db.problem_storage.list_catalogue(&filter).await {
        Ok(problems) => problems,
        Err(e) => return storage_error_response(e, "Problem does not exist"),
    };

    let tag_names: Vec<String> = query
        .tags
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    let profile = profile_for(&db, &user).await;
    let cut = Cut::new(limit, query.offset);
    // total counts the filtered set, not the page
    let total = problems.len() as i64;

    // Ordering runs over the full filtered set; the page is cut afterwards
    let items: Vec<ProblemListItem> = if tag_names.is_empty() {
        let page = cut.slice(problems);
        page.into_iter()
            .map(|problem| ProblemListItem::catalogue(profile.as_ref(), problem, None))
            .collect()
    } else {
        let scored = match rank_by_tag_affinity(&db.tag_storage, problems, &tag_names).await {
            Ok(scored) => scored,
            Err(e) => return storage_error_response(e, "Problem does not exist"),
        };
        cut.slice(scored)
            .into_iter()
            .map(|scored| {
                ProblemListItem::catalogue(profile.as_ref(), scored.problem, Some(scored.tag_score))
            })
            .collect()
    };

    ok(PaginatedData {
        total,
        results: items,
    })
}

async fn problem_detail(db: &DbState, user: &RequestUser, display_id: &str) -> Response {
    info!("Fetching problem: {}", display_id);

    let problem = match db.problem_storage.get_catalogue_problem(display_id).await {
        Ok(problem) => problem,
        Err(e) => return storage_error_response(e, "Problem does not exist"),
    };

    let profile = profile_for(db, user).await;
    ok(ProblemListItem::catalogue(profile.as_ref(), problem, None))
}

/// Random visible catalogue problem
pub async fn pick_one(State(db): State<DbState>) -> Response {
    match db.problem_storage.pick_random().await {
        Ok(display_id) => ok(display_id),
        Err(e) => storage_error_response(e, "No problem to pick"),
    }
}

/// Request body for tagging a problem
#[derive(Deserialize)]
pub struct AddTagRequest {
    pub id: i64,
    pub tags: Vec<String>,
    pub languages: Option<Vec<String>>,
}

/// Attach tags to a problem, bumping each tag's usage counter; tags are
/// created on first use. Optionally replaces the problem's language list.
pub async fn add_tag(State(db): State<DbState>, Json(request): Json<AddTagRequest>) -> Response {
    info!("Tagging problem {} with {:?}", request.id, request.tags);

    let problem = match db.problem_storage.get_by_id(request.id).await {
        Ok(problem) => problem,
        Err(e) => return storage_error_response(e, "Problem does not exist"),
    };

    if let Some(languages) = &request.languages {
        if let Err(e) = db.problem_storage.update_languages(problem.id, languages).await {
            return storage_error_response(e, "Problem does not exist");
        }
    }

    for name in request.tags.iter().map(|name| name.trim()).filter(|name| !name.is_empty()) {
        let tag = match db.tag_storage.get_or_create(name).await {
            Ok(tag) => tag,
            Err(e) => return storage_error_response(e, "Tag does not exist"),
        };
        if let Err(e) = db.tag_storage.attach_tag(problem.id, tag.id).await {
            return storage_error_response(e, "Tag does not exist");
        }
    }

    ok(())
}
