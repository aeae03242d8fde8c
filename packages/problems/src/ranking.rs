// ABOUTME: Tag-affinity ranking for the catalogue listing
// ABOUTME: Scores problems against requested tags using usage counters

use arbiter_storage::Result;
use arbiter_tags::TagStorage;
use tracing::debug;

use super::types::Problem;

/// A problem with its affinity score against the requested tags
#[derive(Debug, Clone)]
pub struct ScoredProblem {
    pub problem: Problem,
    pub tag_score: f64,
}

/// Contribution of one tag to one problem's score. Tag popularity and the
/// problem's strongest tag both damp the raw counter logarithmically, so a
/// tag nobody else uses on a heavily-tagged problem still ranks sensibly.
pub fn affinity_score(tagged_number: i64, tag_users: i64, max_tagged_number: i64) -> f64 {
    1.0 / (1.0 + (1.0 + tag_users as f64).ln()) * tagged_number as f64
        / (1.0 + (1.0 + max_tagged_number as f64).ln())
}

/// Order problems by descending affinity to the requested tag names.
/// Aggregates are fetched in three batched queries; missing counters score
/// as zero. Ties keep the incoming order.
pub async fn rank_by_tag_affinity(
    tag_storage: &TagStorage,
    problems: Vec<Problem>,
    tag_names: &[String],
) -> Result<Vec<ScoredProblem>> {
    let problem_ids: Vec<i64> = problems.iter().map(|p| p.id).collect();

    let maxes = tag_storage.max_tagged_numbers(&problem_ids).await?;
    let totals = tag_storage.tag_user_totals(tag_names).await?;
    let counters = tag_storage.tagged_numbers(&problem_ids, tag_names).await?;

    debug!(
        "Ranking {} problems against {} tags",
        problems.len(),
        tag_names.len()
    );

    let mut scored: Vec<ScoredProblem> = problems
        .into_iter()
        .map(|problem| {
            let max_tagged = maxes.get(&problem.id).copied().unwrap_or(0);
            let tag_score = tag_names
                .iter()
                .map(|name| {
                    let tagged = counters
                        .get(&(problem.id, name.clone()))
                        .copied()
                        .unwrap_or(0);
                    let users = totals.get(name).copied().unwrap_or(0);
                    affinity_score(tagged, users, max_tagged)
                })
                .sum();
            ScoredProblem { problem, tag_score }
        })
        .collect();

    // Scores are finite and non-negative, so total_cmp gives a plain
    // descending sort; sort_by is stable
    scored.sort_by(|a, b| b.tag_score.total_cmp(&a.tag_score));

    Ok(scored)
}
