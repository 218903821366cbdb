//! Axum route handlers for the Matching API.

use std::time::Duration;

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::analyzer::MatchResult;
use crate::matching::keywords::{vocabulary, VocabularyEntry};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    #[serde(default)]
    pub resume: ResumeRecord,
    pub job_description: String,
}

/// POST /api/v1/resume/job-match
///
/// Scores the submitted resume against a pasted job description.
pub async fn handle_job_match(
    State(state): State<AppState>,
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let result = state
        .match_scorer
        .analyze(&request.resume, &request.job_description);

    info!(
        backend = state.match_scorer.backend(),
        match_score = result.match_score,
        matched = result.matched_keywords.len(),
        "Job match analyzed"
    );

    if state.config.analysis_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.analysis_delay_ms)).await;
    }

    Ok(Json(result))
}

/// GET /api/v1/keywords
///
/// Lists the static keyword vocabulary with categories.
pub async fn handle_list_keywords() -> Json<Vec<VocabularyEntry>> {
    Json(vocabulary())
}
