use axum::Json;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::scoring::completeness::{compute_completeness, CompletenessResult};

/// POST /api/v1/resume/ats-score
pub async fn handle_ats_score(
    Json(resume): Json<ResumeRecord>,
) -> Result<Json<CompletenessResult>, AppError> {
    Ok(Json(compute_completeness(&resume)))
}
