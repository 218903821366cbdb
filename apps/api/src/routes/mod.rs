pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers as matching;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume/ats-score", post(scoring::handle_ats_score))
        .route("/api/v1/resume/job-match", post(matching::handle_job_match))
        .route("/api/v1/keywords", get(matching::handle_list_keywords))
        .fallback(not_found)
        .with_state(state)
}
