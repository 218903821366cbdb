use std::sync::Arc;

use crate::config::Config;
use crate::matching::analyzer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no resume data; every request carries the record it wants scored.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: KeywordMatchScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
}
