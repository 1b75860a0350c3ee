use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredJob;

/// Output document for a recommendation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendJobsResponse {
    pub jobs: Vec<ScoredJob>,
    pub total_postings: usize,
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
}
