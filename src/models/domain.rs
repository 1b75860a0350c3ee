use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Applicant profile as captured by the careers portal
///
/// Every field is free text and may be absent or blank; the scorer treats
/// both the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// e.g. "5+ years senior"; the first number found is read as years
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub education_level: Option<String>,
    /// Comma or prose list, e.g. "RN, BLS, ACLS"
    #[serde(default)]
    pub certifications: Option<String>,
}

/// Job posting as listed on the job board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub posted_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub applications_count: Option<u32>,
}

impl JobPosting {
    /// Helper to get applications_count, defaulting to 0
    pub fn applications(&self) -> u32 {
        self.applications_count.unwrap_or(0)
    }
}

/// Score and reasons for one (applicant, job) pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Always within 0..=100
    pub match_score: u8,
    /// At most five, in the order the rules fired
    pub match_reasons: Vec<String>,
}

/// A posting annotated with its match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    #[serde(flatten)]
    pub result: MatchResult,
}

impl ScoredJob {
    pub fn match_score(&self) -> u8 {
        self.result.match_score
    }
}

/// Thresholds applied when building the recommended list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingLimits {
    /// Postings scoring at or below this are dropped
    pub min_score: u8,
    /// Maximum number of recommendations
    pub limit: usize,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            min_score: 10,
            limit: 6,
        }
    }
}
