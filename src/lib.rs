//! Job Match - applicant-to-job match scoring for the careers portal
//!
//! This library provides the scoring rubric used by the applicant dashboard
//! to rank job postings, and the ranking step that builds the recommended
//! jobs list from it.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, Matcher};
pub use error::AppError;
pub use models::{
    ApplicantProfile, JobPosting, MatchResult, RankingLimits, RecommendJobsRequest,
    RecommendJobsResponse, ScoredJob,
};
