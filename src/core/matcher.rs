use chrono::{DateTime, Utc};

use crate::core::scoring::calculate_match_score;
use crate::models::{
    ApplicantProfile, JobPosting, RankingLimits, RecommendJobsRequest, RecommendJobsResponse,
    ScoredJob,
};

/// Recommendation orchestrator
///
/// Scores postings for one applicant with `calculate_match_score` and turns
/// them into either the recommended list or a fully annotated list. Both
/// paths share the scorer so a posting never shows two different scores.
///
/// # Pipeline Stages
/// 1. Scoring
/// 2. Threshold filtering
/// 3. Stable ranking by score
/// 4. Truncation
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    limits: RankingLimits,
}

impl Matcher {
    pub fn new(limits: RankingLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> RankingLimits {
        self.limits
    }

    /// Recommended jobs for an applicant, evaluated at the current time
    pub fn recommend(
        &self,
        applicant: &ApplicantProfile,
        postings: &[JobPosting],
    ) -> Vec<ScoredJob> {
        self.recommend_at(applicant, postings, Utc::now())
    }

    /// Recommended jobs for an applicant
    ///
    /// Drops postings scoring at or below `min_score`, orders the rest by
    /// score (highest first, ties in input order) and keeps at most `limit`.
    ///
    /// # Arguments
    /// * `applicant` - The applicant's profile
    /// * `postings` - All postings currently listed
    /// * `now` - Evaluation instant for the recency rule
    pub fn recommend_at(
        &self,
        applicant: &ApplicantProfile,
        postings: &[JobPosting],
        now: DateTime<Utc>,
    ) -> Vec<ScoredJob> {
        let mut ranked: Vec<ScoredJob> = self
            .annotate_at(applicant, postings, now)
            .into_iter()
            .filter(|scored| scored.match_score() > self.limits.min_score)
            .collect();

        let eligible = ranked.len();

        // sort_by is stable, so equal scores keep their input order
        ranked.sort_by(|a, b| b.match_score().cmp(&a.match_score()));
        ranked.truncate(self.limits.limit);

        tracing::debug!(
            "Ranked {} postings: {} above threshold {}, returning {}",
            postings.len(),
            eligible,
            self.limits.min_score,
            ranked.len()
        );

        ranked
    }

    /// Every posting with its score, evaluated at the current time
    pub fn annotate(
        &self,
        applicant: &ApplicantProfile,
        postings: &[JobPosting],
    ) -> Vec<ScoredJob> {
        self.annotate_at(applicant, postings, Utc::now())
    }

    /// Every posting with its score, in input order, unfiltered
    pub fn annotate_at(
        &self,
        applicant: &ApplicantProfile,
        postings: &[JobPosting],
        now: DateTime<Utc>,
    ) -> Vec<ScoredJob> {
        postings
            .iter()
            .map(|job| {
                let result = calculate_match_score(applicant, job, now);
                tracing::trace!("Scored posting {:?}: {}", job.id, result.match_score);
                ScoredJob {
                    job: job.clone(),
                    result,
                }
            })
            .collect()
    }

    /// Answer a request document with either the recommended list or,
    /// when `annotate_all` is set, every posting with its score
    pub fn respond_at(
        &self,
        request: &RecommendJobsRequest,
        now: DateTime<Utc>,
        annotate_all: bool,
    ) -> RecommendJobsResponse {
        let jobs = if annotate_all {
            self.annotate_at(&request.applicant, &request.postings, now)
        } else {
            self.recommend_at(&request.applicant, &request.postings, now)
        };

        RecommendJobsResponse {
            jobs,
            total_postings: request.postings.len(),
            evaluated_at: now,
        }
    }
}
