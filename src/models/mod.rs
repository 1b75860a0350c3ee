// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ApplicantProfile, JobPosting, MatchResult, RankingLimits, ScoredJob};
pub use requests::RecommendJobsRequest;
pub use responses::RecommendJobsResponse;
