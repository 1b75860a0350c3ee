use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::AppError;
use crate::models::domain::{ApplicantProfile, JobPosting};

/// Input document for a recommendation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendJobsRequest {
    #[serde(default)]
    pub applicant: ApplicantProfile,
    #[serde(default)]
    pub postings: Vec<JobPosting>,
}

impl RecommendJobsRequest {
    /// Read a JSON request document, e.g. from a file or stdin
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, AppError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
