//! Marketing API error types

use cartbridge_entities::marketing::extract_duplicate_profile_id;
use thiserror::Error;

pub type MarketingResult<T> = Result<T, MarketingApiError>;

#[derive(Error, Debug)]
pub enum MarketingApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Marketing API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request is missing the {resource} identifier")]
    MissingIdentifier { resource: &'static str },

    #[error("Bulk job {job_id} failed")]
    JobFailed { job_id: String },

    #[error("Bulk job {job_id} did not finish after {attempts} status checks")]
    JobTimedOut { job_id: String, attempts: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl MarketingApiError {
    /// Status code of the vendor response, when the error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Existing profile id named by a duplicate-profile conflict response.
    ///
    /// Only a 409 body with the expected error shape yields an id; anything
    /// else returns `None` and the original error stands.
    pub fn duplicate_profile_id(&self) -> Option<String> {
        match self {
            Self::Status { status: 409, body } => extract_duplicate_profile_id(body),
            _ => None,
        }
    }
}
