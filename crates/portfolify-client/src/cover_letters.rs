//! Cover letter endpoint.

use tracing::{debug, instrument};

use portfolify_core::models::CoverLetter;
use portfolify_core::{Id, Result};

use crate::http::HttpClient;

/// Endpoint for cover letter generation.
const GENERATE: &str = "/cover-letter/generate";

/// Request body for cover letter generation.
#[derive(Debug, serde::Serialize)]
struct GenerateCoverLetterRequest<'a> {
    resume_id: &'a Id,
    job_description: &'a str,
    company_name: &'a str,
}

/// Cover letter generation.
#[derive(Debug, Clone)]
pub struct CoverLettersApi {
    http: HttpClient,
}

impl CoverLettersApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Generate a cover letter from a stored resume and a job description.
    #[instrument(skip(self, job_description))]
    pub async fn generate(
        &self,
        resume_id: &Id,
        job_description: &str,
        company_name: &str,
    ) -> Result<CoverLetter> {
        debug!(resume_id = %resume_id, company_name, "Generating cover letter");

        let request = GenerateCoverLetterRequest {
            resume_id,
            job_description,
            company_name,
        };

        self.http.post(GENERATE, &request).await
    }
}
