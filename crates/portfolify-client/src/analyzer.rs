//! Job description analyzer endpoint.

use tracing::{debug, instrument};

use portfolify_core::models::JdAnalysis;
use portfolify_core::{Id, Result};

use crate::http::HttpClient;

/// Endpoint for job description analysis.
const ANALYZE: &str = "/jd-analyzer/analyze";

/// Request body for analysis.
#[derive(Debug, serde::Serialize)]
struct AnalyzeRequest<'a> {
    resume_id: &'a Id,
    job_description: &'a str,
}

/// Job description analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerApi {
    http: HttpClient,
}

impl AnalyzerApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Score a stored resume against a job description.
    #[instrument(skip(self, job_description))]
    pub async fn analyze(&self, resume_id: &Id, job_description: &str) -> Result<JdAnalysis> {
        debug!(resume_id = %resume_id, "Analyzing job description");

        let request = AnalyzeRequest {
            resume_id,
            job_description,
        };

        self.http.post(ANALYZE, &request).await
    }
}
