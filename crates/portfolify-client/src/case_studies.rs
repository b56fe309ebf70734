//! Case study endpoints.

use serde_json::Value;
use tracing::{debug, instrument};

use portfolify_core::models::CaseStudy;
use portfolify_core::{Id, Result};

use crate::http::HttpClient;

/// Endpoint for the case study collection.
const CASE_STUDIES: &str = "/case-studies";

/// Request body for case study creation.
#[derive(Debug, serde::Serialize)]
struct CreateCaseStudyRequest<'a> {
    title: &'a str,
    inputs: &'a Value,
}

/// Case study operations.
#[derive(Debug, Clone)]
pub struct CaseStudiesApi {
    http: HttpClient,
}

impl CaseStudiesApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List the signed-in user's case studies.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CaseStudy>> {
        self.http.get(CASE_STUDIES).await
    }

    /// Create a case study from raw project facts.
    #[instrument(skip(self, inputs))]
    pub async fn create(&self, title: &str, inputs: &Value) -> Result<CaseStudy> {
        debug!(title, "Creating case study");

        let request = CreateCaseStudyRequest { title, inputs };
        self.http.post(CASE_STUDIES, &request).await
    }

    /// Generate the narrative for a stored case study.
    ///
    /// The server writes the generated content back onto the record and
    /// returns the updated case study.
    #[instrument(skip(self))]
    pub async fn generate(&self, id: &Id) -> Result<CaseStudy> {
        debug!(id = %id, "Generating case study narrative");

        self.http
            .post_no_body(&format!("{}/{}/generate", CASE_STUDIES, id))
            .await
    }
}
