//! Career recommendations endpoint.

use tracing::instrument;

use portfolify_core::Result;
use portfolify_core::models::CareerAdvice;

use crate::http::HttpClient;

/// Endpoint for career recommendations.
const RECOMMENDATIONS: &str = "/recommendations";

/// Career recommendations.
#[derive(Debug, Clone)]
pub struct AdvisorApi {
    http: HttpClient,
}

impl AdvisorApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch recommendations derived from the user's stored documents.
    #[instrument(skip(self))]
    pub async fn recommendations(&self) -> Result<CareerAdvice> {
        self.http.get(RECOMMENDATIONS).await
    }
}
