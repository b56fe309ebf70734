//! Portfolio endpoints.

use serde_json::Value;
use tracing::{debug, instrument};

use portfolify_core::models::{GeneratedBio, Portfolio, PortfolioPatch};
use portfolify_core::{Id, Result};

use crate::http::HttpClient;

/// Endpoint for the portfolio collection.
const PORTFOLIOS: &str = "/portfolios";

/// Endpoint for bio generation.
const GENERATE_BIO: &str = "/portfolios/generate-bio";

/// Request body for portfolio creation.
#[derive(Debug, serde::Serialize)]
struct CreatePortfolioRequest<'a> {
    title: &'a str,
    config: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    subdomain: Option<&'a str>,
}

/// Request body for bio generation.
#[derive(Debug, serde::Serialize)]
struct GenerateBioRequest<'a> {
    name: &'a str,
    title: &'a str,
    skills: &'a [String],
    experience: &'a str,
}

/// Portfolio site operations.
#[derive(Debug, Clone)]
pub struct PortfoliosApi {
    http: HttpClient,
}

impl PortfoliosApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List the signed-in user's portfolios.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Portfolio>> {
        self.http.get(PORTFOLIOS).await
    }

    /// Create a portfolio.
    #[instrument(skip(self, config))]
    pub async fn create(
        &self,
        title: &str,
        config: &Value,
        subdomain: Option<&str>,
    ) -> Result<Portfolio> {
        debug!(title, "Creating portfolio");

        let request = CreatePortfolioRequest {
            title,
            config,
            subdomain,
        };

        self.http.post(PORTFOLIOS, &request).await
    }

    /// Fetch a single portfolio.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &Id) -> Result<Portfolio> {
        self.http.get(&format!("{}/{}", PORTFOLIOS, id)).await
    }

    /// Update a portfolio's title, config, subdomain or publish state.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &Id, patch: &PortfolioPatch) -> Result<Portfolio> {
        debug!(id = %id, "Updating portfolio");
        self.http.put(&format!("{}/{}", PORTFOLIOS, id), patch).await
    }

    /// Delete a portfolio.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &Id) -> Result<()> {
        debug!(id = %id, "Deleting portfolio");
        self.http.delete(&format!("{}/{}", PORTFOLIOS, id)).await
    }

    /// Generate a tagline and bio for a portfolio landing page.
    #[instrument(skip(self, skills, experience))]
    pub async fn generate_bio(
        &self,
        name: &str,
        title: &str,
        skills: &[String],
        experience: &str,
    ) -> Result<GeneratedBio> {
        let request = GenerateBioRequest {
            name,
            title,
            skills,
            experience,
        };

        self.http.post(GENERATE_BIO, &request).await
    }
}
