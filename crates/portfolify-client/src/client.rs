//! Top-level API client.

use std::sync::Arc;

use portfolify_core::{BaseUrl, CredentialStore};

use crate::advisor::AdvisorApi;
use crate::analyzer::AnalyzerApi;
use crate::auth::AuthApi;
use crate::case_studies::CaseStudiesApi;
use crate::cover_letters::CoverLettersApi;
use crate::http::HttpClient;
use crate::portfolios::PortfoliosApi;
use crate::resumes::ResumesApi;

/// Client for the portfolify backend.
///
/// Cheap to clone. Hands out per-resource API surfaces that all share one
/// underlying HTTP client and credential store, so a token written by the
/// session store is visible to every surface immediately.
#[derive(Debug, Clone)]
pub struct PortfolifyClient {
    http: HttpClient,
}

impl PortfolifyClient {
    /// Create a client for the given API base URL and credential store.
    pub fn new(base: BaseUrl, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            http: HttpClient::new(base, credentials),
        }
    }

    /// Returns the API base URL this client is configured for.
    pub fn base_url(&self) -> &BaseUrl {
        self.http.base_url()
    }

    /// Authentication and account operations.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.http.clone())
    }

    /// Resume operations.
    pub fn resumes(&self) -> ResumesApi {
        ResumesApi::new(self.http.clone())
    }

    /// Portfolio site operations.
    pub fn portfolios(&self) -> PortfoliosApi {
        PortfoliosApi::new(self.http.clone())
    }

    /// Case study operations.
    pub fn case_studies(&self) -> CaseStudiesApi {
        CaseStudiesApi::new(self.http.clone())
    }

    /// Job description analysis.
    pub fn analyzer(&self) -> AnalyzerApi {
        AnalyzerApi::new(self.http.clone())
    }

    /// Cover letter generation.
    pub fn cover_letters(&self) -> CoverLettersApi {
        CoverLettersApi::new(self.http.clone())
    }

    /// Career recommendations.
    pub fn advisor(&self) -> AdvisorApi {
        AdvisorApi::new(self.http.clone())
    }

    /// Returns a handle to the credential store backing this client.
    pub(crate) fn credential_store(&self) -> Arc<dyn CredentialStore> {
        self.http.credential_store()
    }
}
