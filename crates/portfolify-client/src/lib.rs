//! portfolify-client - HTTP client, session store, and route guard for the
//! PortfolifyAI API.

mod advisor;
mod analyzer;
mod auth;
mod case_studies;
mod client;
mod cover_letters;
mod guard;
mod http;
mod portfolios;
mod resumes;
mod session;

pub use advisor::AdvisorApi;
pub use analyzer::AnalyzerApi;
pub use auth::{AuthApi, AuthGrant};
pub use case_studies::CaseStudiesApi;
pub use client::PortfolifyClient;
pub use cover_letters::CoverLettersApi;
pub use guard::{RouteDecision, RouteGuard};
pub use http::HttpClient;
pub use portfolios::PortfoliosApi;
pub use resumes::ResumesApi;
pub use session::{SessionPhase, SessionSnapshot, SessionStore};
