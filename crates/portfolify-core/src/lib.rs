//! portfolify-core - Core types and models for the PortfolifyAI client.

pub mod credentials;
pub mod error;
pub mod models;
pub mod store;
pub mod tokens;
pub mod types;

pub use credentials::Credentials;
pub use error::{ApiError, Error};
pub use models::{
    ActionItem, AiSummary, CareerAdvice, CaseStudy, CoverLetter, EnhancedBullet, GeneratedBio,
    JdAnalysis, Portfolio, PortfolioPatch, ProfilePatch, Resume, ResumePatch, SkillSuggestions,
    User,
};
pub use store::{CredentialStore, MemoryCredentialStore};
pub use tokens::AccessToken;
pub use types::{BaseUrl, Id};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
