//! Resume endpoints.

use serde_json::Value;
use tracing::{debug, instrument};

use portfolify_core::models::{AiSummary, EnhancedBullet, Resume, ResumePatch, SkillSuggestions};
use portfolify_core::{Id, Result};

use crate::http::HttpClient;

/// Endpoint for the resume collection.
const RESUMES: &str = "/resumes";

/// Endpoint for bullet enhancement.
const ENHANCE_BULLET: &str = "/resumes/enhance-bullet";

/// Endpoint for skill suggestions.
const SUGGEST_SKILLS: &str = "/resumes/suggest-skills";

/// Request body for resume creation.
#[derive(Debug, serde::Serialize)]
struct CreateResumeRequest<'a> {
    title: &'a str,
    content: &'a Value,
}

/// Request body for AI summary generation.
#[derive(Debug, serde::Serialize)]
struct AiSummaryRequest<'a> {
    job_title: &'a str,
    experience_summary: &'a str,
}

/// Request body for bullet enhancement.
#[derive(Debug, serde::Serialize)]
struct EnhanceBulletRequest<'a> {
    bullet: &'a str,
    job_title: &'a str,
    company: &'a str,
}

/// Request body for skill suggestions.
#[derive(Debug, serde::Serialize)]
struct SuggestSkillsRequest<'a> {
    job_title: &'a str,
    current_skills: &'a [String],
    experience_summary: &'a str,
}

/// Resume operations.
#[derive(Debug, Clone)]
pub struct ResumesApi {
    http: HttpClient,
}

impl ResumesApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List the signed-in user's resumes.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Resume>> {
        self.http.get(RESUMES).await
    }

    /// Create a resume.
    #[instrument(skip(self, content))]
    pub async fn create(&self, title: &str, content: &Value) -> Result<Resume> {
        debug!(title, "Creating resume");

        let request = CreateResumeRequest { title, content };
        self.http.post(RESUMES, &request).await
    }

    /// Fetch a single resume.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &Id) -> Result<Resume> {
        self.http.get(&format!("{}/{}", RESUMES, id)).await
    }

    /// Update a resume's title and/or content.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &Id, patch: &ResumePatch) -> Result<Resume> {
        debug!(id = %id, "Updating resume");
        self.http.put(&format!("{}/{}", RESUMES, id), patch).await
    }

    /// Delete a resume.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &Id) -> Result<()> {
        debug!(id = %id, "Deleting resume");
        self.http.delete(&format!("{}/{}", RESUMES, id)).await
    }

    /// Generate a professional summary for a resume.
    #[instrument(skip(self, experience_summary))]
    pub async fn ai_summary(
        &self,
        id: &Id,
        job_title: &str,
        experience_summary: &str,
    ) -> Result<AiSummary> {
        debug!(id = %id, "Requesting AI summary");

        let request = AiSummaryRequest {
            job_title,
            experience_summary,
        };

        self.http
            .post(&format!("{}/{}/ai-summary", RESUMES, id), &request)
            .await
    }

    /// Rewrite an experience bullet with stronger wording.
    #[instrument(skip(self, bullet))]
    pub async fn enhance_bullet(
        &self,
        bullet: &str,
        job_title: &str,
        company: &str,
    ) -> Result<EnhancedBullet> {
        let request = EnhanceBulletRequest {
            bullet,
            job_title,
            company,
        };

        self.http.post(ENHANCE_BULLET, &request).await
    }

    /// Suggest skills for a target job title.
    #[instrument(skip(self, current_skills, experience_summary))]
    pub async fn suggest_skills(
        &self,
        job_title: &str,
        current_skills: &[String],
        experience_summary: &str,
    ) -> Result<SkillSuggestions> {
        let request = SuggestSkillsRequest {
            job_title,
            current_skills,
            experience_summary,
        };

        self.http.post(SUGGEST_SKILLS, &request).await
    }
}
