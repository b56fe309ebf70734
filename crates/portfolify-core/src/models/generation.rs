//! Generated-content payloads.
//!
//! These are produced by the backend's generation endpoints. The fields
//! all carry defaults: generated JSON is not guaranteed to be complete,
//! and a missing key should degrade to an empty value rather than fail
//! the whole response.

use serde::{Deserialize, Serialize};

/// A generated professional summary for a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSummary {
    /// The summary paragraph.
    #[serde(default)]
    pub summary: String,
}

/// A rewritten experience bullet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedBullet {
    /// The strengthened wording.
    #[serde(default)]
    pub enhanced: String,
}

/// Skill suggestions for a target job title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSuggestions {
    /// Suggested skill names.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A generated portfolio tagline and bio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedBio {
    /// One-line tagline.
    #[serde(default)]
    pub tagline: String,

    /// Longer biography paragraph.
    #[serde(default)]
    pub bio: String,
}

/// Analysis of a resume against a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdAnalysis {
    /// Match score from 0 to 100.
    #[serde(default)]
    pub match_score: f64,

    /// Skills present in both the resume and the job description.
    #[serde(default)]
    pub matched_skills: Vec<String>,

    /// Skills the job description asks for that the resume lacks.
    #[serde(default)]
    pub missing_skills: Vec<String>,

    /// Concrete suggestions for closing the gap.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// A generated cover letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetter {
    /// The letter text.
    #[serde(default)]
    pub cover_letter: String,
}

/// Career recommendations derived from the user's documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerAdvice {
    /// Overall competitiveness score from 0 to 100.
    #[serde(default)]
    pub competitiveness_score: f64,

    /// Prioritized actions to improve the profile.
    #[serde(default)]
    pub action_items: Vec<ActionItem>,

    /// Estimated interview-rate improvement if the actions are taken.
    #[serde(default)]
    pub interview_probability_boost: String,
}

/// A single recommended action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    /// Short action name.
    #[serde(default)]
    pub title: String,

    /// What to do and why.
    #[serde(default)]
    pub description: String,

    /// Priority label ("high", "medium", "low").
    #[serde(default)]
    pub priority: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn incomplete_advice_degrades_to_defaults() {
        let advice: CareerAdvice = serde_json::from_value(json!({
            "competitiveness_score": 72
        }))
        .unwrap();
        assert_eq!(advice.competitiveness_score, 72.0);
        assert!(advice.action_items.is_empty());
        assert_eq!(advice.interview_probability_boost, "");
    }

    #[test]
    fn analysis_accepts_integer_score() {
        let analysis: JdAnalysis = serde_json::from_value(json!({
            "match_score": 87,
            "matched_skills": ["Rust"],
            "missing_skills": ["Kubernetes"],
            "suggestions": ["Mention container tooling"]
        }))
        .unwrap();
        assert_eq!(analysis.match_score, 87.0);
        assert_eq!(analysis.matched_skills, vec!["Rust"]);
    }

    #[test]
    fn action_items_parse_fully() {
        let advice: CareerAdvice = serde_json::from_value(json!({
            "competitiveness_score": 55.5,
            "action_items": [
                {"title": "Add metrics", "description": "Quantify outcomes.", "priority": "high"}
            ],
            "interview_probability_boost": "+20%"
        }))
        .unwrap();
        assert_eq!(advice.action_items.len(), 1);
        assert_eq!(advice.action_items[0].priority, "high");
    }
}
