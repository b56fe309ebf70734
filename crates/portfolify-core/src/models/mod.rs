//! Data models for API resources.

mod case_study;
mod generation;
mod portfolio;
mod resume;
mod user;

pub use case_study::CaseStudy;
pub use generation::{
    ActionItem, AiSummary, CareerAdvice, CoverLetter, EnhancedBullet, GeneratedBio, JdAnalysis,
    SkillSuggestions,
};
pub use portfolio::{Portfolio, PortfolioPatch};
pub use resume::{Resume, ResumePatch};
pub use user::{ProfilePatch, User};

pub(crate) mod timestamps {
    //! Tolerant timestamp parsing.
    //!
    //! The backend serializes datetimes without a UTC offset and emits an
    //! empty string for records created before the field existed, so
    //! anything unparseable becomes `None` instead of failing the whole
    //! payload.

    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().and_then(parse))
    }

    fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        // Offset-less timestamps are UTC
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::Timelike;

        #[test]
        fn parses_rfc3339() {
            let dt = parse("2024-03-01T10:00:00+00:00").unwrap();
            assert_eq!(dt.hour(), 10);
        }

        #[test]
        fn parses_offsetless_as_utc() {
            let dt = parse("2024-03-01T10:00:00.123456").unwrap();
            assert_eq!(dt.hour(), 10);
        }

        #[test]
        fn rejects_empty_and_garbage() {
            assert_eq!(parse(""), None);
            assert_eq!(parse("yesterday"), None);
        }
    }
}
