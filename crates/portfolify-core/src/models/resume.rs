//! Resume model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timestamps;
use crate::types::Id;

/// A resume document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    /// The resume's id.
    pub id: Id,

    /// Owning user's id.
    pub user_id: Id,

    /// Display title.
    pub title: String,

    /// The resume body.
    ///
    /// Schema-agnostic JSON: the editor owns the shape and the API stores
    /// it verbatim.
    pub content: Value,

    /// Creation time, when the record carries one.
    #[serde(default, deserialize_with = "timestamps::lenient")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification time, when the record carries one.
    #[serde(default, deserialize_with = "timestamps::lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields to change on an existing resume.
///
/// Absent fields are omitted from the request body and left unchanged by
/// the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResumePatch {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Replacement body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_resume() {
        let resume: Resume = serde_json::from_value(json!({
            "id": "64f1c9a2e13d5b0007a1b2c3",
            "user_id": "64f1c9a2e13d5b0007a1b2c0",
            "title": "Backend Engineer",
            "content": {"sections": []},
            "created_at": "2024-03-01T10:00:00",
            "updated_at": "2024-03-02T11:30:00+00:00"
        }))
        .unwrap();
        assert_eq!(resume.title, "Backend Engineer");
        assert!(resume.created_at.is_some());
        assert!(resume.updated_at.is_some());
    }

    #[test]
    fn empty_timestamps_become_none() {
        let resume: Resume = serde_json::from_value(json!({
            "id": "abc",
            "user_id": "def",
            "title": "Old",
            "content": {},
            "created_at": "",
            "updated_at": ""
        }))
        .unwrap();
        assert_eq!(resume.created_at, None);
        assert_eq!(resume.updated_at, None);
    }

    #[test]
    fn missing_timestamps_become_none() {
        let resume: Resume = serde_json::from_value(json!({
            "id": "abc",
            "user_id": "def",
            "title": "Sparse",
            "content": {}
        }))
        .unwrap();
        assert_eq!(resume.created_at, None);
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = ResumePatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"title": "Renamed"})
        );
    }
}
