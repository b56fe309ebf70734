//! User account model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamps;
use crate::types::Id;

/// A user account as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The user's id.
    pub id: Id,

    /// Account email, also the login identifier.
    pub email: String,

    /// Display name.
    pub full_name: String,

    /// Account creation time, when the record carries one.
    #[serde(default, deserialize_with = "timestamps::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields to change on the signed-in user's profile.
///
/// Absent fields are omitted from the request body and left unchanged by
/// the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfilePatch {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// New account email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_user_with_numeric_id() {
        let user: User =
            serde_json::from_str(r#"{"id": 1, "email": "a@b.c", "full_name": "Test User"}"#)
                .unwrap();
        assert_eq!(user.id.as_str(), "1");
        assert_eq!(user.email, "a@b.c");
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn deserializes_user_with_created_at() {
        let user: User = serde_json::from_str(
            r#"{"id": "u1", "email": "a@b.c", "full_name": "Test User", "created_at": "2024-01-15T09:30:00+00:00"}"#,
        )
        .unwrap();
        assert!(user.created_at.is_some());
    }

    #[test]
    fn profile_patch_omits_unset_fields() {
        let patch = ProfilePatch {
            full_name: Some("New Name".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"full_name": "New Name"}));
    }
}
