//! Portfolio site model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timestamps;
use crate::types::Id;

/// A portfolio site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// The portfolio's id.
    pub id: Id,

    /// Owning user's id.
    pub user_id: Id,

    /// Display title.
    pub title: String,

    /// Site configuration (theme, sections, layout).
    ///
    /// Schema-agnostic JSON owned by the site builder.
    pub config: Value,

    /// Subdomain the site is published under, once claimed.
    #[serde(default)]
    pub subdomain: Option<String>,

    /// Whether the site is publicly visible.
    #[serde(default)]
    pub is_published: bool,

    /// Creation time, when the record carries one.
    #[serde(default, deserialize_with = "timestamps::lenient")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification time, when the record carries one.
    #[serde(default, deserialize_with = "timestamps::lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields to change on an existing portfolio.
///
/// Absent fields are omitted from the request body and left unchanged by
/// the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioPatch {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Replacement configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,

    /// New subdomain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,

    /// Publish or unpublish the site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_published_defaults_to_false() {
        let portfolio: Portfolio = serde_json::from_value(json!({
            "id": "p1",
            "user_id": "u1",
            "title": "My Site",
            "config": {"theme": "minimal"}
        }))
        .unwrap();
        assert!(!portfolio.is_published);
        assert_eq!(portfolio.subdomain, None);
    }

    #[test]
    fn patch_with_publish_flag_only() {
        let patch = PortfolioPatch {
            is_published: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"is_published": true})
        );
    }
}
