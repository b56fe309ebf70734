//! Case study model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timestamps;
use crate::types::Id;

/// A project case study.
///
/// Created from raw project inputs; `generated_content` is filled in once
/// the narrative has been generated server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    /// The case study's id.
    pub id: Id,

    /// Owning user's id.
    pub user_id: Id,

    /// Display title.
    pub title: String,

    /// Raw project facts supplied at creation (problem, approach, outcome).
    pub inputs: Value,

    /// The generated narrative, absent until generation has run.
    #[serde(default)]
    pub generated_content: Option<Value>,

    /// Creation time, when the record carries one.
    #[serde(default, deserialize_with = "timestamps::lenient")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification time, when the record carries one.
    #[serde(default, deserialize_with = "timestamps::lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}
