use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::ids::QuizId;
use crate::time::deserialize_backend_timestamp;

/// A submitted quiz result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Score {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub quiz_id: Option<QuizId>,
    pub user_id: String,
    pub score: u32,
    #[serde(deserialize_with = "deserialize_backend_timestamp")]
    pub submitted_at: DateTime<Utc>,
}
