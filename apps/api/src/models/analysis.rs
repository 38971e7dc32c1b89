use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted analysis. `skills_gap` holds the serialized `AnalysisResult`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub skills_gap: Value,
    pub roadmap: String,
    pub created_at: DateTime<Utc>,
}

/// An analysis joined with its owner's email, for report downloads.
#[derive(Debug, Clone, FromRow)]
pub struct AnalysisWithEmail {
    pub id: Uuid,
    pub role: String,
    pub skills_gap: Value,
    pub roadmap: String,
    pub created_at: DateTime<Utc>,
    pub email: String,
}
