//! Analysis persistence. Rows are insert-only; listing is newest first.

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;
use crate::models::analysis::{AnalysisRow, AnalysisWithEmail};

/// Stored in the `roadmap` column when the analysis carries no roadmap text.
const EMPTY_ROADMAP_PLACEHOLDER: &str = "Analysis completed";

pub struct NewAnalysis<'a> {
    pub user_id: Uuid,
    /// The role exactly as the user typed it, not the matched canonical role.
    pub role: &'a str,
    pub analysis: &'a AnalysisResult,
}

/// Inserts an analysis and returns its id.
pub async fn insert_analysis(pool: &PgPool, new: NewAnalysis<'_>) -> sqlx::Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO analyses (id, user_id, role, skills_gap, roadmap)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(new.user_id)
    .bind(new.role)
    .bind(Json(new.analysis))
    .bind(roadmap_column(new.analysis))
    .execute(pool)
    .await?;

    debug!("Inserted analysis {id} for user {}", new.user_id);
    Ok(id)
}

/// All analyses for a user, most recent first.
pub async fn list_analyses(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<AnalysisRow>> {
    sqlx::query_as::<_, AnalysisRow>(
        "SELECT * FROM analyses WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// One analysis together with its owner's email.
pub async fn find_analysis_with_email(
    pool: &PgPool,
    id: Uuid,
) -> sqlx::Result<Option<AnalysisWithEmail>> {
    sqlx::query_as::<_, AnalysisWithEmail>(
        r#"
        SELECT a.id, a.role, a.skills_gap, a.roadmap, a.created_at, u.email
        FROM analyses a
        JOIN users u ON u.id = a.user_id
        WHERE a.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

fn roadmap_column(analysis: &AnalysisResult) -> &str {
    if analysis.roadmap.is_empty() {
        EMPTY_ROADMAP_PLACEHOLDER
    } else {
        &analysis.roadmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis_with_roadmap(roadmap: &str) -> AnalysisResult {
        AnalysisResult {
            gap_analysis: "gap".to_string(),
            missing_skills: vec!["Rust".to_string()],
            roadmap: roadmap.to_string(),
            timeline: "soon".to_string(),
        }
    }

    #[test]
    fn test_roadmap_column_copies_roadmap() {
        let analysis = analysis_with_roadmap("Phase 1: Rust");
        assert_eq!(roadmap_column(&analysis), "Phase 1: Rust");
    }

    #[test]
    fn test_empty_roadmap_gets_placeholder() {
        let analysis = analysis_with_roadmap("");
        assert_eq!(roadmap_column(&analysis), "Analysis completed");
    }

    fn assert_pg_bindable<'q, T>(_: &T)
    where
        T: sqlx::Encode<'q, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
    {
    }

    #[test]
    fn test_skills_gap_binds_as_camel_case_jsonb() {
        let analysis = analysis_with_roadmap("Phase 1: Rust");
        let column = Json(&analysis);
        assert_pg_bindable(&column);

        let stored = serde_json::to_value(column.0).unwrap();
        assert_eq!(stored["gapAnalysis"], "gap");
        assert_eq!(stored["missingSkills"], serde_json::json!(["Rust"]));
        assert_eq!(stored["timeline"], "soon");
    }
}
