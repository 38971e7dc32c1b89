use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::history::report::{render_report, report_filename, ReportInput};
use crate::history::store::{find_analysis_with_email, list_analyses};
use crate::models::analysis::AnalysisRow;
use crate::routes::params::optional_uuid;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct AnalysisIdQuery {
    pub id: Option<String>,
}

/// GET /api/analyses?userId=
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<AnalysisRow>>, AppError> {
    let user_id = optional_uuid("userId", params.user_id.as_deref())?
        .ok_or_else(|| AppError::Validation("Missing userId".to_string()))?;
    Ok(Json(list_analyses(&state.db, user_id).await?))
}

/// GET /api/download?id=
pub async fn handle_download(
    State(state): State<AppState>,
    Query(params): Query<AnalysisIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let id = optional_uuid("id", params.id.as_deref())?
        .ok_or_else(|| AppError::Validation("Analysis ID is required".to_string()))?;

    let analysis = find_analysis_with_email(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Analysis not found".to_string()))?;

    let report = render_report(&ReportInput {
        email: &analysis.email,
        created_at: analysis.created_at,
        role: &analysis.role,
        skills_gap: &analysis.skills_gap,
        roadmap: &analysis.roadmap,
    });
    let filename = report_filename(&analysis.role, Utc::now());
    info!("Rendered report {filename} for analysis {}", analysis.id);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        report,
    ))
}
