//! Axum route handlers for the Analysis and Chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::{analyze, chat};
use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::history::store::{insert_analysis, NewAnalysis};
use crate::routes::params::{is_blank, optional_uuid};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub role: Option<String>,
    pub current_skills: Option<String>,
    /// Blank means "don't persist".
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub reply: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/gemini/analyze
///
/// Runs the skill-gap analysis. Persists it when `userId` is supplied.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let (Some(role), Some(current_skills)) = (
        request.role.filter(|r| !is_blank(Some(r.as_str()))),
        request.current_skills.filter(|s| !is_blank(Some(s.as_str()))),
    ) else {
        return Err(AppError::Validation(
            "Missing required fields: role, currentSkills".to_string(),
        ));
    };
    let user_id = optional_uuid("userId", request.user_id.as_deref())?;

    let analysis = analyze(state.llm.as_ref(), &role, &current_skills).await?;

    let analysis_id = match user_id {
        Some(user_id) => {
            let id = insert_analysis(
                &state.db,
                NewAnalysis {
                    user_id,
                    role: &role,
                    analysis: &analysis,
                },
            )
            .await?;
            info!("Saved analysis {id} for user {user_id}");
            Some(id)
        }
        None => None,
    };

    Ok(Json(AnalyzeResponse {
        success: true,
        data: analysis,
        analysis_id,
    }))
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(message) = request.message.filter(|m| !is_blank(Some(m.as_str()))) else {
        return Err(AppError::Validation(
            "Missing required field: message".to_string(),
        ));
    };

    let reply = chat(
        state.llm.as_ref(),
        &message,
        request.context.as_deref(),
    )
    .await;

    Ok(Json(ChatResponse {
        success: true,
        reply,
    }))
}
