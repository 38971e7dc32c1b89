use std::sync::LazyLock;

use axum::{extract::State, Json};
use regex::Regex;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
}

/// POST /api/users
///
/// Returns the user with this email, creating it on first sight.
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<User>, AppError> {
    let email = validate_email(request.email.as_deref().unwrap_or_default())?;
    let user = upsert_user(&state.db, email).await?;
    info!("Resolved user {} for {}", user.id, user.email);
    Ok(Json(user))
}

pub fn validate_email(email: &str) -> Result<&str, AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("Missing email".to_string()));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }
    Ok(email)
}

/// Single-statement get-or-create. The no-op update makes `RETURNING` yield the
/// existing row on conflict.
async fn upsert_user(pool: &PgPool, email: &str) -> sqlx::Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email)
        VALUES ($1, $2)
        ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .fetch_one(pool)
    .await
}
