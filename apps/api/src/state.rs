use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable text model. Production: `LlmClient` (Gemini). Tests swap in stubs.
    pub llm: Arc<dyn TextGenerator>,
}
