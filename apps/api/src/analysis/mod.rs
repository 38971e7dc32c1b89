// Skill-gap analysis: role catalog, role matching, model call with fallback.
// All LLM calls go through llm_client::TextGenerator.

pub mod analyzer;
pub mod catalog;
pub mod extract;
pub mod fallback;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod prompts;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The matcher produced a role with no catalog profile. The keyword and
    /// catalog tables are out of sync; this is a bug, not a user error.
    #[error("No skill profile found for role: {0}")]
    UnknownRole(String),
}
