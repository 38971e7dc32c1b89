//! Analysis Orchestrator — MATCH → REMOTE → FALLBACK.
//!
//! The model gets exactly one attempt. Transport errors, unusable text and
//! schema failures all degrade to the fallback table without surfacing.
//! Only a fallback failure (catalog inconsistency) is returned as an error.

use tracing::{info, warn};

use crate::analysis::extract::parse_analysis_response;
use crate::analysis::fallback::generate_fallback;
use crate::analysis::matcher::match_role;
use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::{build_analysis_prompt, build_chat_prompt, CHAT_UNAVAILABLE_REPLY};
use crate::analysis::AnalysisError;
use crate::llm_client::TextGenerator;

/// Produces a skill-gap analysis for `role` given the user's declared skills.
pub async fn analyze(
    llm: &dyn TextGenerator,
    role: &str,
    current_skills: &str,
) -> Result<AnalysisResult, AnalysisError> {
    // Stage MATCH
    let matched_role = match_role(role);
    info!("Starting skill gap analysis for \"{role}\" (matched to \"{matched_role}\")");

    // Stage REMOTE
    let prompt = build_analysis_prompt(matched_role, role, current_skills);
    match llm.generate_text(&prompt).await {
        Ok(text) => match parse_analysis_response(&text) {
            Ok(result) => {
                info!(
                    "Model analysis accepted with {} skills",
                    result.missing_skills.len()
                );
                return Ok(result);
            }
            Err(e) => warn!("Unusable model response, using fallback: {e}"),
        },
        Err(e) => warn!("Model call failed, using fallback: {e}"),
    }

    // Stage FALLBACK
    info!("Using fallback skill table for \"{matched_role}\"");
    generate_fallback(role, current_skills, matched_role)
}

/// Sends a free-form chat message. Never fails; returns an apology on any error.
pub async fn chat(llm: &dyn TextGenerator, message: &str, context: Option<&str>) -> String {
    let prompt = build_chat_prompt(message, context);
    match llm.generate_text(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Chat call failed: {e}");
            CHAT_UNAVAILABLE_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::analysis::catalog::lookup;
    use crate::analysis::fallback::FALLBACK_TIMELINE;
    use crate::llm_client::LlmError;

    /// Returns a canned reply (or error) and records every prompt it receives.
    struct StubGenerator {
        reply: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    fn profile_skills(role: &str) -> Vec<String> {
        lookup(role)
            .unwrap()
            .missing_skills
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_failed_call_falls_back_to_catalog() {
        let llm = StubGenerator::failing(503);
        let result = analyze(&llm, "Frontend Developer", "HTML, CSS").await.unwrap();
        assert_eq!(result.missing_skills, profile_skills("frontend developer"));
        assert_eq!(result.timeline, FALLBACK_TIMELINE);
    }

    #[tokio::test]
    async fn test_model_is_called_exactly_once() {
        let llm = StubGenerator::failing(500);
        analyze(&llm, "Backend Engineer", "Go").await.unwrap();
        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("specializing in backend developer positions"));
        assert!(calls[0].contains("career as a Backend Engineer"));
    }

    #[tokio::test]
    async fn test_valid_model_response_bypasses_fallback() {
        let llm = StubGenerator::replying(
            r#"Sure thing!
            {"gapAnalysis": "Solid basics.", "missingSkills": ["Pandas", "Statistics"],
             "roadmap": "Phase 1: Pandas", "timeline": "4 months"}"#,
        );
        let result = analyze(&llm, "Data Scientist", "Python").await.unwrap();
        assert_eq!(result.gap_analysis, "Solid basics.");
        assert_eq!(result.missing_skills, vec!["Pandas", "Statistics"]);
        assert_eq!(result.timeline, "4 months");
    }

    #[tokio::test]
    async fn test_partial_model_response_is_discarded_wholesale() {
        let llm = StubGenerator::replying(
            r#"{"gapAnalysis": "Solid basics.", "missingSkills": ["Pandas"], "roadmap": "Phase 1"}"#,
        );
        let result = analyze(&llm, "Data Scientist", "Python").await.unwrap();
        assert_eq!(result.missing_skills, profile_skills("data scientist"));
        assert_ne!(result.gap_analysis, "Solid basics.");
    }

    #[tokio::test]
    async fn test_empty_skill_list_from_model_triggers_fallback() {
        let llm = StubGenerator::replying(
            r#"{"gapAnalysis": "x", "missingSkills": [], "roadmap": "y", "timeline": "z"}"#,
        );
        let result = analyze(&llm, "java engineer", "").await.unwrap();
        assert_eq!(result.missing_skills, profile_skills("java engineer"));
    }

    #[tokio::test]
    async fn test_all_null_skill_list_from_model_triggers_fallback() {
        let llm = StubGenerator::replying(
            r#"{"gapAnalysis": "g", "missingSkills": [null, null], "roadmap": "r", "timeline": "t"}"#,
        );
        let result = analyze(&llm, "Mobile Developer", "Swift").await.unwrap();
        assert_eq!(result.missing_skills, profile_skills("mobile developer"));
        assert_eq!(result.timeline, FALLBACK_TIMELINE);
    }

    #[tokio::test]
    async fn test_prose_only_response_triggers_fallback() {
        let llm = StubGenerator::replying("I'm sorry, I can't produce JSON right now.");
        let result = analyze(&llm, "xyz123nonsense", "Excel").await.unwrap();
        assert_eq!(result.missing_skills, profile_skills("full stack developer"));
        assert!(result.gap_analysis.contains("Mapped to: full stack developer"));
    }

    #[tokio::test]
    async fn test_chat_returns_model_reply() {
        let llm = StubGenerator::replying("Learn Rust.");
        let reply = chat(&llm, "What should I learn?", Some("Role: backend")).await;
        assert_eq!(reply, "Learn Rust.");
        assert_eq!(
            llm.calls(),
            vec!["Context: Role: backend\n\nUser: What should I learn?".to_string()]
        );
    }

    #[tokio::test]
    async fn test_chat_failure_returns_apology() {
        let llm = StubGenerator::failing(429);
        let reply = chat(&llm, "Hello", None).await;
        assert_eq!(reply, CHAT_UNAVAILABLE_REPLY);
        assert_eq!(llm.calls(), vec!["Hello".to_string()]);
    }
}
