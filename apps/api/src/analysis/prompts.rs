// All LLM prompt text for the analysis module.

/// Skill-gap prompt. Replace `{matched_role}`, `{role}` and `{current_skills}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert career coach specializing in {matched_role} positions.
A user wants to pursue a career as a {role} and has these current skills: {current_skills}

CRITICAL REQUIREMENTS:
- Provide skills SPECIFIC and UNIQUE to {matched_role}
- DO NOT include generic DevOps, cloud infrastructure, or deployment tools unless they are CORE to {matched_role}
- DO NOT repeat skills from other roles
- Focus on the distinctive technical skills for THIS role only
- Generate 8 skills that are truly different from other roles

Generate a JSON response with this exact structure:
{
  "gapAnalysis": "A 2-3 sentence analysis of their current level and gaps specific to {matched_role}",
  "missingSkills": ["skill1", "skill2", "skill3", "skill4", "skill5", "skill6", "skill7", "skill8"],
  "roadmap": "Phase 1: ... \nPhase 2: ... \nPhase 3: ... \nPhase 4: ... \nPhase 5: ... \nPhase 6: ...",
  "timeline": "6-8 months"
}"#;

/// Reply used when the chat call fails for any reason.
pub const CHAT_UNAVAILABLE_REPLY: &str =
    "I'm having trouble connecting to the AI service. Please try again later.";

pub fn build_analysis_prompt(matched_role: &str, role: &str, current_skills: &str) -> String {
    // `{role}` precedes `{current_skills}` in the template, so substituting skills
    // first keeps a literal "{role}" inside the skills text from being replaced.
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{matched_role}", matched_role)
        .replacen("{current_skills}", current_skills, 1)
        .replacen("{role}", role, 1)
}

/// Prefixes the message with a context block when one is given.
pub fn build_chat_prompt(message: &str, context: Option<&str>) -> String {
    match context.filter(|c| !c.trim().is_empty()) {
        Some(context) => format!("Context: {context}\n\nUser: {message}"),
        None => message.to_string(),
    }
}
