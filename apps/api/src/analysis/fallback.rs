//! Fallback Generator — builds an analysis purely from the role catalog.
//!
//! Used whenever the model call fails or returns something unusable.
//! Pure: no I/O, no clock, no randomness.

use crate::analysis::catalog::lookup;
use crate::analysis::models::AnalysisResult;
use crate::analysis::AnalysisError;

pub const FALLBACK_TIMELINE: &str = "6-8 months with consistent learning (10-15 hours/week)";

/// Generates a deterministic analysis for `matched_role`.
///
/// `skills_text` only feeds the narrative. The reported missing skills are always
/// the profile's fixed list; declared skills are not subtracted from it.
pub fn generate_fallback(
    role_text: &str,
    skills_text: &str,
    matched_role: &str,
) -> Result<AnalysisResult, AnalysisError> {
    let profile =
        lookup(matched_role).ok_or_else(|| AnalysisError::UnknownRole(matched_role.to_string()))?;

    let current_skills = parse_skill_list(skills_text);

    let declared = if current_skills.is_empty() {
        "not provided".to_string()
    } else {
        current_skills.join(", ")
    };
    let proficiency = if current_skills.is_empty() {
        "foundational level".to_string()
    } else {
        current_skills
            .iter()
            .take(2)
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    };
    let numbered = profile
        .missing_skills
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {s}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let gap_analysis = format!(
        "🎯 Analysis for {role_text} (Mapped to: {matched_role})

Based on your current skills ({declared}), you have a foundation to build upon. \
The following critical areas require focused development for a successful {matched_role} career:

Key Findings:
• Current proficiency: {proficiency}
• Primary focus areas: Advanced technical skills specific to {matched_role}
• Recommended timeframe: 6-8 months with consistent effort
• Learning approach: Structured progression from fundamentals to advanced topics

Critical Skill Gaps:
{numbered}

Success Metrics:
✓ Master at least 5 of the 8 skills to qualify for junior positions
✓ Master all 8 skills to qualify for mid-level positions
✓ Combine skills with projects for senior opportunities"
    );

    Ok(AnalysisResult {
        gap_analysis,
        missing_skills: profile.missing_skills.iter().map(|s| s.to_string()).collect(),
        roadmap: profile.roadmap.to_string(),
        timeline: FALLBACK_TIMELINE.to_string(),
    })
}

/// Splits a comma-separated skill list, trimming entries and dropping blanks.
pub fn parse_skill_list(skills_text: &str) -> Vec<&str> {
    skills_text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
