use serde::{Deserialize, Serialize};

/// A skill-gap analysis. Same shape whether it came from the model or the fallback table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub gap_analysis: String,
    pub missing_skills: Vec<String>,
    pub roadmap: String,
    pub timeline: String,
}
