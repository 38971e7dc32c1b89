//! Response Extractor — turns raw model text into a validated `AnalysisResult`.
//!
//! The model is untrusted: it may wrap JSON in prose or code fences, emit
//! several objects, or stop mid-object. Only the first balanced `{...}` block
//! is considered, and it must carry all four fields.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::analysis::models::AnalysisResult;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("no complete JSON object in model response")]
    NoJson,

    #[error("malformed JSON in model response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model response is missing or has an empty `{0}`")]
    MissingField(&'static str),
}

/// Loose mirror of the requested schema. Every field is optional so that a
/// missing key surfaces as `MissingField` rather than a serde error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    gap_analysis: Option<Value>,
    missing_skills: Option<Value>,
    roadmap: Option<Value>,
    timeline: Option<Value>,
}

/// Returns the first balanced `{...}` block in `text`.
///
/// Braces inside JSON string literals are ignored. Returns `None` if there is
/// no `{` or the first object never closes.
pub fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extracts, parses and validates an analysis from raw model output.
pub fn parse_analysis_response(text: &str) -> Result<AnalysisResult, ResponseError> {
    let block = extract_json_block(text).ok_or(ResponseError::NoJson)?;
    let raw: RawAnalysis = serde_json::from_str(block)?;

    let gap_analysis = truthy_text(raw.gap_analysis).ok_or(ResponseError::MissingField("gapAnalysis"))?;
    let missing_skills =
        skill_list(raw.missing_skills).ok_or(ResponseError::MissingField("missingSkills"))?;
    let roadmap = truthy_text(raw.roadmap).ok_or(ResponseError::MissingField("roadmap"))?;
    let timeline = truthy_text(raw.timeline).ok_or(ResponseError::MissingField("timeline"))?;

    Ok(AnalysisResult {
        gap_analysis,
        missing_skills,
        roadmap,
        timeline,
    })
}

/// Non-empty strings pass as-is; numbers and `true` are stringified.
/// Everything else (null, false, "", arrays, objects) is rejected.
fn truthy_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// An array with at least one non-null item. String items are kept,
/// numbers/bools stringified, nulls dropped.
fn skill_list(value: Option<Value>) -> Option<Vec<String>> {
    let Value::Array(items) = value? else {
        return None;
    };
    let skills: Vec<String> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Null => None,
            other => Some(other.to_string()),
        })
        .collect();
    if skills.is_empty() {
        None
    } else {
        Some(skills)
    }
}
