//! Plain-text report rendering for stored analyses.
//!
//! Stored `skills_gap` JSON is read leniently: rows written by older clients
//! may hold a JSON-encoded string, a bare skill list, or be missing fields.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

const REPORT_TITLE: &str = "SKILLLENS AI - SKILL GAP ANALYSIS REPORT";
const RULE_WIDTH: usize = 60;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAnalysis {
    gap_analysis: Option<String>,
    missing_skills: Option<Value>,
    roadmap: Option<String>,
    timeline: Option<String>,
}

impl StoredAnalysis {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_default(),
            Value::String(s) => match serde_json::from_str::<Value>(s) {
                Ok(inner @ Value::Object(_)) => Self::from_value(&inner),
                _ => Self {
                    missing_skills: Some(value.clone()),
                    ..Self::default()
                },
            },
            Value::Null => Self::default(),
            other => Self {
                missing_skills: Some(other.clone()),
                ..Self::default()
            },
        }
    }
}

/// Inputs for a single report.
pub struct ReportInput<'a> {
    pub email: &'a str,
    pub created_at: DateTime<Utc>,
    pub role: &'a str,
    pub skills_gap: &'a Value,
    /// The row's `roadmap` column; used when the stored analysis has none.
    pub roadmap: &'a str,
}

pub fn render_report(input: &ReportInput<'_>) -> String {
    let stored = StoredAnalysis::from_value(input.skills_gap);
    let rule = "=".repeat(RULE_WIDTH);
    let date = input.created_at.format("%B %-d, %Y");

    let mut report = format!("{REPORT_TITLE}\n{rule}\n\n");
    report.push_str(&format!("Email: {}\n", input.email));
    report.push_str(&format!("Date: {date}\n"));
    report.push_str(&format!("Target Role: {}\n\n", input.role));

    report.push_str(&section_header(&rule, "SKILLS GAP ANALYSIS"));
    if let Some(gap) = stored.gap_analysis.as_deref().filter(|g| !g.is_empty()) {
        report.push_str(&format!("{gap}\n\n"));
    }
    match &stored.missing_skills {
        Some(Value::Array(skills)) => {
            report.push_str("Missing Skills:\n");
            for (i, skill) in skills.iter().enumerate() {
                report.push_str(&format!("{}. {}\n", i + 1, display_value(skill)));
            }
            report.push('\n');
        }
        Some(Value::Null) | None => {}
        Some(other) => {
            report.push_str(&format!("Missing Skills:\n1. {}\n\n", display_value(other)));
        }
    }

    report.push_str(&section_header(&rule, "LEARNING ROADMAP"));
    if let Some(timeline) = stored.timeline.as_deref().filter(|t| !t.is_empty()) {
        report.push_str(&format!("Timeline: {timeline}\n\n"));
    }
    let roadmap = stored
        .roadmap
        .as_deref()
        .filter(|r| !r.is_empty())
        .unwrap_or(input.roadmap);
    if !roadmap.is_empty() {
        report.push_str(&format!("Learning Roadmap:\n{roadmap}\n"));
    }

    report
}

/// `skillgap-<role>-<unix millis>.txt`, spaces turned into dashes and anything
/// that is unsafe in a quoted header value dropped.
pub fn report_filename(role: &str, now: DateTime<Utc>) -> String {
    let slug: String = role
        .trim()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') => Some(c),
            _ => None,
        })
        .collect();
    format!("skillgap-{slug}-{}.txt", now.timestamp_millis())
}

fn section_header(rule: &str, title: &str) -> String {
    format!("{rule}\n{title}\n{rule}\n\n")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
