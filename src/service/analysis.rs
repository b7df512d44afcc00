//! Resume analysis result as produced by the analysis service

use serde::{Deserialize, Deserializer, Serialize};

/// Skills, roles and profile details extracted from one uploaded resume.
///
/// Every field is optional on the wire. Sequences that are missing or `null`
/// become empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub suggested_roles: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub certifications: Vec<String>,

    #[serde(default, deserialize_with = "whole_years", skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub interview_questions: Vec<String>,
}

/// Raw response body: an analysis result, or an `error` message
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub error: Option<String>,

    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl AnalysisResponse {
    /// The service's error message, when present and non-empty
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

impl AnalysisResult {
    pub fn display_file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("(unnamed resume)")
    }

    pub fn experience_level_or_unknown(&self) -> &str {
        self.experience_level
            .as_deref()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or("Unknown")
    }

    /// "Mid-level (2–5 years) (~3 years)"; the year count only shows when positive
    pub fn experience_label(&self) -> String {
        match self.experience_years {
            Some(years) if years > 0 => format!("{} (~{} years)", self.experience_level_or_unknown(), years),
            _ => self.experience_level_or_unknown().to_string(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON value is accepted; only a non-negative whole number counts as a year count
fn whole_years<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_u64)
        .and_then(|years| u32::try_from(years).ok()))
}
