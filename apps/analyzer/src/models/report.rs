use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Resume,
    Marksheet,
    Certificate,
    IdCard,
    #[default]
    Unknown,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume",
            DocumentType::Marksheet => "marksheet",
            DocumentType::Certificate => "certificate",
            DocumentType::IdCard => "id_card",
            DocumentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role a résumé is scored against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub require_gpa: bool,
}

/// Contact fields. Unmatched fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    /// Trimmed, so no leading space even where the pattern's separator matched one.
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

/// Partition of the required skills by presence in the résumé text.
/// Both lists keep the order of the input skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    pub score: f64, // 0 – 100
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatResult {
    pub score: u32, // 0 – 100
    pub deductions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionScores {
    pub contact: u32,
    pub summary: u32,
    pub skills: f64,
    pub experience: u32,
    pub education: u32,
    pub format: u32,
}

/// Terminal output of one analysis. Field names are the wire contract for the UI and storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub personal_info: PersonalInfo,
    pub ats_score: u32,
    pub document_type: DocumentType,
    pub keyword_match: KeywordMatchResult,
    /// Section keyword coverage, 0 – 100. Informational only.
    pub section_score: f64,
    pub format_score: u32,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub skills: BTreeSet<String>,
    pub summary: String,
    pub suggestions: Vec<String>,
    pub contact_suggestions: Vec<String>,
    pub summary_suggestions: Vec<String>,
    pub skills_suggestions: Vec<String>,
    pub experience_suggestions: Vec<String>,
    pub education_suggestions: Vec<String>,
    pub format_suggestions: Vec<String>,
    pub section_scores: SectionScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_serde_id_card() {
        let json = serde_json::to_string(&DocumentType::IdCard).unwrap();
        assert_eq!(json, r#""id_card""#);
        let back: DocumentType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DocumentType::IdCard);
    }

    #[test]
    fn test_document_type_default_is_unknown() {
        assert_eq!(DocumentType::default(), DocumentType::Unknown);
        assert_eq!(DocumentType::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_job_requirements_defaults_missing_fields() {
        let req: JobRequirements = serde_json::from_str("{}").unwrap();
        assert!(req.required_skills.is_empty());
        assert!(!req.require_gpa);
    }

    #[test]
    fn test_report_flattens_personal_info() {
        let report = AnalysisReport {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["email"], "jane@example.com");
        assert!(value.get("personal_info").is_none());
        assert_eq!(value["document_type"], "unknown");
        assert!(value["section_scores"].get("format").is_some());
        assert!(value["keyword_match"].get("found_skills").is_some());
    }

    #[test]
    fn test_report_skills_serialize_sorted() {
        let report = AnalysisReport {
            skills: ["Rust", "Go", "C"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["skills"], serde_json::json!(["C", "Go", "Rust"]));
    }
}
