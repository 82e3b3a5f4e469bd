//! Analyzer tables — keyword vocabularies, thresholds, and weights.
//!
//! Built once at startup and shared read-only by every analysis. Nothing in the
//! pipeline mutates these after construction.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::report::DocumentType;

/// Indicator phrases for one document type. Phrases are matched as lowercase substrings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentIndicators {
    pub document_type: DocumentType,
    pub indicators: Vec<String>,
}

/// Header phrases that open each extractable résumé section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeaderTable {
    pub summary: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub skills: Vec<String>,
}

/// Keywords whose presence counts towards one coverage bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageSection {
    pub section: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Winning classifier score must be strictly greater than this.
    pub classifier_min_score: f64,
    pub summary_min_words: usize,
    pub summary_max_words: usize,
    pub positional_summary_lines: usize,
    /// Leading paragraph must have more words than this to count as a summary.
    pub positional_summary_min_words: usize,
    pub keyword_match_target: f64,
    pub min_skill_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub contact: f64,
    pub summary: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub format: f64,
}

/// Full analyzer configuration. `Default` yields the built-in tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Ordered by tie-break priority.
    pub document_types: Vec<DocumentIndicators>,
    pub sections: SectionHeaderTable,
    pub skill_separators: Vec<String>,
    pub coverage_sections: Vec<CoverageSection>,
    pub thresholds: Thresholds,
    pub weights: ScoreWeights,
}

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SectionHeaderTable {
    fn default() -> Self {
        Self {
            summary: phrases(&[
                "summary",
                "professional summary",
                "career summary",
                "objective",
                "career objective",
                "professional objective",
                "about me",
                "profile",
                "professional profile",
                "career profile",
                "overview",
                "skill summary",
            ]),
            education: phrases(&[
                "education",
                "academic",
                "qualification",
                "degree",
                "university",
                "college",
                "school",
                "institute",
                "certification",
                "diploma",
                "bachelor",
                "master",
                "phd",
                "b.tech",
                "m.tech",
                "b.e",
                "m.e",
                "b.sc",
                "m.sc",
                "bca",
                "mca",
                "b.com",
                "m.com",
                "b.cs-it",
                "imca",
                "bba",
                "mba",
                "honors",
                "scholarship",
            ]),
            experience: phrases(&[
                "experience",
                "employment",
                "work history",
                "professional experience",
                "work experience",
                "career history",
                "professional background",
                "employment history",
                "job history",
                "positions held",
                "job title",
                "job responsibilities",
                "job description",
                "job summary",
            ]),
            projects: phrases(&[
                "projects",
                "personal projects",
                "academic projects",
                "key projects",
                "major projects",
                "professional projects",
                "project experience",
                "relevant projects",
                "featured projects",
                "latest projects",
                "top projects",
            ]),
            skills: phrases(&[
                "skills",
                "technical skills",
                "competencies",
                "expertise",
                "core competencies",
                "professional skills",
                "key skills",
                "technical expertise",
                "proficiencies",
                "qualifications",
                "top skills",
                "key skill",
                "major skill",
                "personal skill",
                "soft skills",
                "soft skill",
                "soft skillset",
            ]),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            classifier_min_score: 0.15,
            summary_min_words: 30,
            summary_max_words: 100,
            positional_summary_lines: 5,
            positional_summary_min_words: 10,
            keyword_match_target: 70.0,
            min_skill_count: 5,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            contact: 0.10,
            summary: 0.10,
            skills: 0.30,
            experience: 0.20,
            education: 0.10,
            format: 0.20,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            document_types: vec![
                DocumentIndicators {
                    document_type: DocumentType::Resume,
                    indicators: phrases(&[
                        "experience",
                        "education",
                        "skills",
                        "work",
                        "project",
                        "objective",
                        "summary",
                        "employment",
                        "qualification",
                        "achievements",
                    ]),
                },
                DocumentIndicators {
                    document_type: DocumentType::Marksheet,
                    indicators: phrases(&[
                        "grade",
                        "marks",
                        "score",
                        "semester",
                        "cgpa",
                        "sgpa",
                        "examination",
                        "result",
                        "academic year",
                        "percentage",
                    ]),
                },
                DocumentIndicators {
                    document_type: DocumentType::Certificate,
                    indicators: phrases(&[
                        "certificate",
                        "certification",
                        "awarded",
                        "completed",
                        "achievement",
                        "training",
                        "course completion",
                        "qualified",
                    ]),
                },
                DocumentIndicators {
                    document_type: DocumentType::IdCard,
                    indicators: phrases(&[
                        "id card",
                        "identity",
                        "student id",
                        "employee id",
                        "valid until",
                        "date of issue",
                        "identification",
                    ]),
                },
            ],
            sections: SectionHeaderTable::default(),
            skill_separators: phrases(&[",", "•", "|", "/", "\\", "·", ">", "-", "–", "―"]),
            coverage_sections: vec![
                CoverageSection {
                    section: "contact".to_string(),
                    keywords: phrases(&["email", "phone", "address", "linkedin"]),
                },
                CoverageSection {
                    section: "education".to_string(),
                    keywords: phrases(&[
                        "education",
                        "university",
                        "college",
                        "degree",
                        "academic",
                    ]),
                },
                CoverageSection {
                    section: "experience".to_string(),
                    keywords: phrases(&["experience", "work", "employment", "job", "internship"]),
                },
                CoverageSection {
                    section: "skills".to_string(),
                    keywords: phrases(&[
                        "skills",
                        "technologies",
                        "tools",
                        "proficiencies",
                        "expertise",
                    ]),
                },
            ],
            thresholds: Thresholds::default(),
            weights: ScoreWeights::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Reads a JSON config file. Omitted fields keep their built-in defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read analyzer config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse analyzer config {}", path.display()))
    }

    /// Indicator phrases of the résumé document type.
    ///
    /// Doubles as the vocabulary that closes an open section during segmentation.
    pub fn resume_indicators(&self) -> &[String] {
        self.document_types
            .iter()
            .find(|d| d.document_type == DocumentType::Resume)
            .map(|d| d.indicators.as_slice())
            .unwrap_or(&[])
    }
}
