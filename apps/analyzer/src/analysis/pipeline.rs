//! Analyzer — runs the stages over one document and returns the report.
//!
//! Flow: classify → (résumé only) personal info, sections, keyword match, coverage,
//! formatting → compose. A non-résumé short-circuits straight to a zero-score report.

use anyhow::Result;
use tracing::debug;

use crate::analysis::classifier::classify;
use crate::analysis::composer::{compose, rejected_report, ComposeInput, ExtractedSections};
use crate::analysis::coverage::coverage_score;
use crate::analysis::formatting::check_formatting;
use crate::analysis::keyword_match::match_keywords;
use crate::analysis::patterns::Patterns;
use crate::analysis::personal_info::extract_personal_info;
use crate::analysis::segmenter::{extract_summary, SectionScanner};
use crate::analysis::tables::AnalyzerConfig;
use crate::models::report::{AnalysisReport, DocumentType, JobRequirements};

/// Section scanners built from the header table.
#[derive(Debug)]
struct Scanners {
    summary: SectionScanner,
    education: SectionScanner,
    experience: SectionScanner,
    projects: SectionScanner,
    skills: SectionScanner,
}

/// Immutable analysis engine. Build once, share by reference across threads.
#[derive(Debug)]
pub struct Analyzer {
    config: AnalyzerConfig,
    patterns: Patterns,
    scanners: Scanners,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let patterns = Patterns::compile()?;
        let closing = config.resume_indicators();
        let headers = &config.sections;
        let scanners = Scanners {
            summary: SectionScanner::new(&headers.summary, closing),
            education: SectionScanner::new(&headers.education, closing),
            experience: SectionScanner::new(&headers.experience, closing),
            projects: SectionScanner::new(&headers.projects, closing),
            skills: SectionScanner::new(&headers.skills, closing),
        };
        Ok(Self {
            config,
            patterns,
            scanners,
        })
    }

    pub fn classify(&self, text: &str) -> DocumentType {
        classify(text, &self.config)
    }

    /// Analyzes one document against a role. Never fails: missing structure degrades to
    /// empty fields, low scores, and suggestions.
    pub fn analyze(&self, text: &str, job_requirements: &JobRequirements) -> AnalysisReport {
        let document_type = self.classify(text);
        debug!(%document_type, bytes = text.len(), "document classified");
        if document_type != DocumentType::Resume {
            return rejected_report(document_type);
        }

        let personal_info = extract_personal_info(text, &self.patterns);
        let keyword_match = match_keywords(text, &job_requirements.required_skills);
        let sections = self.extract_sections(text);
        debug!(
            education = sections.education.len(),
            experience = sections.experience.len(),
            projects = sections.projects.len(),
            skills = sections.skills.len(),
            summary_words = sections.summary.split_whitespace().count(),
            "sections extracted"
        );
        let coverage = coverage_score(text, &self.config.coverage_sections);
        let format = check_formatting(text, &self.patterns);

        compose(
            ComposeInput {
                personal_info,
                sections,
                keyword_match,
                coverage_score: coverage,
                format,
                job_requirements,
            },
            &self.config,
            &self.patterns,
        )
    }

    fn extract_sections(&self, text: &str) -> ExtractedSections {
        ExtractedSections {
            summary: extract_summary(
                text,
                &self.scanners.summary,
                &self.config.thresholds,
                &self.patterns.contact_words,
            ),
            education: self.scanners.education.entries(text),
            experience: self.scanners.experience.entries(text),
            projects: self.scanners.projects.entries(text),
            skills: self
                .scanners
                .skills
                .skills(text, &self.config.skill_separators),
        }
    }
}
