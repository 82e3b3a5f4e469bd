//! Score composer — turns stage outputs into section scores, the composite ATS score,
//! and the ordered suggestion list.
//!
//! Section scores start at 100 and lose a fixed amount per suggestion raised for that
//! section. The composite rounds each weighted term (half to even) before summing.

use std::collections::BTreeSet;

use crate::analysis::patterns::Patterns;
use crate::analysis::tables::{AnalyzerConfig, ScoreWeights, Thresholds};
use crate::models::report::{
    AnalysisReport, DocumentType, FormatResult, JobRequirements, KeywordMatchResult,
    PersonalInfo, SectionScores,
};

const CONTACT_PENALTY: u32 = 25;
const SUMMARY_PENALTY: u32 = 33;
const EXPERIENCE_PENALTY: u32 = 25;
const EDUCATION_PENALTY: u32 = 25;

pub const WELL_OPTIMIZED: &str = "Your resume is well-optimized for ATS systems";

/// Section content extracted from one résumé.
#[derive(Debug, Clone, Default)]
pub struct ExtractedSections {
    pub summary: String,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub skills: BTreeSet<String>,
}

/// Everything the composer reads. It never mutates stage outputs, only moves them
/// into the report.
#[derive(Debug, Clone)]
pub struct ComposeInput<'a> {
    pub personal_info: PersonalInfo,
    pub sections: ExtractedSections,
    pub keyword_match: KeywordMatchResult,
    pub coverage_score: f64,
    pub format: FormatResult,
    pub job_requirements: &'a JobRequirements,
}

pub fn compose(
    input: ComposeInput<'_>,
    config: &AnalyzerConfig,
    patterns: &Patterns,
) -> AnalysisReport {
    let ComposeInput {
        personal_info,
        sections,
        keyword_match,
        coverage_score,
        format,
        job_requirements,
    } = input;
    let thresholds = &config.thresholds;

    let contact_suggestions = contact_suggestions(&personal_info);
    let summary_suggestions = summary_suggestions(&sections.summary, thresholds);
    let skills_suggestions = skills_suggestions(&sections.skills, keyword_match.score, thresholds);
    let experience_suggestions = experience_suggestions(&sections.experience, patterns);
    let education_suggestions =
        education_suggestions(&sections.education, patterns, job_requirements.require_gpa);
    let format_suggestions = if format.score < 100 {
        format.deductions.clone()
    } else {
        Vec::new()
    };

    let section_scores = SectionScores {
        contact: penalized(contact_suggestions.len(), CONTACT_PENALTY),
        summary: penalized(summary_suggestions.len(), SUMMARY_PENALTY),
        skills: keyword_match.score.clamp(0.0, 100.0),
        experience: penalized(experience_suggestions.len(), EXPERIENCE_PENALTY),
        education: penalized(education_suggestions.len(), EDUCATION_PENALTY),
        format: format.score.min(100),
    };
    let ats_score = composite_score(&section_scores, &config.weights);

    let mut suggestions: Vec<String> = [
        &contact_suggestions,
        &summary_suggestions,
        &skills_suggestions,
        &experience_suggestions,
        &education_suggestions,
        &format_suggestions,
    ]
    .into_iter()
    .flatten()
    .cloned()
    .collect();
    if suggestions.is_empty() {
        suggestions.push(WELL_OPTIMIZED.to_string());
    }

    AnalysisReport {
        personal_info,
        ats_score,
        document_type: DocumentType::Resume,
        keyword_match,
        section_score: coverage_score,
        format_score: format.score,
        education: sections.education,
        experience: sections.experience,
        projects: sections.projects,
        skills: sections.skills,
        summary: sections.summary,
        suggestions,
        contact_suggestions,
        summary_suggestions,
        skills_suggestions,
        experience_suggestions,
        education_suggestions,
        format_suggestions,
        section_scores,
    }
}

/// Report for text that did not classify as a résumé. All scores are zero.
pub fn rejected_report(document_type: DocumentType) -> AnalysisReport {
    AnalysisReport {
        document_type,
        suggestions: vec![format!(
            "This appears to be a {document_type} document. Please upload a resume for ATS analysis."
        )],
        ..Default::default()
    }
}

fn penalized(issues: usize, per_issue: u32) -> u32 {
    let penalty = u32::try_from(issues)
        .unwrap_or(u32::MAX)
        .saturating_mul(per_issue);
    100u32.saturating_sub(penalty)
}

fn composite_score(scores: &SectionScores, weights: &ScoreWeights) -> u32 {
    let terms = [
        scores.contact as f64 * weights.contact,
        scores.summary as f64 * weights.summary,
        scores.skills * weights.skills,
        scores.experience as f64 * weights.experience,
        scores.education as f64 * weights.education,
        scores.format as f64 * weights.format,
    ];
    let total: f64 = terms.iter().map(|t| t.round_ties_even()).sum();
    total.clamp(0.0, 100.0) as u32
}

fn contact_suggestions(info: &PersonalInfo) -> Vec<String> {
    let mut out = Vec::new();
    if info.email.is_empty() {
        out.push("Add your email address".to_string());
    }
    if info.phone.is_empty() {
        out.push("Add your phone number".to_string());
    }
    if info.linkedin.is_empty() {
        out.push("Add your LinkedIn profile URL".to_string());
    }
    out
}

fn summary_suggestions(summary: &str, thresholds: &Thresholds) -> Vec<String> {
    let words = summary.split_whitespace().count();
    let suggestion = if summary.is_empty() {
        Some("Add a professional summary to highlight your key qualifications")
    } else if words < thresholds.summary_min_words {
        Some("Expand your professional summary to better highlight your experience and goals")
    } else if words > thresholds.summary_max_words {
        Some("Consider making your summary more concise (aim for 50-75 words)")
    } else {
        None
    };
    suggestion.map(str::to_string).into_iter().collect()
}

fn skills_suggestions(
    skills: &BTreeSet<String>,
    keyword_score: f64,
    thresholds: &Thresholds,
) -> Vec<String> {
    let mut out = Vec::new();
    if skills.is_empty() {
        out.push("Add a dedicated skills section".to_string());
    }
    if skills.len() < thresholds.min_skill_count {
        out.push("List more relevant technical and soft skills".to_string());
    }
    if keyword_score < thresholds.keyword_match_target {
        out.push("Add more skills that match the job requirements".to_string());
    }
    out
}

fn experience_suggestions(entries: &[String], patterns: &Patterns) -> Vec<String> {
    if entries.is_empty() {
        return vec!["Add your work experience section".to_string()];
    }
    let mut out = Vec::new();
    if !entries.iter().any(|e| patterns.year.is_match(e)) {
        out.push("Include dates for each work experience".to_string());
    }
    if !entries.iter().any(|e| patterns.bullet.is_match(e)) {
        out.push("Use bullet points to list your achievements and responsibilities".to_string());
    }
    if !entries
        .iter()
        .any(|e| patterns.action_verb.is_match(&e.to_lowercase()))
    {
        out.push("Start bullet points with strong action verbs".to_string());
    }
    out
}

fn education_suggestions(
    entries: &[String],
    patterns: &Patterns,
    require_gpa: bool,
) -> Vec<String> {
    if entries.is_empty() {
        return vec!["Add your educational background".to_string()];
    }
    let mut out = Vec::new();
    if !entries.iter().any(|e| patterns.year.is_match(e)) {
        out.push("Include graduation dates".to_string());
    }
    if !entries
        .iter()
        .any(|e| patterns.degree.is_match(&e.to_lowercase()))
    {
        out.push("Specify your degree type".to_string());
    }
    if require_gpa
        && !entries
            .iter()
            .any(|e| patterns.gpa.is_match(&e.to_lowercase()))
    {
        out.push("Include your GPA if it's above 3.0".to_string());
    }
    out
}
