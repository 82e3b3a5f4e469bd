use anyhow::{Context, Result};
use regex::Regex;

/// Every regex the pipeline uses, compiled once per `Analyzer`.
#[derive(Debug)]
pub struct Patterns {
    pub email: Regex,
    pub phone: Regex,
    pub linkedin: Regex,
    pub github: Regex,
    /// Contact-like words that disqualify a leading paragraph as a summary.
    pub contact_words: Regex,
    pub format_email: Regex,
    pub format_phone: Regex,
    pub format_linkedin: Regex,
    pub year: Regex,
    pub bullet: Regex,
    pub action_verb: Regex,
    pub degree: Regex,
    pub gpa: Regex,
}

impl Patterns {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            email: Regex::new(r"[\w\.-]+@[\w\.-]+\.\w+").context("failed to compile email regex")?,
            phone: Regex::new(r"(\+\d{1,3}[-.]?)?\s*\(?\d{3}\)?[-.]?\s*\d{3}[-.]?\s*\d{4}")
                .context("failed to compile phone regex")?,
            linkedin: Regex::new(r"linkedin\.com/in/[\w-]+")
                .context("failed to compile linkedin regex")?,
            github: Regex::new(r"github\.com/[\w-]+").context("failed to compile github regex")?,
            contact_words: Regex::new(r"\b(?:email|phone|address|tel|mobile|linkedin)\b")
                .context("failed to compile contact word regex")?,
            format_email: Regex::new(r"\b[\w\.-]+@[\w\.-]+\.\w+\b")
                .context("failed to compile format email regex")?,
            format_phone: Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b")
                .context("failed to compile format phone regex")?,
            format_linkedin: Regex::new(r"linkedin\.com/\w+")
                .context("failed to compile format linkedin regex")?,
            year: Regex::new(r"\b(19|20)\d{2}\b").context("failed to compile year regex")?,
            bullet: Regex::new(r"[•\-\*]").context("failed to compile bullet regex")?,
            action_verb: Regex::new(
                r"\b(developed|managed|created|implemented|designed|led|improved)\b",
            )
            .context("failed to compile action verb regex")?,
            degree: Regex::new(r"\b(bachelor|master|phd|b\.|m\.|diploma)\b")
                .context("failed to compile degree regex")?,
            gpa: Regex::new(r"\b(gpa|cgpa|grade|percentage)\b")
                .context("failed to compile gpa regex")?,
        })
    }
}
