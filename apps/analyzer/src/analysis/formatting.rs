//! Formatting checker — structural heuristics over raw lines.

use crate::analysis::patterns::Patterns;
use crate::models::report::FormatResult;

const MIN_TEXT_CHARS: usize = 300;
const BULLET_GLYPHS: &[char] = &['•', '-', '*', '→'];

const TOO_SHORT: (u32, &str) = (30, "Resume is too short");
const NO_HEADERS: (u32, &str) = (20, "No clear section headers found");
const NO_BULLETS: (u32, &str) = (20, "No bullet points found for listing details");
const DOUBLE_BLANK: (u32, &str) = (15, "Inconsistent spacing between sections");
const NO_CONTACT: (u32, &str) = (15, "Missing or improperly formatted contact information");

pub fn check_formatting(text: &str, patterns: &Patterns) -> FormatResult {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut failed = Vec::new();

    if text.chars().count() < MIN_TEXT_CHARS {
        failed.push(TOO_SHORT);
    }
    if !lines.iter().any(|l| is_upper(l)) {
        failed.push(NO_HEADERS);
    }
    if !lines
        .iter()
        .any(|l| l.trim().starts_with(BULLET_GLYPHS))
    {
        failed.push(NO_BULLETS);
    }
    if lines
        .windows(2)
        .any(|pair| pair[0].trim().is_empty() && pair[1].trim().is_empty())
    {
        failed.push(DOUBLE_BLANK);
    }
    let has_contact = [
        &patterns.format_email,
        &patterns.format_phone,
        &patterns.format_linkedin,
    ]
    .iter()
    .any(|re| re.is_match(text));
    if !has_contact {
        failed.push(NO_CONTACT);
    }

    let penalty: u32 = failed.iter().map(|(points, _)| points).sum();
    FormatResult {
        score: 100u32.saturating_sub(penalty),
        deductions: failed.iter().map(|(_, reason)| reason.to_string()).collect(),
    }
}

/// True when the line has at least one cased character and none of them are lowercase.
fn is_upper(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
