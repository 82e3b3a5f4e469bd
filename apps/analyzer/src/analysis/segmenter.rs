//! Section segmenter — isolates the lines that belong to one named résumé section.
//!
//! One line-scanning state machine serves every section. A line containing one of the
//! section's header phrases opens the section; a line that is exactly a header phrase is
//! dropped, otherwise it is kept as content. While inside, a blank line closes the current
//! entry and a line containing a closing phrase (another section's vocabulary) closes the
//! section. What happens to a closed entry is up to the caller's flush closure:
//! joined into one entry, split into skill tokens, or folded into a summary.

use std::collections::BTreeSet;

use regex::Regex;

use crate::analysis::tables::Thresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside,
}

/// Lowercased header and closing vocabularies for one section.
#[derive(Debug, Clone)]
pub struct SectionScanner {
    headers: Vec<String>,
    closing: Vec<String>,
}

impl SectionScanner {
    pub fn new(headers: &[String], closing: &[String]) -> Self {
        let normalize = |items: &[String]| {
            items
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        };
        Self {
            headers: normalize(headers),
            closing: normalize(closing),
        }
    }

    fn is_header(&self, line_lower: &str) -> bool {
        self.headers.iter().any(|h| line_lower.contains(h.as_str()))
    }

    fn is_bare_header(&self, line_lower: &str) -> bool {
        self.headers.iter().any(|h| h == line_lower)
    }

    fn is_closing(&self, line_lower: &str) -> bool {
        self.closing.iter().any(|k| line_lower.contains(k.as_str()))
    }

    /// Runs the state machine, handing every completed block of lines to `flush`.
    pub fn scan<'t, F>(&self, text: &'t str, mut flush: F)
    where
        F: FnMut(&[&'t str]),
    {
        let mut state = ScanState::Outside;
        let mut block: Vec<&'t str> = Vec::new();

        for raw_line in text.split('\n') {
            let line = raw_line.trim();
            let line_lower = line.to_lowercase();

            // Header lines (re)open the section in either state.
            if self.is_header(&line_lower) {
                if !self.is_bare_header(&line_lower) {
                    block.push(line);
                }
                state = ScanState::Inside;
                continue;
            }

            if state == ScanState::Outside {
                continue;
            }

            if line.is_empty() {
                if !block.is_empty() {
                    flush(&block);
                    block.clear();
                }
            } else if self.is_closing(&line_lower) {
                if !block.is_empty() {
                    flush(&block);
                    block.clear();
                }
                state = ScanState::Outside;
            } else {
                block.push(line);
            }
        }

        if !block.is_empty() {
            flush(&block);
        }
    }

    /// One entry per block, lines joined with a space.
    pub fn entries(&self, text: &str) -> Vec<String> {
        let mut entries = Vec::new();
        self.scan(text, |block| entries.push(block.join(" ")));
        entries
    }

    /// Skill tokens from every block, split on the configured separators.
    pub fn skills(&self, text: &str, separators: &[String]) -> BTreeSet<String> {
        let mut skills = BTreeSet::new();
        self.scan(text, |block| {
            split_skills(&block.join(" "), separators, &mut skills);
        });
        skills
    }
}

/// Splits `text` on each separator it contains and collects the trimmed tokens.
///
/// Each separator splits the whole text independently, so a block mixing separators
/// yields tokens from every split. Text with no separator contributes nothing.
fn split_skills(text: &str, separators: &[String], out: &mut BTreeSet<String>) {
    for sep in separators.iter().filter(|s| !s.is_empty()) {
        if text.contains(sep.as_str()) {
            out.extend(
                text.split(sep.as_str())
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            );
        }
    }
}

/// Summary text: the leading paragraph when it reads like one, followed by every
/// block found under a summary header.
pub fn extract_summary(
    text: &str,
    scanner: &SectionScanner,
    thresholds: &Thresholds,
    contact_words: &Regex,
) -> String {
    let mut parts = Vec::new();
    if let Some(lead) = leading_paragraph(text, scanner, thresholds, contact_words) {
        parts.push(lead);
    }
    parts.extend(scanner.entries(text));
    parts.join(" ")
}

fn leading_paragraph(
    text: &str,
    scanner: &SectionScanner,
    thresholds: &Thresholds,
    contact_words: &Regex,
) -> Option<String> {
    let first_lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(thresholds.positional_summary_lines)
        .collect();

    if first_lines.is_empty()
        || first_lines
            .iter()
            .any(|l| scanner.is_bare_header(&l.to_lowercase()))
    {
        return None;
    }

    let joined = first_lines.join(" ");
    if joined.split_whitespace().count() <= thresholds.positional_summary_min_words {
        return None;
    }
    if contact_words.is_match(&joined.to_lowercase()) {
        return None;
    }
    Some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::patterns::Patterns;
    use crate::analysis::tables::AnalyzerConfig;

    fn scanner_for(headers: &[&str]) -> SectionScanner {
        let config = AnalyzerConfig::default();
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        SectionScanner::new(&headers, config.resume_indicators())
    }

    fn default_scanner(pick: impl Fn(&AnalyzerConfig) -> &Vec<String>) -> SectionScanner {
        let config = AnalyzerConfig::default();
        SectionScanner::new(pick(&config), config.resume_indicators())
    }

    #[test]
    fn test_bare_header_is_dropped() {
        let scanner = scanner_for(&["education"]);
        let text = "EDUCATION\nB.Tech Computer Science, XYZ University, 2020";
        assert_eq!(
            scanner.entries(text),
            vec!["B.Tech Computer Science, XYZ University, 2020".to_string()]
        );
    }

    #[test]
    fn test_header_with_content_is_kept() {
        let scanner = scanner_for(&["projects"]);
        let text = "Projects: Compiler in Rust\nA toy compiler";
        assert_eq!(
            scanner.entries(text),
            vec!["Projects: Compiler in Rust A toy compiler".to_string()]
        );
    }

    #[test]
    fn test_blank_line_splits_entries_and_stays_inside() {
        let scanner = scanner_for(&["projects"]);
        let text = "PROJECTS\nParser\nFast\n\nLinter\n\n\nFormatter";
        assert_eq!(
            scanner.entries(text),
            vec![
                "Parser Fast".to_string(),
                "Linter".to_string(),
                "Formatter".to_string()
            ]
        );
    }

    #[test]
    fn test_foreign_header_closes_section() {
        let scanner = scanner_for(&["projects"]);
        let text = "PROJECTS\nParser\nEDUCATION\nMIT\nmore";
        assert_eq!(scanner.entries(text), vec!["Parser".to_string()]);
    }

    #[test]
    fn test_lines_before_header_ignored() {
        let scanner = scanner_for(&["projects"]);
        let text = "Jane Doe\nRandom text\nPROJECTS\nParser";
        assert_eq!(scanner.entries(text), vec!["Parser".to_string()]);
    }

    #[test]
    fn test_header_reopens_after_close() {
        let scanner = scanner_for(&["projects"]);
        let text = "PROJECTS\nParser\nSKILLS\nRust\nPROJECTS\nLinter";
        assert_eq!(
            scanner.entries(text),
            vec!["Parser".to_string(), "Linter".to_string()]
        );
    }

    #[test]
    fn test_no_header_yields_nothing() {
        let scanner = scanner_for(&["projects"]);
        assert!(scanner.entries("just some text\nnothing else").is_empty());
        assert!(scanner.entries("").is_empty());
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let scanner = scanner_for(&["Projects"]);
        assert_eq!(scanner.entries("pRoJeCtS\nParser"), vec!["Parser".to_string()]);
    }

    #[test]
    fn test_skills_split_on_commas() {
        let scanner = default_scanner(|c| &c.sections.skills);
        let separators = AnalyzerConfig::default().skill_separators;
        let skills = scanner.skills("SKILLS\nRust, Go, Python", &separators);
        let expected: BTreeSet<String> =
            ["Rust", "Go", "Python"].iter().map(|s| s.to_string()).collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_skills_deduplicate() {
        let scanner = default_scanner(|c| &c.sections.skills);
        let separators = AnalyzerConfig::default().skill_separators;
        let skills = scanner.skills("SKILLS\nRust, Rust\n\nRust, Go", &separators);
        assert_eq!(skills.len(), 2);
        assert!(skills.contains("Rust"));
        assert!(skills.contains("Go"));
    }

    #[test]
    fn test_skills_without_separator_contribute_nothing() {
        let scanner = default_scanner(|c| &c.sections.skills);
        let separators = AnalyzerConfig::default().skill_separators;
        assert!(scanner.skills("SKILLS\nRust", &separators).is_empty());
    }

    #[test]
    fn test_skills_each_separator_splits_whole_block() {
        let scanner = default_scanner(|c| &c.sections.skills);
        let separators = AnalyzerConfig::default().skill_separators;
        let skills = scanner.skills("SKILLS\nRust, Go | SQL", &separators);
        let expected: BTreeSet<String> = ["Rust", "Go | SQL", "Rust, Go", "SQL"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(skills, expected);
    }

    struct SummaryFixture {
        config: AnalyzerConfig,
        scanner: SectionScanner,
        patterns: Patterns,
    }

    impl SummaryFixture {
        fn new() -> Self {
            let config = AnalyzerConfig::default();
            let scanner = SectionScanner::new(&config.sections.summary, config.resume_indicators());
            Self {
                config,
                scanner,
                patterns: Patterns::compile().unwrap(),
            }
        }

        fn summary(&self, text: &str) -> String {
            extract_summary(
                text,
                &self.scanner,
                &self.config.thresholds,
                &self.patterns.contact_words,
            )
        }

        fn leading(&self, text: &str) -> Option<String> {
            leading_paragraph(
                text,
                &self.scanner,
                &self.config.thresholds,
                &self.patterns.contact_words,
            )
        }
    }

    #[test]
    fn test_summary_from_header() {
        let fx = SummaryFixture::new();
        let summary = fx.summary("Jane Doe\nSUMMARY\nBackend engineer who ships.");
        assert_eq!(summary, "Backend engineer who ships.");
    }

    #[test]
    fn test_summary_from_leading_paragraph() {
        let fx = SummaryFixture::new();
        let text = "\n\nSeasoned backend engineer building reliable distributed systems\n\
            with a focus on latency and correctness for payment platforms";
        let summary = fx.summary(text);
        assert!(summary.starts_with("Seasoned backend engineer"));
        assert!(summary.ends_with("payment platforms"));
    }

    #[test]
    fn test_leading_paragraph_rejected_with_contact_words() {
        let fx = SummaryFixture::new();
        let text = "Jane Doe\n\
            Email jane at example dot com and call my phone any time today please";
        assert!(fx.leading(text).is_none());
    }

    #[test]
    fn test_leading_paragraph_rejected_when_short() {
        let fx = SummaryFixture::new();
        assert!(fx.leading("Jane Doe\nEngineer").is_none());
    }

    #[test]
    fn test_leading_paragraph_needs_more_than_min_words() {
        let fx = SummaryFixture::new();
        let ten = "one two three four five\nsix seven eight nine ten";
        assert!(fx.leading(ten).is_none());

        let eleven = "one two three four five\nsix seven eight nine ten eleven";
        assert_eq!(
            fx.leading(eleven).as_deref(),
            Some("one two three four five six seven eight nine ten eleven")
        );
    }

    #[test]
    fn test_leading_paragraph_takes_first_five_lines() {
        let fx = SummaryFixture::new();
        let text = "alpha beta gamma\n\ndelta epsilon zeta\neta theta iota\n\
            kappa lambda mu\nnu xi omicron\nrho sigma tau";
        assert_eq!(
            fx.leading(text).as_deref(),
            Some(
                "alpha beta gamma delta epsilon zeta eta theta iota \
                 kappa lambda mu nu xi omicron"
            )
        );
    }

    #[test]
    fn test_leading_paragraph_rejected_with_bare_header() {
        let fx = SummaryFixture::new();
        let text = "Jane Doe\nPROFILE\n\
            Seasoned backend engineer building reliable distributed systems";
        assert!(fx.leading(text).is_none());
    }

    #[test]
    fn test_leading_paragraph_and_header_both_kept() {
        let fx = SummaryFixture::new();
        let text = "Seasoned backend engineer building reliable distributed systems at scale\n\
            Career objective: lead a platform team";
        let summary = fx.summary(text);
        assert!(summary.starts_with("Seasoned backend engineer"));
        assert!(summary.ends_with("Career objective: lead a platform team"));
    }
}
