use tracing::debug;

use crate::analysis::tables::CoverageSection;

const BUCKET_POINTS: f64 = 25.0;

/// Keyword coverage across the essential résumé sections, 0 – 100.
///
/// Each bucket earns up to 25 points for the share of its keywords present.
pub fn coverage_score(text: &str, sections: &[CoverageSection]) -> f64 {
    let text_lower = text.to_lowercase();
    let total: f64 = sections
        .iter()
        .filter(|s| !s.keywords.is_empty())
        .map(|section| {
            let found = section
                .keywords
                .iter()
                .filter(|kw| text_lower.contains(kw.to_lowercase().as_str()))
                .count();
            let points =
                (found as f64 / section.keywords.len() as f64 * BUCKET_POINTS).min(BUCKET_POINTS);
            debug!(section = %section.section, found, points, "coverage bucket");
            points
        })
        .sum();
    total.clamp(0.0, 100.0)
}
