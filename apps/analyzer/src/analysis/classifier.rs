//! Document classifier — decides whether text is a résumé or some other document.
//!
//! Each type scores `0.7 * density + 0.3 * frequency`, where density is the share of the
//! type's indicators present and frequency is indicator hits per word. The best type wins
//! only when its score clears `classifier_min_score`; ties keep the earlier table entry.

use crate::analysis::tables::AnalyzerConfig;
use crate::models::report::DocumentType;

const DENSITY_WEIGHT: f64 = 0.7;
const FREQUENCY_WEIGHT: f64 = 0.3;

pub fn classify(text: &str, config: &AnalyzerConfig) -> DocumentType {
    let text_lower = text.to_lowercase();
    let word_count = text_lower.split_whitespace().count();

    let mut best: Option<(DocumentType, f64)> = None;
    for entry in &config.document_types {
        let score = type_score(&text_lower, word_count, &entry.indicators);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((entry.document_type, score)),
        }
    }

    match best {
        Some((doc_type, score)) if score > config.thresholds.classifier_min_score => doc_type,
        _ => DocumentType::Unknown,
    }
}

fn type_score(text_lower: &str, word_count: usize, indicators: &[String]) -> f64 {
    if indicators.is_empty() {
        return 0.0;
    }
    let matches = indicators
        .iter()
        .filter(|kw| text_lower.contains(kw.to_lowercase().as_str()))
        .count() as f64;
    let density = matches / indicators.len() as f64;
    let frequency = matches / (word_count as f64 + 1.0);
    DENSITY_WEIGHT * density + FREQUENCY_WEIGHT * frequency
}
