// Résumé analysis core: document classification, section extraction, keyword match,
// formatting checks, and ATS score composition.
// Every stage is a pure function over the input text and the shared AnalyzerConfig.

pub mod classifier;
pub mod composer;
pub mod coverage;
pub mod formatting;
pub mod handlers;
pub mod keyword_match;
pub mod patterns;
pub mod personal_info;
pub mod pipeline;
pub mod segmenter;
pub mod tables;

pub use pipeline::Analyzer;
