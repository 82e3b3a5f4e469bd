pub mod analysis;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;

pub use analysis::tables::AnalyzerConfig;
pub use analysis::Analyzer;
pub use models::report::{AnalysisReport, DocumentType, JobRequirements};
