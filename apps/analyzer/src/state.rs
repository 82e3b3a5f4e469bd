use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only engine; every request analyzes against the same tables.
    pub analyzer: Arc<Analyzer>,
}
