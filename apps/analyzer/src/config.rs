use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::tables::AnalyzerConfig;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Requests whose `raw_text` exceeds this many bytes are rejected.
    pub max_text_bytes: usize,
    /// Optional JSON file overriding the built-in analyzer tables.
    pub analyzer_config: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_text_bytes: std::env::var("MAX_TEXT_BYTES")
                .unwrap_or_else(|_| "200000".to_string())
                .parse::<usize>()
                .context("MAX_TEXT_BYTES must be a non-negative integer")?,
            analyzer_config: std::env::var("ANALYZER_CONFIG").ok().map(PathBuf::from),
        })
    }

    /// Built-in tables, or the file named by `ANALYZER_CONFIG`.
    pub fn load_analyzer_config(&self) -> Result<AnalyzerConfig> {
        match &self.analyzer_config {
            Some(path) => AnalyzerConfig::load(path),
            None => Ok(AnalyzerConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(path: Option<PathBuf>) -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_text_bytes: 1000,
            analyzer_config: path,
        }
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let analyzer = config_with(None).load_analyzer_config().unwrap();
        assert_eq!(analyzer.thresholds.summary_min_words, 30);
    }

    #[test]
    fn test_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{"thresholds": {"min_skill_count": 8}}"#).unwrap();
        let analyzer = config_with(Some(file.path().to_path_buf()))
            .load_analyzer_config()
            .unwrap();
        assert_eq!(analyzer.thresholds.min_skill_count, 8);
    }

    #[test]
    fn test_bad_path_errors() {
        assert!(config_with(Some(PathBuf::from("/nonexistent.json")))
            .load_analyzer_config()
            .is_err());
    }
}
