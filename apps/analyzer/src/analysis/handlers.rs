//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::report::{AnalysisReport, DocumentType, JobRequirements};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub raw_text: String,
    #[serde(default)]
    pub job_requirements: JobRequirements,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub report: AnalysisReport,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub document_type: DocumentType,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores extracted résumé text against a role. Empty or non-résumé text is not an
/// error; it comes back as a zero-score report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    check_text_size(&request.raw_text, state.config.max_text_bytes)?;

    let analyzer = state.analyzer.clone();
    let AnalyzeRequest {
        raw_text,
        job_requirements,
    } = request;
    let report = tokio::task::spawn_blocking(move || analyzer.analyze(&raw_text, &job_requirements))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?;

    let analysis_id = Uuid::new_v4();
    info!(
        %analysis_id,
        document_type = %report.document_type,
        ats_score = report.ats_score,
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        report,
    }))
}

/// POST /api/v1/classify
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    check_text_size(&request.raw_text, state.config.max_text_bytes)?;
    Ok(Json(ClassifyResponse {
        document_type: state.analyzer.classify(&request.raw_text),
    }))
}

fn check_text_size(text: &str, max_bytes: usize) -> Result<(), AppError> {
    if text.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "raw_text is {} bytes; the limit is {max_bytes}",
            text.len()
        )));
    }
    Ok(())
}
