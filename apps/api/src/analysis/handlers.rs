//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::extract_page;
use crate::models::tag_record::TagRecord;
use crate::scoring::{
    build_previews, evaluate_all, summarize, EvaluatedCheck, Previews, ScoreSummary,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl AnalyzeRequest {
    fn url(&self) -> Result<&str, AppError> {
        match self.url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(AppError::Validation("URL is required".to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub summary: ScoreSummary,
    pub checks: Vec<EvaluatedCheck>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub tags: TagRecord,
    pub summary: ScoreSummary,
    pub checks: Vec<EvaluatedCheck>,
    pub previews: Previews,
    pub analyzed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Fetches the page and returns the raw tag record. Scoring is left to the caller.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<TagRecord>, AppError> {
    let Json(request) = payload?;
    let record = extract_page(state.fetcher.as_ref(), request.url()?).await?;
    Ok(Json(record))
}

/// POST /api/v1/report
///
/// Fetch, extract and score in one call.
pub async fn handle_report(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let Json(request) = payload?;
    let tags = extract_page(state.fetcher.as_ref(), request.url()?).await?;

    let checks = evaluate_all(&tags);
    let summary = summarize(&checks);
    let previews = build_previews(&tags);

    tracing::info!(
        "Scored {}: score={} rating={} passed={} warnings={} failed={}",
        tags.url,
        summary.score,
        summary.rating,
        summary.passed,
        summary.warnings,
        summary.failed
    );

    Ok(Json(AnalysisReport {
        tags,
        summary,
        checks,
        previews,
        analyzed_at: Utc::now(),
    }))
}

/// POST /api/v1/score
///
/// Scores a tag record the caller already extracted. No network access.
pub async fn handle_score(
    payload: Result<Json<TagRecord>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(record) = payload?;
    if record.url.trim().is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let checks = evaluate_all(&record);
    let summary = summarize(&checks);

    Ok(Json(ScoreResponse { summary, checks }))
}
