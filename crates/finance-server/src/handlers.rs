//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use finance_advisor::{AnalysisReport, FinancialRecord, Insights, DEFAULT_CATEGORIES};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub model: String,
    pub provider_reachable: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Boundary check shared by the analysis endpoints
fn validated(record: &FinancialRecord) -> Result<(), ApiError> {
    record.validate().map_err(|e| {
        tracing::debug!("Rejected record: {}", e);
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
                code: "INVALID_RECORD".into(),
            }),
        )
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.requester.provider();
    let provider_reachable = provider.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider: provider.name().to_string(),
        model: state.requester.options().model.clone(),
        provider_reachable,
    })
}

/// Expense categories offered by the form, in canonical order
pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(DEFAULT_CATEGORIES.to_vec())
}

/// Rule-based insights only (no LLM call)
pub async fn insights_handler(
    Json(record): Json<FinancialRecord>,
) -> Result<Json<Insights>, ApiError> {
    validated(&record)?;
    Ok(Json(Insights::from_record(&record)))
}

/// Full analysis: insights plus one LLM tip
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(record): Json<FinancialRecord>,
) -> Result<Json<AnalysisReport>, ApiError> {
    validated(&record)?;

    let report = AnalysisReport::build(&state.requester, &record).await;
    Ok(Json(report))
}
