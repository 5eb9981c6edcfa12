//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::matching::engine::MatchInput;
use crate::matching::keywords::PreviewReport;
use crate::matching::result::{MatchMode, MatchResult};
use crate::matching::store::NewMatchRecord;
use crate::matching::MatchError;
use crate::models::match_record::MatchRecordRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(alias = "cv_text")]
    pub resume_text: String,
    #[serde(alias = "jd_text", alias = "job_description")]
    pub job_description_text: String,
    pub user_id: Option<String>,
    /// Defaults to semantic.
    #[serde(default)]
    pub mode: MatchMode,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    /// Present when the result was stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub result: MatchResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Full match. Semantic by default; heuristic on request, or as fallback when the LLM is
/// unreachable and HEURISTIC_FALLBACK is on. Non-degenerate results are stored if a
/// store is configured.
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(request): AppJson<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let MatchRequest {
        resume_text,
        job_description_text,
        user_id,
        mode,
    } = request;
    let input = MatchInput::new(resume_text, job_description_text);

    let result = match mode {
        MatchMode::Heuristic => state.engine.analyze_heuristic(&input),
        MatchMode::Semantic => match state.engine.analyze(&input).await {
            Ok(result) => result,
            Err(MatchError::ExternalServiceUnavailable(reason))
                if state.config.heuristic_fallback =>
            {
                warn!("LLM unavailable ({reason}); falling back to heuristic match");
                state.engine.analyze_heuristic(&input)
            }
            Err(e) => return Err(e.into()),
        },
    };

    let stored = match (&state.store, input.validate().is_ok()) {
        (Some(store), true) => Some(
            store
                .save(NewMatchRecord::new(&input, &result, user_id))
                .await?,
        ),
        _ => None,
    };

    Ok(Json(MatchResponse {
        record_id: stored.as_ref().map(|r| r.id),
        created_at: stored.as_ref().map(|r| r.created_at),
        result,
    }))
}

/// POST /api/v1/preview-match
///
/// Keyword-only preview. Never calls the LLM.
pub async fn handle_preview_match(
    State(state): State<AppState>,
    AppJson(input): AppJson<MatchInput>,
) -> Result<Json<PreviewReport>, AppError> {
    Ok(Json(state.engine.preview(&input)))
}

/// GET /api/v1/matches/:id
///
/// Returns a stored match record.
pub async fn handle_get_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchRecordRow>, AppError> {
    let store = state.store.as_ref().ok_or(AppError::PersistenceDisabled)?;

    let record = store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match record {id} not found")))?;

    Ok(Json(record))
}
