use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        HealthResponse, ProgramStats, ProgramsResponse, RecommendationRequest,
        RecommendationResponse,
    },
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Ranks programs against the submitted student profile
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(
            request_id = %request_id,
            error = %rejection,
            "Rejected malformed recommendation request"
        );
        AppError::InvalidInput(rejection.body_text())
    })?;

    let (profile, limit) = request.into_profile().inspect_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Invalid recommendation request");
    })?;

    tracing::info!(
        request_id = %request_id,
        budget = profile.budget,
        max_duration = profile.max_duration,
        preferred_mode = %profile.preferred_mode,
        limit,
        "Processing recommendation request"
    );

    let recommendations = state.engine.recommend(&profile, limit);

    tracing::info!(
        request_id = %request_id,
        count = recommendations.len(),
        "Recommendations generated"
    );

    Ok(Json(RecommendationResponse::success(recommendations)))
}

/// Lists every program in the catalog
pub async fn get_programs(State(state): State<AppState>) -> Json<ProgramsResponse> {
    let programs = state.engine.programs().to_vec();
    Json(ProgramsResponse {
        total: programs.len(),
        programs,
    })
}

/// Catalog-wide statistics
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<ProgramStats>> {
    state
        .engine
        .stats()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No programs available".to_string()))
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
