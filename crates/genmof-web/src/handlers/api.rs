//! JSON endpoints: generation, export and health.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::json;

use genmof_common::error::ApiError;
use genmof_core::{Candidate, DesignRequest};

use crate::handlers::playground::DesignForm;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generator: String,
    pub candidates: Vec<Candidate>,
}

/// POST /api/generate
pub async fn api_generate(
    State(state): State<SharedState>,
    payload: Result<Json<DesignRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload?;
    let candidates = state.generate(&request)?;
    Ok(Json(GenerateResponse {
        generator: state.generator.name().to_string(),
        candidates,
    }))
}

/// GET /export/candidates.json — same fields as the playground form,
/// returned as a download.
pub async fn export_candidates(
    State(state): State<SharedState>,
    Query(form): Query<DesignForm>,
) -> Result<impl IntoResponse, ApiError> {
    let request = form.to_request()?;
    let candidates = state.generate(&request)?;
    let body = serde_json::to_string_pretty(&candidates)
        .map_err(genmof_common::GenmofError::from)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"genmof_candidates.json\""),
        ],
        body,
    ))
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "generator": state.generator.name(),
        "sessions": state.session_count().await,
    }))
}
