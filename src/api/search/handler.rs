// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Net-search endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, warn};

use super::request::NetSearchRequest;
use super::response::NetSearchResponse;
use crate::api::http_server::AppState;

/// POST /v1/plugins/net-search - Answer a prompt with search material
///
/// # Request
/// - `prompt`: The user's question (required, non-empty)
///
/// # Response
/// - `result`: Instruction payload for the downstream model, or the prompt
///   unchanged when no search material could be gathered
///
/// # Errors
/// - 400 Bad Request: Empty prompt
pub async fn net_search_handler(
    State(state): State<AppState>,
    Json(request): Json<NetSearchRequest>,
) -> Result<Json<NetSearchResponse>, (StatusCode, String)> {
    debug!("Net search request: {:?}", request.prompt);

    if let Err(e) = request.validate() {
        warn!("Net search validation failed: {}", e);
        return Err((StatusCode::BAD_REQUEST, e));
    }

    let result = state.search_service.handle(&request.prompt).await;

    Ok(Json(NetSearchResponse { result }))
}
