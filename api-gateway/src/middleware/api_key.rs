// API key authentication middleware
//
// Every route requires the `X-API-Key` header to match the configured
// per-service value; missing or mismatched keys yield 401 with the
// UNAUTHORIZED envelope.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use common::{ApiResponse, ErrorResponse};

use crate::state::AppState;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if !state.api_key().is_empty() && key == state.api_key() => {
            next.run(request).await
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::err(
                ErrorResponse::unauthorized().into_body(),
            )),
        )
            .into_response(),
    }
}
