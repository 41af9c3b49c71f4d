use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::context::AppContext;

/// Rejects tool calls whose bearer token does not exactly match the
/// configured secret. With no secret configured every call passes.
pub async fn require_bearer(State(ctx): State<AppContext>, request: Request, next: Next) -> Response {
    let Some(expected) = ctx.config.bearer_token.as_deref() else {
        return next.run(request).await;
    };

    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let rejection = match presented {
        Some(token) if token == expected => None,
        Some(_) => Some("invalid bearer token"),
        None => Some("missing bearer token"),
    };

    match rejection {
        None => next.run(request).await,
        Some(reason) => {
            warn!(path = %request.uri().path(), reason, "rejected tool call");
            unauthorized(reason)
        }
    }
}

fn unauthorized(reason: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "error": reason })),
    )
        .into_response()
}
