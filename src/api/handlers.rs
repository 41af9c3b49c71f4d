use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, instrument};

use crate::context::AppContext;
use crate::domain::ticket::{TicketRequest, TicketResult};
use crate::error::{AppError, ValidationError};
use crate::workflow::health::{ConnectionValidationResult, validate_connection};
use crate::workflow::ticket;

/// Tool call body: the platform wraps arguments in `parameters`, direct
/// callers may send them bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ToolInvocation {
    Wrapped { parameters: TicketRequest },
    Bare(TicketRequest),
}

impl ToolInvocation {
    fn into_request(self) -> TicketRequest {
        match self {
            ToolInvocation::Wrapped { parameters } => parameters,
            ToolInvocation::Bare(request) => request,
        }
    }
}

#[instrument(skip_all)]
pub async fn create_ticket(
    State(ctx): State<AppContext>,
    invocation: Result<Json<ToolInvocation>, JsonRejection>,
) -> Result<Json<TicketResult>, AppError> {
    let Json(invocation) =
        invocation.map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()))?;
    let result = ticket::create_ticket(&ctx, invocation.into_request()).await?;
    Ok(Json(result))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub jira: ConnectionValidationResult,
}

#[instrument(skip_all)]
pub async fn health(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    let jira = validate_connection(&ctx).await;
    Json(HealthResponse {
        status: if jira.success && jira.assignee_found {
            "healthy"
        } else {
            "degraded"
        },
        jira,
    })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": err.to_string() }),
            ),
            AppError::IssueTracker(classified) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "success": false,
                    "error": classified.message(),
                    "httpStatus": classified.http_status,
                }),
            ),
            AppError::Configuration(_) | AppError::Unexpected(_) | AppError::Io(_) => {
                error!("tool call failed: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "error": format!("Failed to create ticket: {self}"),
                    }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
