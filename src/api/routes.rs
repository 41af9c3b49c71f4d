use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::auth::require_bearer;
use super::discovery::{self, CREATE_TICKET_ENDPOINT};
use super::handlers;
use crate::context::AppContext;

pub fn create_router(ctx: AppContext) -> Router {
    let tools = Router::new()
        .route(CREATE_TICKET_ENDPOINT, post(handlers::create_ticket))
        .route_layer(middleware::from_fn_with_state(ctx.clone(), require_bearer));

    Router::new()
        .route("/discovery", get(discovery::manifest))
        .route("/health", get(handlers::health))
        .merge(tools)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
