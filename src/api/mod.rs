mod auth;
mod discovery;
mod handlers;
mod routes;

use tracing::info;

use crate::context::AppContext;
use crate::error::AppResult;

pub use routes::create_router;

/// Serves the tool API until Ctrl-C.
pub async fn run(ctx: AppContext) -> AppResult<()> {
    let addr = ctx.config.bind_addr;
    let app = create_router(ctx);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("tool server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("tool server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
