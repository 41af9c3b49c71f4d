use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::workflow::health::validate_connection;

/// Runs the connection check once; passes only when the assignee resolved.
pub async fn run(ctx: &AppContext) -> AppResult<bool> {
    let result = validate_connection(ctx).await;
    let rendered = serde_json::to_string_pretty(&result)
        .map_err(|err| AppError::Unexpected(format!("failed to render result: {err}")))?;
    println!("{rendered}");
    Ok(result.success && result.assignee_found)
}
