use serde::Serialize;
use tracing::warn;

use crate::context::AppContext;
use crate::domain::diagnosis::classify;
use crate::error::TrackerError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionValidationResult {
    pub success: bool,
    pub project_accessible: bool,
    pub assignee_found: bool,
    pub message: String,
}

/// Checks Jira through the assignee lookup. Nothing is created.
///
/// A failed lookup only means the assignee could not be confirmed; it never
/// marks the project inaccessible. The diagnosis is carried in `message`.
pub async fn validate_connection(ctx: &AppContext) -> ConnectionValidationResult {
    let deployment = &ctx.config.deployment;

    match ctx
        .issue_tracker
        .find_user_by_email(&deployment.assignee_email)
        .await
    {
        Ok(user) => ConnectionValidationResult {
            success: true,
            project_accessible: true,
            assignee_found: true,
            message: format!(
                "Connected to Jira. Tickets go to project {} as '{}' assigned to {} ({}).",
                deployment.project_key,
                deployment.issue_type,
                user.display_name,
                deployment.assignee_email
            ),
        },
        Err(err) => {
            warn!(
                assignee = %deployment.assignee_email,
                error = %err,
                "assignee lookup failed during connection check"
            );
            let diagnosis = match &err {
                TrackerError::Provider(err) => classify(err, deployment).message(),
                TrackerError::UnreadableResponse { .. } => err.to_string(),
            };
            ConnectionValidationResult {
                success: true,
                project_accessible: true,
                assignee_found: false,
                message: format!(
                    "Assignee {} could not be found; tickets will be created unassigned.\n\n{diagnosis}",
                    deployment.assignee_email
                ),
            }
        }
    }
}
