use tracing::{error, info, warn};

use crate::context::AppContext;
use crate::domain::diagnosis::classify;
use crate::domain::payload::IssuePayload;
use crate::domain::ticket::{TicketRequest, TicketResult};
use crate::error::{AppError, AppResult, TrackerError};

/// Outcome of the best-effort assignee lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeResolution {
    Resolved { account_id: String },
    Unresolved { warning: String },
}

impl AssigneeResolution {
    fn account_id(&self) -> Option<String> {
        match self {
            AssigneeResolution::Resolved { account_id } => Some(account_id.clone()),
            AssigneeResolution::Unresolved { .. } => None,
        }
    }

    fn warning(&self) -> Option<&str> {
        match self {
            AssigneeResolution::Resolved { .. } => None,
            AssigneeResolution::Unresolved { warning } => Some(warning),
        }
    }
}

/// Never fails: a missing assignee downgrades to a warning.
pub async fn resolve_assignee(ctx: &AppContext, email: &str) -> AssigneeResolution {
    match ctx.issue_tracker.find_user_by_email(email).await {
        Ok(user) => AssigneeResolution::Resolved {
            account_id: user.account_id,
        },
        Err(err) => {
            warn!(
                assignee = email,
                error = %err,
                "could not resolve assignee, creating ticket unassigned"
            );
            AssigneeResolution::Unresolved {
                warning: format!(
                    "Could not assign the ticket to {email} ({err}). The ticket was created without an assignee."
                ),
            }
        }
    }
}

pub async fn create_ticket(ctx: &AppContext, request: TicketRequest) -> AppResult<TicketResult> {
    let deployment = &ctx.config.deployment;
    let ticket = request
        .validate()?
        .with_dialect(deployment.markdown_dialect)?;

    let assignee = resolve_assignee(ctx, &deployment.assignee_email).await;
    let payload = IssuePayload::build(&ticket, deployment, assignee.account_id());

    let created = ctx
        .issue_tracker
        .create_issue(&payload)
        .await
        .map_err(|err| match err {
            TrackerError::Provider(err) => {
                error!(
                    status = err.status,
                    detail = %err.message,
                    project = %deployment.project_key,
                    "jira rejected ticket creation"
                );
                AppError::IssueTracker(classify(&err, deployment))
            }
            TrackerError::UnreadableResponse { status, message } => {
                error!(status, detail = %message, "jira response to ticket creation unreadable");
                AppError::Unexpected(format!(
                    "Jira answered HTTP {status} but the response could not be read; the ticket \
                     may have been created in project {}. Check Jira before retrying. ({message})",
                    deployment.project_key
                ))
            }
        })?;

    info!(key = %created.key, id = %created.id, "ticket created");
    Ok(TicketResult::created(
        created,
        &ctx.config.jira.base_url,
        assignee.warning(),
    ))
}
