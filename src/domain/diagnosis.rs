use std::fmt;

use serde::Serialize;

use crate::config::DeploymentConfig;
use crate::error::ProviderError;

/// A provider failure translated into something an operator can act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedError {
    pub http_status: u16,
    pub human_message: String,
    pub technical_detail: String,
}

impl ClassifiedError {
    pub fn message(&self) -> String {
        format!(
            "{}\n\nTechnical details: {}",
            self.human_message, self.technical_detail
        )
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ClassifiedError {}

/// Maps a provider failure to a diagnosis naming the fixed destination.
pub fn classify(error: &ProviderError, config: &DeploymentConfig) -> ClassifiedError {
    let project = &config.project_key;
    let issue_type = &config.issue_type;
    let assignee = &config.assignee_email;

    let diagnosis = match error.status {
        ProviderError::TRANSPORT => "Could not reach Jira: the request failed before any \
             HTTP response was received (network failure or timeout)."
            .to_string(),
        400 => format!(
            "Invalid request data for project {project}. Possible causes: the project \
             configuration changed, the issue type '{issue_type}' is not available in \
             {project}, required custom fields are missing, or a field value is invalid."
        ),
        401 => format!(
            "Authentication failed while creating a ticket in project {project}. The Jira \
             API token is likely expired or invalid; check JIRA_EMAIL and JIRA_API_TOKEN."
        ),
        403 => format!(
            "Access denied: the Jira account lacks permission to create '{issue_type}' issues \
             in project {project} or to assign them to {assignee}."
        ),
        404 => format!(
            "Not found: project {project} or issue type '{issue_type}' does not exist or is \
             not accessible to the configured Jira account."
        ),
        429 => format!(
            "Rate limit exceeded while creating a ticket in project {project}. Wait a moment \
             and try again."
        ),
        status => format!("Failed to create ticket in project {project} (HTTP {status})."),
    };

    ClassifiedError {
        http_status: error.status,
        human_message: format!(
            "{diagnosis}\nConfiguration: project={project}, issue type={issue_type}, \
             assignee={assignee}."
        ),
        technical_detail: error.message.clone(),
    }
}
