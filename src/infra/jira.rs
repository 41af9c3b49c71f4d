use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, Response,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::Deserialize;
use tracing::debug;

use crate::config::{JIRA_TIMEOUT, JiraSettings};
use crate::domain::payload::IssuePayload;
use crate::domain::ticket::CreatedIssue;
use crate::error::{AppError, AppResult, ProviderError, TrackerError, TrackerResult};
use crate::services::{IssueTrackerService, TrackerUser};

pub struct JiraClient {
    http: Client,
    base_url: String,
    auth_header: String,
}

impl JiraClient {
    pub fn new(settings: &JiraSettings) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(JIRA_TIMEOUT)
            .build()
            .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            auth_header: Self::auth_header(&settings.email, &settings.api_token),
        })
    }

    fn auth_header(email: &str, token: &str) -> String {
        let credentials = format!("{email}:{token}");
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/rest/api/3/{path}", self.base_url)
    }

    async fn check_status(response: Response) -> Result<Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unable to read response>".to_string());
        Err(ProviderError::new(
            status.as_u16(),
            format!("Jira responded with {status}: {}", error_detail(&body)),
        ))
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn create_issue(&self, payload: &IssuePayload) -> TrackerResult<CreatedIssue> {
        let response = self
            .http
            .post(self.endpoint("issue"))
            .header(AUTHORIZATION, &self.auth_header)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|err| ProviderError::transport(format!("failed to call Jira: {err}")))?;

        let response = Self::check_status(response).await?;
        let status = response.status().as_u16();
        let created: CreatedIssue =
            response
                .json()
                .await
                .map_err(|err| TrackerError::UnreadableResponse {
                    status,
                    message: format!("failed to parse Jira response: {err}"),
                })?;
        debug!(key = %created.key, id = %created.id, "jira issue created");
        Ok(created)
    }

    async fn find_user_by_email(&self, email: &str) -> TrackerResult<TrackerUser> {
        let response = self
            .http
            .get(self.endpoint("user/search"))
            .query(&[("query", email)])
            .header(AUTHORIZATION, &self.auth_header)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| ProviderError::transport(format!("failed to call Jira: {err}")))?;

        let response = Self::check_status(response).await?;
        let status = response.status().as_u16();
        let users: Vec<TrackerUser> =
            response
                .json()
                .await
                .map_err(|err| TrackerError::UnreadableResponse {
                    status,
                    message: format!("failed to parse Jira user search: {err}"),
                })?;

        pick_user(users, email).ok_or_else(|| {
            ProviderError::new(404, format!("no Jira account found for {email}")).into()
        })
    }
}

fn pick_user(users: Vec<TrackerUser>, email: &str) -> Option<TrackerUser> {
    let exact = users.iter().position(|user| {
        user.email_address
            .as_deref()
            .is_some_and(|address| address.eq_ignore_ascii_case(email))
    });
    users.into_iter().nth(exact.unwrap_or(0))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: serde_json::Map<String, serde_json::Value>,
}

/// Flattens Jira's `{errorMessages, errors}` body, falling back to the raw text.
fn error_detail(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<JiraErrorBody>(body) else {
        return body.trim().to_string();
    };

    let mut parts = parsed.error_messages;
    parts.extend(parsed.errors.into_iter().map(|(field, value)| match value {
        serde_json::Value::String(text) => format!("{field}: {text}"),
        other => format!("{field}: {other}"),
    }));

    if parts.is_empty() {
        body.trim().to_string()
    } else {
        parts.join("; ")
    }
}
