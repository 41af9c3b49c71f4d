use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{AppConfig, JiraSettings, test_deployment};
use crate::context::AppContext;
use crate::domain::payload::IssuePayload;
use crate::domain::ticket::CreatedIssue;
use crate::error::{ProviderError, TrackerError, TrackerResult};
use crate::services::{IssueTrackerService, TrackerUser};

/// In-memory tracker recording every outbound call.
pub(crate) struct MockIssueTracker {
    pub created: Mutex<Vec<IssuePayload>>,
    pub lookups: Mutex<Vec<String>>,
    create_result: TrackerResult<CreatedIssue>,
    user_result: TrackerResult<TrackerUser>,
}

impl MockIssueTracker {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
            create_result: Ok(CreatedIssue {
                id: "10001".to_string(),
                key: "DHK-123".to_string(),
            }),
            user_result: Ok(TrackerUser {
                account_id: "acct-1".to_string(),
                display_name: "Owner".to_string(),
                email_address: Some("owner@example.com".to_string()),
            }),
        }
    }

    pub fn failing_create(mut self, status: u16, message: &str) -> Self {
        self.create_result = Err(ProviderError::new(status, message).into());
        self
    }

    pub fn unreadable_create(mut self, status: u16, message: &str) -> Self {
        self.create_result = Err(TrackerError::UnreadableResponse {
            status,
            message: message.to_string(),
        });
        self
    }

    pub fn failing_lookup(mut self, status: u16, message: &str) -> Self {
        self.user_result = Err(ProviderError::new(status, message).into());
        self
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    pub fn last_payload(&self) -> Option<IssuePayload> {
        self.created.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl IssueTrackerService for MockIssueTracker {
    async fn create_issue(&self, payload: &IssuePayload) -> TrackerResult<CreatedIssue> {
        self.created.lock().unwrap().push(payload.clone());
        self.create_result.clone()
    }

    async fn find_user_by_email(&self, email: &str) -> TrackerResult<TrackerUser> {
        self.lookups.lock().unwrap().push(email.to_string());
        self.user_result.clone()
    }
}

pub(crate) fn test_config(bearer_token: Option<&str>) -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        jira: JiraSettings {
            base_url: "https://jira.example.com".to_string(),
            email: "bot@example.com".to_string(),
            api_token: "token".to_string(),
        },
        deployment: test_deployment(),
        bearer_token: bearer_token.map(str::to_string),
    }
}

pub(crate) fn test_context(tracker: Arc<MockIssueTracker>) -> AppContext {
    AppContext::new(test_config(None), tracker)
}
