use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::payload::IssuePayload;
use crate::domain::ticket::CreatedIssue;
use crate::error::TrackerResult;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerUser {
    pub account_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
}

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn create_issue(&self, payload: &IssuePayload) -> TrackerResult<CreatedIssue>;

    /// Looks up an account by email. A 404 error means no account matched.
    async fn find_user_by_email(&self, email: &str) -> TrackerResult<TrackerUser>;
}
