use serde::Serialize;

use crate::config::DeploymentConfig;
use crate::domain::ticket::ValidTicket;

/// Body of `POST /rest/api/3/issue`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssuePayload {
    pub fields: IssueFields,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueFields {
    pub project: ProjectRef,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<AdfDocument>,
    #[serde(rename = "issuetype")]
    pub issue_type: IssueTypeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<AssigneeRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueTypeRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssigneeRef {
    #[serde(rename = "accountId")]
    pub account_id: String,
}

impl IssuePayload {
    /// Maps a validated request onto the deployment's fixed project, issue
    /// type and (when resolved) assignee. The description is used as given;
    /// dialect conversion happens in [`ValidTicket::with_dialect`].
    pub fn build(
        ticket: &ValidTicket,
        config: &DeploymentConfig,
        assignee_account_id: Option<String>,
    ) -> Self {
        let description = ticket
            .description
            .clone()
            .map(AdfDocument::single_paragraph);

        Self {
            fields: IssueFields {
                project: ProjectRef {
                    key: config.project_key.clone(),
                },
                summary: ticket.summary.clone(),
                description,
                issue_type: IssueTypeRef {
                    name: config.issue_type.clone(),
                },
                assignee: assignee_account_id.map(|account_id| AssigneeRef { account_id }),
            },
        }
    }
}

/// Atlassian Document Format wrapper for the description field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdfDocument {
    #[serde(rename = "type")]
    doc_type: &'static str,
    version: u8,
    content: Vec<AdfNode>,
}

impl AdfDocument {
    pub fn single_paragraph(text: String) -> Self {
        Self {
            doc_type: "doc",
            version: 1,
            content: vec![AdfNode::paragraph(text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct AdfNode {
    #[serde(rename = "type")]
    node_type: &'static str,
    content: Vec<AdfText>,
}

impl AdfNode {
    fn paragraph(text: String) -> Self {
        Self {
            node_type: "paragraph",
            content: vec![AdfText::text(text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct AdfText {
    #[serde(rename = "type")]
    text_type: &'static str,
    text: String,
}

impl AdfText {
    fn text(text: String) -> Self {
        Self {
            text_type: "text",
            text,
        }
    }
}
