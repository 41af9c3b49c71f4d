//! Tool-discovery manifest read by the automation platform.

use axum::Json;
use serde::Serialize;

pub const CREATE_TICKET_TOOL: &str = "create_jira_ticket";
pub const CREATE_TICKET_ENDPOINT: &str = "/tools/create_jira_ticket";

#[derive(Debug, Serialize)]
pub struct DiscoveryManifest {
    pub functions: Vec<ToolDefinition>,
}

#[derive(Debug, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ToolParameter>,
    pub endpoint: &'static str,
    pub http_method: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ToolParameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: &'static str,
    pub description: &'static str,
    pub required: bool,
}

pub fn create_ticket_tool() -> ToolDefinition {
    ToolDefinition {
        name: CREATE_TICKET_TOOL,
        description: "Create a Jira ticket in the configured project. The project, issue type and assignee are fixed by the deployment.",
        parameters: vec![
            ToolParameter {
                name: "summary",
                param_type: "string",
                description: "Short title of the ticket (1-255 characters).",
                required: true,
            },
            ToolParameter {
                name: "description",
                param_type: "string",
                description: "Detailed description of the work (up to 32767 characters).",
                required: false,
            },
        ],
        endpoint: CREATE_TICKET_ENDPOINT,
        http_method: "POST",
    }
}

pub async fn manifest() -> Json<DiscoveryManifest> {
    Json(DiscoveryManifest {
        functions: vec![create_ticket_tool()],
    })
}
