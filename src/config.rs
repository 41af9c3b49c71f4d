use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::error::{AppError, AppResult};

pub const JIRA_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings accepted on the command line or through the environment.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Address the HTTP server binds to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0", global = true)]
    pub host: IpAddr,
    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value_t = 8000, global = true)]
    pub port: u16,
    /// Jira site, e.g. https://company.atlassian.net
    #[arg(long, env = "JIRA_BASE_URL", global = true)]
    pub jira_base_url: Option<String>,
    /// Account used for Jira basic authentication.
    #[arg(long, env = "JIRA_EMAIL", global = true)]
    pub jira_email: Option<String>,
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true, global = true)]
    pub jira_api_token: Option<String>,
    /// Project every ticket is created in.
    #[arg(long, env = "JIRA_PROJECT_KEY", global = true)]
    pub project_key: Option<String>,
    #[arg(long, env = "JIRA_ISSUE_TYPE", default_value = "Task", global = true)]
    pub issue_type: String,
    /// User every ticket is assigned to.
    #[arg(long, env = "JIRA_ASSIGNEE_EMAIL", global = true)]
    pub assignee_email: Option<String>,
    #[arg(
        long,
        env = "MARKDOWN_DIALECT",
        value_enum,
        default_value_t = MarkdownDialect::Plain,
        global = true
    )]
    pub markdown_dialect: MarkdownDialect,
    /// Shared secret callers must present as a bearer token.
    #[arg(long, env = "OPAL_BEARER_TOKEN", hide_env_values = true, global = true)]
    pub bearer_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownDialect {
    #[default]
    Plain,
    Opal,
}

impl MarkdownDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkdownDialect::Plain => "plain",
            MarkdownDialect::Opal => "opal",
        }
    }
}

impl fmt::Display for MarkdownDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed destination of every ticket created by this deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub project_key: String,
    pub issue_type: String,
    pub assignee_email: String,
    pub markdown_dialect: MarkdownDialect,
}

#[derive(Debug, Clone)]
pub struct JiraSettings {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub jira: JiraSettings,
    pub deployment: DeploymentConfig,
    pub bearer_token: Option<String>,
}

impl AppConfig {
    pub fn from_args(args: ConfigArgs) -> AppResult<Self> {
        let base_url = required(args.jira_base_url, "JIRA_BASE_URL")?;
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(AppError::Configuration(format!(
                "JIRA_BASE_URL must start with http:// or https:// (got '{base_url}')"
            )));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        let jira = JiraSettings {
            base_url,
            email: required(args.jira_email, "JIRA_EMAIL")?,
            api_token: required(args.jira_api_token, "JIRA_API_TOKEN")?,
        };

        let deployment = DeploymentConfig {
            project_key: required(args.project_key, "JIRA_PROJECT_KEY")?,
            issue_type: required(Some(args.issue_type), "JIRA_ISSUE_TYPE")?,
            assignee_email: required(args.assignee_email, "JIRA_ASSIGNEE_EMAIL")?,
            markdown_dialect: args.markdown_dialect,
        };

        let bearer_token = args
            .bearer_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Ok(Self {
            bind_addr: SocketAddr::new(args.host, args.port),
            jira,
            deployment,
            bearer_token,
        })
    }
}

fn required(value: Option<String>, name: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Configuration(format!("{name} not configured")))
}

#[cfg(test)]
pub(crate) fn test_deployment() -> DeploymentConfig {
    DeploymentConfig {
        project_key: "DHK".to_string(),
        issue_type: "Task".to_string(),
        assignee_email: "owner@example.com".to_string(),
        markdown_dialect: MarkdownDialect::Plain,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    fn parse(extra: &[&str]) -> ConfigArgs {
        let mut argv = vec![
            "opal-jira",
            "--jira-base-url",
            "https://jira.example.com/",
            "--jira-email",
            "bot@example.com",
            "--jira-api-token",
            "secret-token",
            "--project-key",
            "DHK",
            "--assignee-email",
            "owner@example.com",
        ];
        argv.extend_from_slice(extra);
        TestCli::try_parse_from(argv).unwrap().config
    }

    #[test]
    fn builds_deployment_from_flags() {
        let config = AppConfig::from_args(parse(&["--markdown-dialect", "opal"])).unwrap();
        assert_eq!(config.jira.base_url, "https://jira.example.com");
        assert_eq!(config.deployment.project_key, "DHK");
        assert_eq!(config.deployment.issue_type, "Task");
        assert_eq!(config.deployment.markdown_dialect, MarkdownDialect::Opal);
        assert!(config.bearer_token.is_none());
    }

    #[test]
    fn blank_bearer_token_disables_auth() {
        let config = AppConfig::from_args(parse(&["--bearer-token", "   "])).unwrap();
        assert!(config.bearer_token.is_none());
    }

    #[test]
    fn rejects_missing_project_key() {
        let mut args = parse(&[]);
        args.project_key = Some("  ".to_string());
        let err = AppConfig::from_args(args).unwrap_err();
        assert!(err.to_string().contains("JIRA_PROJECT_KEY"));
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let mut args = parse(&[]);
        args.jira_base_url = Some("jira.example.com".to_string());
        assert!(matches!(
            AppConfig::from_args(args),
            Err(AppError::Configuration(_))
        ));
    }
}
