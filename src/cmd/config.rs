use crate::config::AppConfig;

pub fn run(config: &AppConfig) {
    for (field, value) in describe(config) {
        println!("{field}: {value}");
    }
}

/// Effective settings as label/value pairs, secrets masked.
pub fn describe(config: &AppConfig) -> Vec<(&'static str, String)> {
    vec![
        ("Listen address", config.bind_addr.to_string()),
        ("Jira base URL", config.jira.base_url.clone()),
        ("Jira email", config.jira.email.clone()),
        ("Jira API token", mask_secret(Some(config.jira.api_token.as_str()))),
        ("Project key", config.deployment.project_key.clone()),
        ("Issue type", config.deployment.issue_type.clone()),
        ("Assignee", config.deployment.assignee_email.clone()),
        (
            "Markdown dialect",
            config.deployment.markdown_dialect.to_string(),
        ),
        ("Bearer token", mask_secret(config.bearer_token.as_deref())),
    ]
}

fn mask_secret(value: Option<&str>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let chars: Vec<char> = token.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::mock::test_config;

    #[test]
    fn masks_secrets() {
        assert_eq!(mask_secret(Some("abcdefghij")), "abc***hij");
        assert_eq!(mask_secret(Some("short")), "***");
        assert_eq!(mask_secret(Some("")), "<not set>");
        assert_eq!(mask_secret(None), "<not set>");
    }

    #[test]
    fn describe_never_prints_raw_secrets() {
        let config = test_config(Some("super-secret-value"));
        let lines = describe(&config);

        assert!(lines.iter().all(|(_, value)| value != "super-secret-value"));
        assert!(lines.iter().all(|(_, value)| value != "token"));
        assert!(
            lines
                .iter()
                .any(|(field, value)| *field == "Bearer token" && value == "sup***lue")
        );
        assert!(
            lines
                .iter()
                .any(|(field, value)| *field == "Project key" && value == "DHK")
        );
    }
}
