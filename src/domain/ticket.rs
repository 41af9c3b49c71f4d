use serde::{Deserialize, Serialize};

use crate::config::MarkdownDialect;
use crate::domain::markdown;
use crate::error::ValidationError;

pub const SUMMARY_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 32_767;

/// Parameters accepted by the create-ticket tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TicketRequest {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TicketRequest {
    #[cfg(test)]
    pub fn new(summary: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            summary: Some(summary.into()),
            description: description.map(str::to_string),
        }
    }

    /// Checks presence and size limits; the first violated rule wins.
    pub fn validate(&self) -> Result<ValidTicket, ValidationError> {
        let summary = self.summary.as_deref().unwrap_or_default();
        if summary.trim().is_empty() {
            return Err(ValidationError::SummaryRequired);
        }

        let summary_len = summary.chars().count();
        if summary_len > SUMMARY_MAX_CHARS {
            return Err(ValidationError::SummaryTooLong {
                length: summary_len,
            });
        }

        if let Some(description) = &self.description {
            let description_len = description.chars().count();
            if description_len > DESCRIPTION_MAX_CHARS {
                return Err(ValidationError::DescriptionTooLong {
                    length: description_len,
                });
            }
        }

        Ok(ValidTicket {
            summary: summary.trim().to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
        })
    }
}

/// A request that passed validation, with its text already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTicket {
    pub summary: String,
    pub description: Option<String>,
}

impl ValidTicket {
    /// Rewrites the description for `dialect`. Shortcode expansion can grow
    /// the text, so the length limit is enforced again on the result.
    pub fn with_dialect(self, dialect: MarkdownDialect) -> Result<Self, ValidationError> {
        let Some(description) = self.description.as_deref() else {
            return Ok(self);
        };

        let converted = markdown::convert(description, dialect).into_owned();
        let length = converted.chars().count();
        if length > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong { length });
        }

        Ok(Self {
            summary: self.summary,
            description: Some(converted),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResult {
    pub success: bool,
    pub ticket_key: String,
    pub ticket_url: String,
    pub ticket_id: String,
    pub message: String,
}

impl TicketResult {
    pub fn created(issue: CreatedIssue, base_url: &str, warning: Option<&str>) -> Self {
        let ticket_url = browse_url(base_url, &issue.key);
        let mut message = format!("Successfully created ticket {}: {ticket_url}", issue.key);
        if let Some(warning) = warning {
            message.push_str("\n\nWarning: ");
            message.push_str(warning);
        }

        Self {
            success: true,
            ticket_key: issue.key,
            ticket_url,
            ticket_id: issue.id,
            message,
        }
    }
}

pub fn browse_url(base_url: &str, key: &str) -> String {
    format!("{}/browse/{}", base_url.trim_end_matches('/'), key)
}
