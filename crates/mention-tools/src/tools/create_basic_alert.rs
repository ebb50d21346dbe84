//! create_basic_alert tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use mention_client::{format_error, truncate, BasicAlertParams, MentionClient};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::{render_json, MAX_DESCRIPTION_LEN};

/// Tool for creating a basic keyword monitoring alert.
pub struct CreateBasicAlertTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl CreateBasicAlertTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "create_basic_alert",
            "Create a new basic monitoring alert in Mention",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the alert"
                },
                "included_keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": 1,
                    "description": "Keywords to include. At least one of these must be present in a mention"
                },
                "required_keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Keywords that must all be present in a mention"
                },
                "excluded_keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Keywords that must not be present in a mention"
                },
                "sources": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": 1,
                    "description": "Source types to monitor. Use the get_alert_options tool to see available sources. Common options: web, twitter, facebook, instagram, news, blogs"
                },
                "languages": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": 1,
                    "maxItems": 10,
                    "description": "2-character language codes (e.g. 'en', 'fr', 'es'). Use the get_alert_options tool to see all available languages"
                },
                "countries": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "2-character country codes (e.g. 'US', 'FR', 'GB'). Use 'XX' for mentions without country information"
                },
                "group_id": {
                    "type": "string",
                    "description": "Group to attach the alert to; defaults to the configured group"
                },
                "description": {
                    "type": "string",
                    "description": "Alert description (optional, max 1000 characters)"
                },
                "color": {
                    "type": "string",
                    "description": "Alert color in hex notation, e.g. '#05e363'"
                },
                "blocked_sites": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Domains to exclude from monitoring"
                },
                "noise_detection": {
                    "type": "boolean",
                    "description": "Enable noise detection"
                }
            },
            "required": ["name", "included_keywords", "sources", "languages"]
        }));
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for CreateBasicAlertTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let mut params: BasicAlertParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;
        params.description = params
            .description
            .map(|d| truncate(&d, MAX_DESCRIPTION_LEN));

        info!(name = %params.name, "create_basic_alert requested");

        match self.client.create_basic_alert(params).await {
            Ok(alert) => Ok(ToolResult::success(render_json(&alert)?)),
            Err(err) => {
                error!(error = %err, "failed to create alert");
                Ok(ToolResult::error(format_error(Some(&err))))
            }
        }
    }
}

#[cfg(test)]
#[path = "create_basic_alert_tests.rs"]
mod tests;
