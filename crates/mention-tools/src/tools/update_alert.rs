//! update_alert tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::error;

use mention_client::{format_error, MentionClient, UpdateAlertParams};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::render_json;

#[derive(Debug, Deserialize)]
struct UpdateAlertArgs {
    alert_id: String,

    #[serde(flatten)]
    params: UpdateAlertParams,
}

/// Tool for updating an existing alert.
pub struct UpdateAlertTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl UpdateAlertTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "update_alert",
            "Update an existing alert with new criteria or settings.",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "alert_id": {
                    "type": "string",
                    "description": "The alert ID to update"
                },
                "name": {
                    "type": "string",
                    "description": "New alert name (1-255 characters)"
                },
                "description": {
                    "type": "string",
                    "description": "New alert description (max 1000 characters)"
                },
                "color": {
                    "type": "string",
                    "description": "New alert color in hex notation"
                },
                "query_type": {
                    "type": "string",
                    "enum": ["basic", "advanced"],
                    "description": "Type of query to set; selects which query fields apply"
                },
                "included_keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Keywords to include (basic queries)"
                },
                "required_keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Required keywords (basic queries)"
                },
                "excluded_keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Excluded keywords (basic queries)"
                },
                "query_string": {
                    "type": "string",
                    "description": "Boolean query string (advanced queries)"
                },
                "languages": {
                    "type": "array",
                    "items": {"type": "string"},
                    "maxItems": 5,
                    "description": "Language codes to monitor (max 5)"
                },
                "countries": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Country codes to monitor"
                },
                "sources": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Sources to monitor"
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
            "required": ["alert_id"]
        }));
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for UpdateAlertTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: UpdateAlertArgs = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        match self.client.update_alert(&args.alert_id, args.params).await {
            Ok(updated) => Ok(ToolResult::success(render_json(&updated)?)),
            Err(err) => {
                error!(error = %err, alert_id = %args.alert_id, "failed to update alert");
                Ok(ToolResult::error(format_error(Some(&err))))
            }
        }
    }
}
