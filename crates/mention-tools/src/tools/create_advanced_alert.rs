//! create_advanced_alert tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use mention_client::{format_error, truncate, AdvancedAlertParams, MentionClient};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::{render_json, MAX_DESCRIPTION_LEN};

/// Tool for creating an advanced alert from a boolean query string.
pub struct CreateAdvancedAlertTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl CreateAdvancedAlertTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "create_advanced_alert",
            "Create a new advanced monitoring alert with boolean query syntax. Advanced alerts use complex query strings with boolean operators like AND, OR, NOT.",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the alert"
                },
                "query_string": {
                    "type": "string",
                    "description": "Advanced query string using boolean operators, e.g. '(NASA OR SpaceX) AND launch AND NOT fiction'. Max 1700 characters"
                },
                "languages": {
                    "type": "array",
                    "items": {"type": "string"},
                    "maxItems": 5,
                    "description": "Language codes to monitor. For keyword matching, prefer the 'lang' operator inside the query string"
                },
                "countries": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "2-character country codes to monitor"
                },
                "sources": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Sources to monitor. Use the get_alert_options tool to list available sources"
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
                    "description": "Alert color in hex notation"
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
            "required": ["name", "query_string"]
        }));
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for CreateAdvancedAlertTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let mut params: AdvancedAlertParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;
        params.description = params
            .description
            .map(|d| truncate(&d, MAX_DESCRIPTION_LEN));

        info!(name = %params.name, "create_advanced_alert requested");

        match self.client.create_advanced_alert(params).await {
            Ok(alert) => Ok(ToolResult::success(render_json(&alert)?)),
            Err(err) => {
                error!(error = %err, "failed to create advanced alert");
                let mut message = format_error(Some(&err));
                // Boolean query mistakes are common enough to deserve a
                // usage reminder alongside the upstream message.
                if err
                    .as_api()
                    .is_some_and(|api| api.has_field_error("query.query_string"))
                {
                    message.push_str(
                        "\nCommon issues: use url:domain.com for websites, quote phrases like \"cold email\", and combine terms with AND, OR, NOT.",
                    );
                }
                Ok(ToolResult::error(message))
            }
        }
    }
}
