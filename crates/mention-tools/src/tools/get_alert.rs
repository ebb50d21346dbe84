//! get_alert tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::error;

use mention_client::{format_error, MentionClient};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::render_json;

#[derive(Debug, Deserialize)]
struct GetAlertParams {
    alert_id: String,
}

/// Tool for fetching a single alert.
pub struct GetAlertTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl GetAlertTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "get_alert",
            "Retrieve detailed information about a specific alert.",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "alert_id": {
                    "type": "string",
                    "description": "The alert ID to retrieve"
                }
            },
            "required": ["alert_id"]
        }));
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for GetAlertTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let params: GetAlertParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        match self.client.get_alert(&params.alert_id).await {
            Ok(alert) => Ok(ToolResult::success(render_json(&alert)?)),
            Err(err) => {
                error!(error = %err, alert_id = %params.alert_id, "failed to get alert");
                Ok(ToolResult::error(format_error(Some(&err))))
            }
        }
    }
}
