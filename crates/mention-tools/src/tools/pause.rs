//! pause_alert / unpause_alert tool implementations.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info};

use mention_client::{format_error, MentionClient};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::render_json;

#[derive(Debug, Deserialize)]
struct AlertIdParams {
    alert_id: String,
}

fn alert_id_schema(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "alert_id": {
                "type": "string",
                "description": description
            }
        },
        "required": ["alert_id"]
    })
}

/// Tool for pausing monitoring of an alert.
pub struct PauseAlertTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl PauseAlertTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "pause_alert",
            "Temporarily pause monitoring for a specific alert.",
        )
        .with_input_schema(alert_id_schema("The alert ID to pause"));
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for PauseAlertTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let params: AlertIdParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        match self.client.pause_alert(&params.alert_id).await {
            Ok(response) => {
                info!(alert_id = %params.alert_id, "alert paused");
                Ok(ToolResult::success(render_json(&response)?))
            }
            Err(err) => {
                error!(error = %err, alert_id = %params.alert_id, "failed to pause alert");
                Ok(ToolResult::error(format_error(Some(&err))))
            }
        }
    }
}

/// Tool for resuming monitoring of a paused alert.
pub struct UnpauseAlertTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl UnpauseAlertTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "unpause_alert",
            "Resume monitoring for a paused alert.",
        )
        .with_input_schema(alert_id_schema("The alert ID to unpause"));
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for UnpauseAlertTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let params: AlertIdParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        match self.client.unpause_alert(&params.alert_id).await {
            Ok(response) => {
                info!(alert_id = %params.alert_id, "alert unpaused");
                Ok(ToolResult::success(render_json(&response)?))
            }
            Err(err) => {
                error!(error = %err, alert_id = %params.alert_id, "failed to unpause alert");
                Ok(ToolResult::error(format_error(Some(&err))))
            }
        }
    }
}
