//! list_alerts tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::error;

use mention_client::{format_error, MentionClient};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::render_json;

#[derive(Debug, Deserialize)]
struct ListAlertsParams {
    #[serde(default)]
    limit: Option<u32>,

    #[serde(default)]
    cursor: Option<String>,
}

/// Tool for listing the account's alerts with pagination.
pub struct ListAlertsTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl ListAlertsTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "list_alerts",
            "List all monitoring alerts for the current account with pagination support.",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 100,
                    "description": "Maximum number of alerts to return (1-100)"
                },
                "cursor": {
                    "type": "string",
                    "description": "Pagination cursor for retrieving the next page"
                }
            },
            "required": []
        }));
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for ListAlertsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let params: ListAlertsParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        match self.client.list_alerts(params.limit, params.cursor).await {
            Ok(page) => Ok(ToolResult::success(render_json(&page)?)),
            Err(err) => {
                error!(error = %err, "failed to list alerts");
                Ok(ToolResult::error(format_error(Some(&err))))
            }
        }
    }
}
