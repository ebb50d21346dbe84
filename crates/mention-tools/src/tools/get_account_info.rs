//! get_account_info tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use mention_client::{format_error, MentionClient};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::render_json;

/// Tool for fetching the authenticated account, its subscription
/// capabilities, and its groups.
pub struct GetAccountInfoTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl GetAccountInfoTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "get_account_info",
            "Get the authenticated Mention account, including whether the subscription allows advanced queries and which groups exist.",
        );
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for GetAccountInfoTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, ToolError> {
        match self.client.get_account().await {
            Ok(account) => Ok(ToolResult::success(render_json(&account)?)),
            Err(err) => {
                error!(error = %err, "failed to get account info");
                Ok(ToolResult::error(format_error(Some(&err))))
            }
        }
    }
}
