//! get_alert_options tool implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use mention_client::{format_error, MentionClient};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::render_json;

/// Tool for listing the languages, countries, and sources an alert can
/// select from.
pub struct GetAlertOptionsTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl GetAlertOptionsTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "get_alert_options",
            "Get available languages, countries, and sources for creating alerts in Mention",
        );
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for GetAlertOptionsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let app_data = match self.client.get_app_data().await {
            Ok(app_data) => app_data,
            Err(err) => {
                error!(error = %err, "failed to get app data");
                return Ok(ToolResult::error(format_error(Some(&err))));
            }
        };

        // Flatten to code -> display name; icons and sort orders are noise
        // for option discovery.
        let languages: HashMap<&String, &String> = app_data
            .alert_languages
            .iter()
            .map(|(code, language)| (code, &language.name))
            .collect();
        let sources: HashMap<&String, &String> = app_data
            .alert_sources
            .iter()
            .map(|(code, source)| (code, &source.name))
            .collect();

        let response = serde_json::json!({
            "languages": languages,
            "countries": app_data.alert_countries,
            "sources": sources,
        });

        Ok(ToolResult::success(render_json(&response)?))
    }
}

#[cfg(test)]
#[path = "get_alert_options_tests.rs"]
mod tests;
