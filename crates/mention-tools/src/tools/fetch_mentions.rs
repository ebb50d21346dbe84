//! fetch_mentions tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::error;

use mention_client::{format_error, MentionClient, MentionFilters};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::render_json;

#[derive(Debug, Deserialize)]
struct FetchMentionsArgs {
    alert_id: String,

    #[serde(flatten)]
    filters: MentionFilters,
}

/// Tool for retrieving the mentions matched by an alert.
pub struct FetchMentionsTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl FetchMentionsTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "fetch_mentions",
            "Retrieve mentions associated with a specific alert. Supports filters like source, folder, tone, countries, languages, and advanced search queries.",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "alert_id": {
                    "type": "string",
                    "description": "The alert ID to fetch mentions from"
                },
                "since_id": {
                    "type": "integer",
                    "description": "Return mentions with ID greater than this value. Cannot be combined with before_date, not_before_date, or cursor"
                },
                "before_date": {
                    "type": "string",
                    "description": "Return mentions published before this datetime (ISO 8601)"
                },
                "not_before_date": {
                    "type": "string",
                    "description": "Ignore mentions older than this date (ISO 8601); requires before_date"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 1000,
                    "description": "Number of mentions to return (default 20, max 1000)"
                },
                "source": {
                    "type": "string",
                    "description": "Filter by source"
                },
                "unread": {
                    "type": "boolean",
                    "description": "Return only unread mentions"
                },
                "favorite": {
                    "type": "boolean",
                    "description": "Return only favorite mentions"
                },
                "folder": {
                    "type": "string",
                    "enum": ["inbox", "archive", "spam", "trash"],
                    "description": "Filter by folder"
                },
                "tone": {
                    "type": "array",
                    "items": {"type": "integer", "minimum": -1, "maximum": 1},
                    "description": "Filter by tone: -1 negative, 0 neutral, 1 positive"
                },
                "countries": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Filter by ISO 3166-1 alpha-2 country codes"
                },
                "languages": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Filter by language codes"
                },
                "include_children": {
                    "type": "boolean",
                    "description": "Whether to include child mentions"
                },
                "sort": {
                    "type": "string",
                    "enum": ["published_at", "author_influence.score", "direct_reach", "cumulative_reach", "domain_reach"],
                    "description": "Sort field"
                },
                "timezone": {
                    "type": "string",
                    "description": "Timezone for parsing date values in the q parameter"
                },
                "q": {
                    "type": "string",
                    "description": "Advanced keyword-based filtering"
                },
                "cursor": {
                    "type": "string",
                    "description": "Pagination cursor"
                }
            },
            "required": ["alert_id"]
        }));
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for FetchMentionsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let args: FetchMentionsArgs = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        match self.client.fetch_mentions(&args.alert_id, args.filters).await {
            Ok(mentions) => Ok(ToolResult::success(render_json(&mentions)?)),
            Err(err) => {
                error!(error = %err, alert_id = %args.alert_id, "failed to fetch mentions");
                Ok(ToolResult::error(format_error(Some(&err))))
            }
        }
    }
}
