//! fetch_alert_stats tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use mention_client::{format_error, MentionClient, StatsParams};
use mention_protocols::{Tool, ToolDefinition, ToolError, ToolResult};

use super::render_json;

/// Tool for retrieving aggregated statistics across alerts.
pub struct FetchAlertStatsTool {
    definition: ToolDefinition,
    client: Arc<MentionClient>,
}

impl FetchAlertStatsTool {
    pub fn new(client: Arc<MentionClient>) -> Self {
        let definition = ToolDefinition::new(
            "fetch_alert_stats",
            "Retrieve statistics for one or more alerts including mentions per interval, tones, influencers, geographical data, and reach metrics. Supports date ranges, filtering, and aggregation options.",
        )
        .with_input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "alerts": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": 1,
                    "description": "Alert IDs to aggregate statistics for"
                },
                "from": {
                    "type": "string",
                    "description": "Start of the date range (ISO 8601)"
                },
                "to": {
                    "type": "string",
                    "description": "End of the date range (ISO 8601)"
                },
                "timezone": {
                    "type": "string",
                    "description": "Timezone used for bucketing"
                },
                "interval": {
                    "type": "string",
                    "description": "Aggregation interval, e.g. 'P1D' for daily"
                },
                "favorite": {
                    "type": "boolean",
                    "description": "Restrict to favorite mentions"
                },
                "important": {
                    "type": "boolean",
                    "description": "Restrict to important mentions"
                },
                "week_day_stats": {
                    "type": "boolean",
                    "description": "Include per-weekday aggregates"
                },
                "week_day_by_hour_stats": {
                    "type": "boolean",
                    "description": "Include per-weekday-by-hour aggregates"
                },
                "influencers": {
                    "type": "boolean",
                    "description": "Include top influencers"
                },
                "reach_per_interval_stats": {
                    "type": "boolean",
                    "description": "Include reach per interval"
                },
                "author_influence.score": {
                    "type": "boolean",
                    "description": "Include author influence scores"
                },
                "tones": {
                    "type": "array",
                    "items": {"type": "integer", "minimum": -1, "maximum": 1},
                    "description": "Filter by tone values"
                },
                "languages": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Filter by language codes"
                },
                "sources": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Filter by sources"
                },
                "countries": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Filter by country codes"
                },
                "tags": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Filter by tag IDs"
                },
                "country_stats": {
                    "description": "Country aggregation: true for the top 10, false to disable, or an explicit count",
                    "anyOf": [
                        {"type": "boolean"},
                        {"type": "integer", "minimum": 0}
                    ]
                }
            },
            "required": ["alerts"]
        }));
        Self { definition, client }
    }
}

#[async_trait]
impl Tool for FetchAlertStatsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, ToolError> {
        let params: StatsParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        match self.client.fetch_alert_stats(params).await {
            Ok(stats) => Ok(ToolResult::success(render_json(&stats)?)),
            Err(err) => {
                error!(error = %err, "failed to fetch alert stats");
                Ok(ToolResult::error(format_error(Some(&err))))
            }
        }
    }
}
