//! Client construction and tool registration.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use mention_client::{HttpTransport, MentionClient};
use mention_config::Config;
use mention_tools::{register_default_tools, ToolRegistry};

/// Build the HTTP client from configuration and register every tool.
pub fn build_registry(config: &Config) -> Result<Arc<ToolRegistry>, Box<dyn std::error::Error>> {
    let transport = HttpTransport::new(
        config.mention_api.base_url.clone(),
        config.mention_api.api_version.clone(),
        config.mention_api.access_token.clone(),
        config.user_agent(),
        Duration::from_secs(config.server.timeout),
    )?;

    let client = Arc::new(MentionClient::new(
        Arc::new(transport),
        config.mention_api.account_id.clone(),
        config.mention_api.group_id.clone(),
    ));

    let registry = Arc::new(ToolRegistry::new());
    register_default_tools(&registry, client)?;
    info!(tools = registry.len(), "registered tools");

    Ok(registry)
}
