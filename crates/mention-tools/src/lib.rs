//! # Mention Tools
//!
//! MCP tool implementations over the Mention domain client, plus the
//! registry the server dispatches through.

pub mod registry;
pub mod tools;

use std::sync::Arc;

use mention_client::MentionClient;
use mention_protocols::ToolError;

pub use registry::ToolRegistry;

/// Register every tool this server exposes.
pub fn register_default_tools(
    registry: &ToolRegistry,
    client: Arc<MentionClient>,
) -> Result<(), ToolError> {
    registry.register(Arc::new(tools::GetAlertOptionsTool::new(client.clone())))?;
    registry.register(Arc::new(tools::CreateBasicAlertTool::new(client.clone())))?;
    registry.register(Arc::new(tools::CreateAdvancedAlertTool::new(client.clone())))?;
    registry.register(Arc::new(tools::ListAlertsTool::new(client.clone())))?;
    registry.register(Arc::new(tools::GetAlertTool::new(client.clone())))?;
    registry.register(Arc::new(tools::UpdateAlertTool::new(client.clone())))?;
    registry.register(Arc::new(tools::PauseAlertTool::new(client.clone())))?;
    registry.register(Arc::new(tools::UnpauseAlertTool::new(client.clone())))?;
    registry.register(Arc::new(tools::FetchMentionsTool::new(client.clone())))?;
    registry.register(Arc::new(tools::FetchAlertStatsTool::new(client.clone())))?;
    registry.register(Arc::new(tools::GetAccountInfoTool::new(client)))?;
    Ok(())
}
