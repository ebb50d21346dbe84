//! Tool implementations, one module per tool.

mod create_advanced_alert;
mod create_basic_alert;
mod fetch_alert_stats;
mod fetch_mentions;
mod get_account_info;
mod get_alert;
mod get_alert_options;
mod list_alerts;
mod pause;
mod update_alert;

pub use create_advanced_alert::CreateAdvancedAlertTool;
pub use create_basic_alert::CreateBasicAlertTool;
pub use fetch_alert_stats::FetchAlertStatsTool;
pub use fetch_mentions::FetchMentionsTool;
pub use get_account_info::GetAccountInfoTool;
pub use get_alert::GetAlertTool;
pub use get_alert_options::GetAlertOptionsTool;
pub use list_alerts::ListAlertsTool;
pub use pause::{PauseAlertTool, UnpauseAlertTool};
pub use update_alert::UpdateAlertTool;

use mention_protocols::ToolError;

/// Upstream cap on alert description length.
const MAX_DESCRIPTION_LEN: usize = 1000;

/// Pretty-print a successful payload for text content.
fn render_json<T: serde::Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(|e| ToolError::ExecutionFailed(e.to_string()))
}
