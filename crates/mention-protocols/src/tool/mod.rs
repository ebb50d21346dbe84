//! Tool abstraction for the MCP server.

mod definition;
mod result;
mod traits;

pub use definition::ToolDefinition;
pub use result::ToolResult;
pub use traits::Tool;
