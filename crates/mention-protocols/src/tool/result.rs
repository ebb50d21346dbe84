//! Tool execution result types.

use serde::{Deserialize, Serialize};

/// Result of a tool execution.
///
/// An API-level failure is reported as a result with `is_error` set, not as
/// a protocol error: the caller still receives renderable text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Output text.
    pub content: String,

    /// Whether the execution failed.
    #[serde(default)]
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result with text content.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
        }
    }
}
