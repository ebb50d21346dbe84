//! # Mention Protocols
//!
//! Protocol definitions for the Mention MCP server.
//! Contains the tool abstraction the server dispatches through and the
//! MCP (JSON-RPC 2.0) wire types - no implementations.

pub mod error;
pub mod mcp;
pub mod tool;

pub use error::ToolError;
pub use tool::{Tool, ToolDefinition, ToolResult};
