//! # Mention Config
//!
//! Configuration for the Mention MCP server: defaults, an optional JSON
//! config file at `~/.config/mention-mcp/config.json`, and environment
//! overrides.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{Config, MentionApiConfig, ServerConfig};
