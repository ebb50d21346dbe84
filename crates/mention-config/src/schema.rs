//! Configuration schema.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://web.mention.net/api";
pub const DEFAULT_API_VERSION: &str = "1.21";
pub const DEFAULT_SERVER_NAME: &str = "mention-mcp";
pub const DEFAULT_SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const CONFIG_DIR: &str = ".config/mention-mcp";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOGS_SUBDIR: &str = "logs";

pub const ENV_ACCESS_TOKEN: &str = "MENTION_ACCESS_TOKEN";
pub const ENV_ACCOUNT_ID: &str = "MENTION_ACCOUNT_ID";
pub const ENV_GROUP_ID: &str = "MENTION_GROUP_ID";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mention_api: MentionApiConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionApiConfig {
    #[serde(default)]
    pub access_token: String,

    #[serde(default)]
    pub account_id: String,

    #[serde(default)]
    pub group_id: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_server_version")]
    pub version: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_server_name() -> String {
    DEFAULT_SERVER_NAME.to_string()
}

fn default_server_version() -> String {
    DEFAULT_SERVER_VERSION.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for MentionApiConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            account_id: String::new(),
            group_id: String::new(),
            base_url: default_base_url(),
            api_version: default_api_version(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
            timeout: default_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mention_api: MentionApiConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    pub fn is_authenticated(&self) -> bool {
        !self.mention_api.access_token.is_empty()
    }

    /// `<name>/<version>`, sent as the User-Agent header.
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.server.name, self.server.version)
    }
}
