//! Configuration loader.
//!
//! Precedence, lowest to highest: built-in defaults, the JSON config file,
//! then environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::{
    Config, CONFIG_DIR, CONFIG_FILE_NAME, ENV_ACCESS_TOKEN, ENV_ACCOUNT_ID, ENV_GROUP_ID,
};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default location with environment
    /// overrides applied, then validate.
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from(Self::default_config_path().as_deref())
    }

    /// Load configuration from an explicit file path (absent file falls
    /// back to defaults), apply environment overrides, then validate.
    pub fn load_from(path: Option<&Path>) -> Result<Config, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::load_file(path)?,
            _ => Config::default(),
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Parse a config file without overrides or validation.
    pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// `~/.config/mention-mcp/config.json`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    fn apply_env_overrides(config: &mut Config) {
        if let Ok(access_token) = std::env::var(ENV_ACCESS_TOKEN) {
            if !access_token.is_empty() {
                config.mention_api.access_token = access_token;
            }
        }
        if let Ok(account_id) = std::env::var(ENV_ACCOUNT_ID) {
            if !account_id.is_empty() {
                config.mention_api.account_id = account_id;
            }
        }
        if let Ok(group_id) = std::env::var(ENV_GROUP_ID) {
            if !group_id.is_empty() {
                config.mention_api.group_id = group_id;
            }
        }
    }

    fn validate(config: &Config) -> Result<(), ConfigError> {
        if !config.is_authenticated() {
            return Err(ConfigError::MissingField("access_token".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Env-var tests share process state; serialize them.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn with_clean_env<T>(f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap();
        // SAFETY: guarded by ENV_LOCK; test-only process-wide state.
        unsafe {
            std::env::remove_var(ENV_ACCESS_TOKEN);
            std::env::remove_var(ENV_ACCOUNT_ID);
            std::env::remove_var(ENV_GROUP_ID);
        }
        f()
    }

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    #[test]
    fn test_load_file() {
        let file = write_config(
            r#"{"mention_api": {"access_token": "tok-file", "account_id": "acc-file", "group_id": "grp-file"}}"#,
        );
        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.mention_api.access_token, "tok-file");
        assert_eq!(config.mention_api.group_id, "grp-file");
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        with_clean_env(|| {
            let result = ConfigLoader::load_from(Some(Path::new("/nonexistent/config.json")));
            // Defaults carry no token, so validation rejects the result.
            assert!(matches!(result, Err(ConfigError::MissingField(_))));
        });
    }

    #[test]
    fn test_load_from_requires_access_token() {
        with_clean_env(|| {
            let file = write_config(r#"{"mention_api": {"account_id": "acc-1"}}"#);
            let err = ConfigLoader::load_from(Some(file.path())).unwrap_err();
            assert!(err.to_string().contains("access_token"));
        });
    }

    #[test]
    fn test_load_from_file_with_token_passes_validation() {
        with_clean_env(|| {
            let file = write_config(r#"{"mention_api": {"access_token": "tok-1"}}"#);
            let config = ConfigLoader::load_from(Some(file.path())).unwrap();
            assert_eq!(config.mention_api.access_token, "tok-1");
            assert_eq!(config.mention_api.base_url, "https://web.mention.net/api");
        });
    }

    #[test]
    fn test_env_overrides_beat_file_values() {
        with_clean_env(|| {
            // SAFETY: guarded by ENV_LOCK; test-only process-wide state.
            unsafe {
                std::env::set_var(ENV_ACCESS_TOKEN, "tok-env");
                std::env::set_var(ENV_ACCOUNT_ID, "acc-env");
            }
            let file = write_config(
                r#"{"mention_api": {"access_token": "tok-file", "account_id": "acc-file"}}"#,
            );
            let config = ConfigLoader::load_from(Some(file.path())).unwrap();
            // SAFETY: guarded by ENV_LOCK; test-only process-wide state.
            unsafe {
                std::env::remove_var(ENV_ACCESS_TOKEN);
                std::env::remove_var(ENV_ACCOUNT_ID);
            }
            assert_eq!(config.mention_api.access_token, "tok-env");
            assert_eq!(config.mention_api.account_id, "acc-env");
        });
    }

    #[test]
    fn test_invalid_json_is_format_error() {
        let file = write_config("{not valid json");
        let err = ConfigLoader::load_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(_)));
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = ConfigLoader::default_config_path() {
            let path = path.to_string_lossy();
            assert!(path.ends_with(".config/mention-mcp/config.json"));
        }
    }
}
