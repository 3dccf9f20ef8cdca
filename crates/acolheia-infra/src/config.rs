//! Configuration loader for AcolheIA.
//!
//! Reads `config.toml` from the data directory (`~/.acolheia/` in production)
//! and layers the `ACOLHEIA_*` environment variables on top. A missing or
//! malformed file falls back to defaults; missing chat API settings are only
//! reported when a message is about to be sent.

use std::path::{Path, PathBuf};

use acolheia_types::config::GlobalConfig;

/// Data directory override.
pub const DATA_DIR_ENV: &str = "ACOLHEIA_DATA_DIR";
/// Chat API base URL.
pub const API_URL_ENV: &str = "ACOLHEIA_API_URL";
/// Chat API path appended to the base URL.
pub const CHAT_ENDPOINT_ENV: &str = "ACOLHEIA_CHAT_ENDPOINT";
/// Shared access key sent with every chat request.
pub const ACCESS_KEY_ENV: &str = "ACOLHEIA_ACCESS_KEY";

/// Resolve the data directory.
///
/// Priority:
/// 1. `ACOLHEIA_DATA_DIR` environment variable
/// 2. `~/.acolheia`
/// 3. `.acolheia` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".acolheia");
    }

    PathBuf::from(".acolheia")
}

/// Load configuration from `{data_dir}/config.toml` plus the environment.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config = load_config_file(data_dir).await;
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Load only `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
pub async fn load_config_file(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Overlay non-blank variables from `lookup` onto `config`.
pub fn apply_overrides<F>(mut config: GlobalConfig, lookup: F) -> GlobalConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(API_URL_ENV) {
        config.chat_api.base_url = Some(url);
    }
    if let Some(path) = get(CHAT_ENDPOINT_ENV) {
        config.chat_api.chat_path = Some(path);
    }
    if let Some(key) = get(ACCESS_KEY_ENV) {
        config.chat_api.access_key = Some(key);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[tokio::test]
    async fn load_config_file_missing_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_file(tmp.path()).await;
        assert!(config.chat_api.base_url.is_none());
        assert!(!config.chat_api.is_complete());
    }

    #[tokio::test]
    async fn load_config_file_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[chat_api]
base_url = "https://api.acolheia.example"
chat_path = "/v1/chat"
access_key = "k3y"
"#,
        )
        .await
        .unwrap();

        let config = load_config_file(tmp.path()).await;
        assert!(config.chat_api.is_complete());
        assert_eq!(
            config.chat_api.endpoint_url().as_deref(),
            Some("https://api.acolheia.example/v1/chat")
        );
    }

    #[tokio::test]
    async fn load_config_file_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config_file(tmp.path()).await;
        assert!(config.chat_api.base_url.is_none());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut file = GlobalConfig::default();
        file.chat_api.base_url = Some("https://file.example".to_string());
        file.chat_api.chat_path = Some("/chat".to_string());

        let config = apply_overrides(
            file,
            env(&[(API_URL_ENV, "https://env.example"), (ACCESS_KEY_ENV, "envkey")]),
        );
        assert_eq!(config.chat_api.base_url.as_deref(), Some("https://env.example"));
        assert_eq!(config.chat_api.chat_path.as_deref(), Some("/chat"));
        assert_eq!(config.chat_api.access_key.as_deref(), Some("envkey"));
        assert!(config.chat_api.is_complete());
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut file = GlobalConfig::default();
        file.chat_api.access_key = Some("filekey".to_string());

        let config = apply_overrides(file, env(&[(ACCESS_KEY_ENV, "  ")]));
        assert_eq!(config.chat_api.access_key.as_deref(), Some("filekey"));
    }
}
