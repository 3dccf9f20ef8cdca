//! Configuration types for AcolheIA.
//!
//! `GlobalConfig` mirrors `config.toml` in the data directory. The chat API
//! settings may also come from the environment; see `acolheia-infra::config`.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Top-level configuration.
///
/// Loaded from `~/.acolheia/config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub chat_api: ChatApiConfig,
}

/// Settings for the remote chat endpoint.
///
/// The request URL is `base_url` followed by `chat_path`. All three string
/// values must be present before a message can be sent.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ChatApiConfig {
    pub base_url: Option<String>,
    pub chat_path: Option<String>,
    /// Shared secret sent as the `x-acolheia-key` header.
    pub access_key: Option<String>,
    /// Optional request timeout. Unset means wait for the server.
    pub request_timeout_secs: Option<u64>,
}

impl ChatApiConfig {
    /// Names of the settings that are absent or blank.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());

        let mut missing = Vec::new();
        if blank(&self.base_url) {
            missing.push("base_url");
        }
        if blank(&self.chat_path) {
            missing.push("chat_path");
        }
        if blank(&self.access_key) {
            missing.push("access_key");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_settings().is_empty()
    }

    /// Full endpoint URL, when both halves are configured.
    pub fn endpoint_url(&self) -> Option<String> {
        match (self.base_url.as_deref(), self.chat_path.as_deref()) {
            (Some(base), Some(path)) if !base.trim().is_empty() && !path.trim().is_empty() => {
                Some(format!("{}{}", base.trim(), path.trim()))
            }
            _ => None,
        }
    }
}

// The access key never appears in Debug output.
impl fmt::Debug for ChatApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatApiConfig")
            .field("base_url", &self.base_url)
            .field("chat_path", &self.chat_path)
            .field("access_key", &self.access_key.as_ref().map(|_| "****"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ChatApiConfig {
        ChatApiConfig {
            base_url: Some("https://api.example.org".to_string()),
            chat_path: Some("/chat".to_string()),
            access_key: Some("k3y".to_string()),
            request_timeout_secs: None,
        }
    }

    #[test]
    fn test_global_config_deserialize_empty() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert!(config.chat_api.base_url.is_none());
        assert_eq!(
            config.chat_api.missing_settings(),
            vec!["base_url", "chat_path", "access_key"]
        );
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
[chat_api]
base_url = "https://api.example.org"
chat_path = "/chat"
access_key = "k3y"
request_timeout_secs = 30
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert!(config.chat_api.is_complete());
        assert_eq!(config.chat_api.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let mut config = complete();
        config.access_key = Some("   ".to_string());
        assert_eq!(config.missing_settings(), vec!["access_key"]);
    }

    #[test]
    fn test_endpoint_url_concatenates() {
        assert_eq!(
            complete().endpoint_url().as_deref(),
            Some("https://api.example.org/chat")
        );
        let mut partial = complete();
        partial.chat_path = None;
        assert!(partial.endpoint_url().is_none());
    }

    #[test]
    fn test_debug_masks_access_key() {
        let debug = format!("{:?}", complete());
        assert!(!debug.contains("k3y"));
        assert!(debug.contains("****"));
    }
}
