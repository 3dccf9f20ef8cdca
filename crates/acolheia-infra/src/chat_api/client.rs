//! HttpChatDispatcher -- concrete [`ChatDispatcher`] for the AcolheIA API.
//!
//! Posts `{"mensagem": ...}` to `base_url + chat_path` with the shared
//! access key in the `x-acolheia-key` header, and returns `resposta`.
//!
//! The access key is wrapped in [`secrecy::SecretString`] and is only
//! exposed when building the request header.

use std::time::Duration;

use acolheia_core::chat::dispatcher::ChatDispatcher;
use acolheia_types::config::ChatApiConfig;
use acolheia_types::error::DispatchError;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::types::{ACCESS_KEY_HEADER, ApiErrorBody, ChatRequest, ChatResponse};

/// HTTP chat dispatcher.
///
/// May be built from an incomplete configuration: the gaps are reported by
/// [`ChatDispatcher::ensure_configured`] before any send is attempted.
pub struct HttpChatDispatcher {
    client: reqwest::Client,
    endpoint: Option<String>,
    access_key: Option<SecretString>,
    missing: Vec<String>,
}

impl HttpChatDispatcher {
    /// Create a dispatcher from the chat API settings.
    pub fn new(config: &ChatApiConfig) -> Result<Self, DispatchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| DispatchError::Network(format!("failed to create HTTP client: {e}")))?;

        let access_key = config
            .access_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| SecretString::from(k.to_string()));

        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
            access_key,
            missing: config
                .missing_settings()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    /// Full request URL, when configured.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn configured(&self) -> Result<(&str, &SecretString), DispatchError> {
        match (self.endpoint.as_deref(), self.access_key.as_ref()) {
            (Some(url), Some(key)) if self.missing.is_empty() => Ok((url, key)),
            _ => Err(DispatchError::Configuration {
                missing: self.missing.clone(),
            }),
        }
    }
}

// No Debug derive: keeps the client and key out of logs entirely.

impl ChatDispatcher for HttpChatDispatcher {
    fn ensure_configured(&self) -> Result<(), DispatchError> {
        self.configured().map(|_| ())
    }

    async fn dispatch(&self, message: &str) -> Result<String, DispatchError> {
        let (url, access_key) = self.configured()?;
        debug!(%url, chars = message.chars().count(), "Sending chat request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCESS_KEY_HEADER, access_key.expose_secret())
            .json(&ChatRequest { mensagem: message })
            .send()
            .await
            .map_err(|e| DispatchError::Network(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail_text());
            return Err(DispatchError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| DispatchError::UnexpectedFormat(format!("failed to parse response: {e}")))?;

        match body.resposta {
            Some(reply) if !reply.is_empty() => {
                debug!(chars = reply.chars().count(), "Chat reply received");
                Ok(reply)
            }
            _ => Err(DispatchError::UnexpectedFormat(
                "response has no 'resposta' field".to_string(),
            )),
        }
    }
}
