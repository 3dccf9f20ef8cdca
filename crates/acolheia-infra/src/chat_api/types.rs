//! Wire types of the chat endpoint.
//!
//! Request `{"mensagem": ...}`, success `{"resposta": ...}`, error
//! `{"detail": ...}`. Field names are fixed by the server.

use serde::{Deserialize, Serialize};

/// Header carrying the shared access key.
pub const ACCESS_KEY_HEADER: &str = "x-acolheia-key";

/// Request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub mensagem: &'a str,
}

/// Success body. `resposta` is optional here so a missing field is reported
/// as an unexpected format rather than a decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub resposta: Option<String>,
}

/// Error body. Only a string `detail` is shown to the user.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
