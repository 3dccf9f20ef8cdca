//! Chat transcript types for AcolheIA.
//!
//! A transcript is an ordered, append-only sequence of [`ChatMessage`]s
//! scoped to one account email. Message ids are decimal millisecond
//! timestamps, kept strictly increasing within a transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

/// Id of the greeting that seeds every new transcript.
pub const GREETING_ID: &str = "1";

/// Text of the greeting that seeds every new transcript.
pub const GREETING_TEXT: &str = "Olá! Sou o assistente virtual do AcolheIA. Minha missão é ser uma ponte entre a comunidade transgênero e serviços de radiologia afirmativos. Como posso ajudar hoje?";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A single message in a transcript.
///
/// Serialized exactly as stored: `{"id": "...", "text": "...", "sender": "user"|"bot"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn new(id: impl Into<String>, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender,
        }
    }

    /// The canonical greeting message.
    pub fn greeting() -> Self {
        Self::new(GREETING_ID, GREETING_TEXT, Sender::Bot)
    }
}

/// A transcript containing only the greeting.
pub fn initial_history() -> Vec<ChatMessage> {
    vec![ChatMessage::greeting()]
}

/// Compute the id for the next message appended to `history`.
///
/// Uses the millisecond timestamp `now`, bumped past the largest numeric id
/// already present so that two messages created within the same millisecond
/// (a user message and an immediate error reply) never collide.
pub fn next_message_id(history: &[ChatMessage], now: DateTime<Utc>) -> String {
    let now_ms = now.timestamp_millis();
    let last = history
        .iter()
        .filter_map(|m| m.id.parse::<i64>().ok())
        .max()
        .unwrap_or(i64::MIN);

    now_ms.max(last.saturating_add(1)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sender_serializes_lowercase() {
        let msg = ChatMessage::new("10", "oi", Sender::User);
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"id":"10","text":"oi","sender":"user"}"#);
    }

    #[test]
    fn test_greeting_shape() {
        let greeting = ChatMessage::greeting();
        assert_eq!(greeting.id, "1");
        assert_eq!(greeting.sender, Sender::Bot);
        assert_eq!(greeting.text, GREETING_TEXT);
        assert_eq!(initial_history(), vec![greeting]);
    }

    #[test]
    fn test_next_message_id_uses_timestamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let id = next_message_id(&initial_history(), now);
        assert_eq!(id, "1700000000000");
    }

    #[test]
    fn test_next_message_id_strictly_increases_within_same_millisecond() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let mut history = initial_history();
        history.push(ChatMessage::new(next_message_id(&history, now), "oi", Sender::User));
        let bot_id = next_message_id(&history, now);
        assert_eq!(bot_id, "1700000000001");
    }

    #[test]
    fn test_next_message_id_ignores_non_numeric_ids() {
        let now = Utc.timestamp_millis_opt(5).unwrap();
        let history = vec![ChatMessage::new("abc", "x", Sender::Bot)];
        assert_eq!(next_message_id(&history, now), "5");
    }
}
