//! Chat service orchestrating the transcript and the remote API.
//!
//! ChatService ties the session flag, the history store and a
//! [`ChatDispatcher`] together: it opens a transcript for the logged-in
//! account and runs the send flow (record the user message, call the API,
//! record the reply or a synthetic error reply).

use acolheia_types::account::Session;
use acolheia_types::chat::{ChatMessage, Sender, next_message_id};
use acolheia_types::error::{ChatError, DispatchError};
use chrono::Utc;
use tracing::{info, warn};

use crate::account::validation::validate_message;
use crate::chat::dispatcher::ChatDispatcher;
use crate::chat::history::HistoryStore;
use crate::session::SessionStore;
use crate::storage::kv_store::KeyValueStore;

/// The caller-owned working copy of one account's transcript.
///
/// Always reflects the latest persisted state: messages are only added to it
/// after they were written.
#[derive(Debug, Clone)]
pub struct Transcript {
    session: Session,
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Result of one send.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub user_message: ChatMessage,
    /// The bot reply, or the synthetic error reply when `failure` is set.
    pub reply: ChatMessage,
    pub failure: Option<DispatchError>,
}

impl SendOutcome {
    pub fn is_synthetic(&self) -> bool {
        self.failure.is_some()
    }
}

/// Orchestrates transcript loading and message sending.
///
/// Generic over the storage and dispatch ports to maintain clean
/// architecture (acolheia-core never depends on acolheia-infra).
pub struct ChatService<K: KeyValueStore, D: ChatDispatcher> {
    sessions: SessionStore<K>,
    history: HistoryStore<K>,
    dispatcher: D,
}

impl<K: KeyValueStore + Clone, D: ChatDispatcher> ChatService<K, D> {
    pub fn new(kv: K, dispatcher: D) -> Self {
        Self {
            sessions: SessionStore::new(kv.clone()),
            history: HistoryStore::new(kv),
            dispatcher,
        }
    }
}

impl<K: KeyValueStore, D: ChatDispatcher> ChatService<K, D> {
    /// Access the dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Open the transcript of the currently logged-in account.
    pub async fn resume(&self) -> Result<Transcript, ChatError> {
        let session = self.sessions.get_session().await?.ok_or(ChatError::NoSession)?;
        self.open(session).await
    }

    /// Open the transcript for `session`. Completes before anything renders.
    pub async fn open(&self, session: Session) -> Result<Transcript, ChatError> {
        let messages = self.history.load_history(&session.email).await?;
        Ok(Transcript { session, messages })
    }

    /// Send one user message.
    ///
    /// Nothing is recorded when the text is blank or the API is not
    /// configured. Otherwise the user message is persisted, the dispatcher
    /// is called once, and exactly one bot message (reply or synthetic error)
    /// is persisted after it. Dispatch failures are not errors of this call.
    pub async fn send(
        &self,
        transcript: &mut Transcript,
        text: &str,
    ) -> Result<SendOutcome, ChatError> {
        validate_message(text)?;

        if let Err(e) = self.dispatcher.ensure_configured() {
            return Err(match e {
                DispatchError::Configuration { missing } => ChatError::Configuration { missing },
                other => ChatError::Configuration {
                    missing: vec![other.to_string()],
                },
            });
        }

        let email = transcript.session.email.clone();

        let user_message = ChatMessage::new(
            next_message_id(&transcript.messages, Utc::now()),
            text,
            Sender::User,
        );
        transcript.messages = self
            .history
            .append_and_persist(&email, transcript.messages.clone(), user_message.clone())
            .await?;

        let (reply_text, failure) = match self.dispatcher.dispatch(text).await {
            Ok(reply) => (reply, None),
            Err(e) => {
                warn!(%email, error = %e, "Chat request failed");
                (e.reply_text(), Some(e))
            }
        };

        let reply = ChatMessage::new(
            next_message_id(&transcript.messages, Utc::now()),
            reply_text,
            Sender::Bot,
        );
        transcript.messages = self
            .history
            .append_and_persist(&email, transcript.messages.clone(), reply.clone())
            .await?;

        info!(
            %email,
            transcript_len = transcript.messages.len(),
            synthetic = failure.is_some(),
            "Chat exchange recorded"
        );

        Ok(SendOutcome {
            user_message,
            reply,
            failure,
        })
    }
}
