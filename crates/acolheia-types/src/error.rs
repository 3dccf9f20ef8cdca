use thiserror::Error;

/// Generic apology shown when the chat API cannot be reached or fails.
pub const CONNECTION_APOLOGY: &str =
    "Desculpe, estou com problemas para me conectar. Tente novamente mais tarde.";

/// Shown when the chat API answers without a `resposta` field.
pub const UNEXPECTED_FORMAT_TEXT: &str = "Formato de resposta inesperado da API.";

/// Shown for failures that have no more specific message.
pub const UNEXPECTED_ERROR_TEXT: &str = "Um erro inesperado ocorreu.";

/// Form input rejected before touching storage or the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email and password are required")]
    MissingLoginFields,

    #[error("email, password and confirmation are required")]
    MissingRegistrationFields,

    #[error("email is required")]
    MissingResetEmail,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must have at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("message is empty")]
    EmptyMessage,
}

impl ValidationError {
    /// Text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingLoginFields => {
                "Por favor, preencha o email e a senha.".to_string()
            }
            ValidationError::MissingRegistrationFields => {
                "Por favor, preencha todos os campos.".to_string()
            }
            ValidationError::MissingResetEmail | ValidationError::InvalidEmail => {
                "Por favor, insira um e-mail válido.".to_string()
            }
            ValidationError::PasswordTooShort { min } => {
                format!("A senha deve ter pelo menos {min} caracteres.")
            }
            ValidationError::PasswordMismatch => "As senhas não coincidem.".to_string(),
            ValidationError::EmptyMessage => "A mensagem não pode estar vazia.".to_string(),
        }
    }
}

/// Errors from the key-value persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A stored value exists but cannot be decoded. Never treated as empty.
    #[error("corrupt value under '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

/// Errors from registration, login and the other account actions.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("account '{0}' already exists")]
    AlreadyExists(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Validation(e) => e.user_message(),
            AuthError::AlreadyExists(_) => "Este e-mail já foi cadastrado.".to_string(),
            AuthError::InvalidCredentials => "Email ou senha inválidos.".to_string(),
            AuthError::Storage(_) => UNEXPECTED_ERROR_TEXT.to_string(),
        }
    }
}

/// Failure of one outbound chat request.
///
/// None of these abort the conversation: the chat layer turns them into a
/// synthetic bot message (see [`DispatchError::reply_text`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("chat API is not configured (missing: {})", .missing.join(", "))]
    Configuration { missing: Vec<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

impl DispatchError {
    /// Text of the synthetic bot message recorded for this failure.
    ///
    /// A server-provided `detail` is shown as-is unless it mentions `HTTP`;
    /// such a detail, a bare HTTP status or a transport failure becomes the
    /// generic apology.
    pub fn reply_text(&self) -> String {
        match self {
            DispatchError::Api {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() && !detail.contains("HTTP") => detail.clone(),
            DispatchError::UnexpectedFormat(_) => UNEXPECTED_FORMAT_TEXT.to_string(),
            _ => CONNECTION_APOLOGY.to_string(),
        }
    }
}

/// Errors from the chat action itself (not from the remote API).
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("chat API is not configured (missing: {})", .missing.join(", "))]
    Configuration { missing: Vec<String> },

    #[error("no active session")]
    NoSession,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ChatError {
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Validation(e) => e.user_message(),
            ChatError::Configuration { missing } => format!(
                "Erro: a configuração da API não foi carregada (faltando: {}). Verifique o config.toml ou as variáveis ACOLHEIA_* e tente novamente.",
                missing.join(", ")
            ),
            ChatError::NoSession => "Nenhum usuário conectado. Faça login primeiro.".to_string(),
            ChatError::Storage(_) => UNEXPECTED_ERROR_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_user_messages() {
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.user_message(),
            "A senha deve ter pelo menos 6 caracteres."
        );
        assert_eq!(
            ValidationError::PasswordMismatch.user_message(),
            "As senhas não coincidem."
        );
    }

    #[test]
    fn test_auth_error_user_messages() {
        assert_eq!(
            AuthError::AlreadyExists("a@x.com".to_string()).user_message(),
            "Este e-mail já foi cadastrado."
        );
        assert_eq!(
            AuthError::InvalidCredentials.user_message(),
            "Email ou senha inválidos."
        );
        let storage = AuthError::from(StorageError::Backend("disk full".to_string()));
        assert_eq!(storage.user_message(), UNEXPECTED_ERROR_TEXT);
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Corrupt {
            key: "@acolheia_user_db".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "corrupt value under '@acolheia_user_db': expected value"
        );
    }

    #[test]
    fn test_dispatch_reply_text_uses_detail() {
        let err = DispatchError::Api {
            status: 400,
            detail: Some("Mensagem muito longa.".to_string()),
        };
        assert_eq!(err.reply_text(), "Mensagem muito longa.");
    }

    #[test]
    fn test_dispatch_reply_text_detail_mentioning_http_is_apology() {
        let err = DispatchError::Api {
            status: 502,
            detail: Some("HTTP 502 upstream".to_string()),
        };
        assert_eq!(err.reply_text(), CONNECTION_APOLOGY);
    }

    #[test]
    fn test_dispatch_reply_text_bare_status_is_apology() {
        let err = DispatchError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(err.reply_text(), CONNECTION_APOLOGY);
        assert_eq!(err.to_string(), "HTTP 500: no detail");
    }

    #[test]
    fn test_dispatch_reply_text_network_and_format() {
        assert_eq!(
            DispatchError::Network("connection refused".to_string()).reply_text(),
            CONNECTION_APOLOGY
        );
        assert_eq!(
            DispatchError::UnexpectedFormat("missing resposta".to_string()).reply_text(),
            UNEXPECTED_FORMAT_TEXT
        );
    }

    #[test]
    fn test_configuration_error_lists_missing() {
        let err = ChatError::Configuration {
            missing: vec!["base_url".to_string(), "access_key".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "chat API is not configured (missing: base_url, access_key)"
        );
        assert!(err.user_message().contains("base_url, access_key"));
    }
}
