//! CLI command definitions for the `acolheia` binary.
//!
//! Each subcommand is one screen action of the app: register, login, home,
//! chat, logout and password reset.

pub mod account;
pub mod chat;
pub mod home;
pub mod prompt;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use console::style;

use acolheia_types::error::{AuthError, ChatError, UNEXPECTED_ERROR_TEXT, ValidationError};

/// AcolheIA support chat in the terminal.
#[derive(Parser)]
#[command(name = "acolheia", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Keep accounts and history in memory only, for this run.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Export tracing spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account.
    #[command(alias = "cadastro")]
    Register {
        /// Account email (prompted when omitted).
        #[arg(long)]
        email: Option<String>,

        /// Password, at least 6 characters (prompted when omitted).
        #[arg(long)]
        password: Option<String>,

        /// Password confirmation (prompted when omitted).
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Log in and make the account the active session.
    Login {
        /// Account email (prompted when omitted).
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted when omitted).
        #[arg(long)]
        password: Option<String>,
    },

    /// End the active session.
    Logout,

    /// Show the welcome screen and the active session.
    #[command(alias = "status")]
    Home,

    /// List registered accounts.
    Accounts,

    /// Start an interactive chat with the assistant.
    Chat,

    /// Send a single message and print the reply.
    Send {
        /// Message text.
        message: String,
    },

    /// Print the chat history of the active session.
    History {
        /// Only show the last N messages.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Request a password reset link.
    ResetPassword {
        /// Account email (prompted when omitted).
        #[arg(long)]
        email: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// User-facing text for an error that reached the command boundary.
///
/// Domain errors carry their own Portuguese message; storage and anything
/// else fall back to the generic one.
pub fn user_message(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<AuthError>() {
        return e.user_message();
    }
    if let Some(e) = err.downcast_ref::<ChatError>() {
        return e.user_message();
    }
    if let Some(e) = err.downcast_ref::<ValidationError>() {
        return e.user_message();
    }
    UNEXPECTED_ERROR_TEXT.to_string()
}

/// Print an error as a styled line on stderr, or as JSON on stdout.
pub fn render_error(err: &anyhow::Error, json: bool) {
    let message = user_message(err);
    if json {
        println!(
            "{}",
            serde_json::json!({"ok": false, "error": message, "detail": format!("{err:#}")})
        );
    } else {
        eprintln!("  {} {}", style("!").red().bold(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_register_with_flags() {
        let cli = Cli::try_parse_from([
            "acolheia",
            "register",
            "--email",
            "a@x.com",
            "--password",
            "secret1",
            "--confirm",
            "secret1",
        ])
        .unwrap();
        match cli.command {
            Commands::Register {
                email,
                password,
                confirm,
            } => {
                assert_eq!(email.as_deref(), Some("a@x.com"));
                assert_eq!(password.as_deref(), Some("secret1"));
                assert_eq!(confirm.as_deref(), Some("secret1"));
            }
            _ => panic!("expected register"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["acolheia", "home", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Home));
    }

    #[test]
    fn test_status_alias() {
        let cli = Cli::try_parse_from(["acolheia", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Home));
    }

    #[test]
    fn test_user_message_for_domain_errors() {
        let err = anyhow::Error::from(AuthError::InvalidCredentials);
        assert_eq!(user_message(&err), "Email ou senha inválidos.");

        let err = anyhow::Error::from(ChatError::NoSession);
        assert_eq!(
            user_message(&err),
            "Nenhum usuário conectado. Faça login primeiro."
        );

        let err = anyhow::Error::from(ValidationError::PasswordMismatch);
        assert_eq!(user_message(&err), "As senhas não coincidem.");
    }

    #[test]
    fn test_user_message_for_other_errors() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(user_message(&err), UNEXPECTED_ERROR_TEXT);
    }
}
