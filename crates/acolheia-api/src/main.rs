//! AcolheIA CLI entry point.
//!
//! Binary name: `acolheia`
//!
//! Parses CLI arguments, sets up tracing, wires the services and dispatches
//! to the command handler. Errors are printed in the user's language and the
//! process exits with status 1.

mod cli;
mod state;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,acolheia=debug",
        _ => "trace",
    };
    if let Err(e) = acolheia_observe::tracing_setup::init_tracing(filter, cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let json = cli.json;
    let result = run(cli).await;
    acolheia_observe::tracing_setup::shutdown_tracing();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %format!("{err:#}"), "Command failed");
            cli::render_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "acolheia", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.ephemeral).await?;
    let json = cli.json;

    match cli.command {
        Commands::Register {
            email,
            password,
            confirm,
        } => cli::account::register(&state, email, password, confirm, json).await,
        Commands::Login { email, password } => {
            cli::account::login(&state, email, password, json).await
        }
        Commands::Logout => cli::account::logout(&state, json).await,
        Commands::Home => cli::home::home(&state, json).await,
        Commands::Accounts => cli::account::list_accounts(&state, json).await,
        Commands::Chat => cli::chat::loop_runner::run_chat_loop(&state).await,
        Commands::Send { message } => cli::chat::send_once(&state, &message, json).await,
        Commands::History { limit } => cli::chat::show_history(&state, limit, json).await,
        Commands::ResetPassword { email } => {
            cli::account::reset_password(&state, email, json).await
        }
        Commands::Completions { .. } => Ok(()),
    }
}
