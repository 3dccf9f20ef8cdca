//! Interactive chat loop.
//!
//! Loads the transcript of the active session, prints it, then sends each
//! submitted line through the chat service until the user exits.

use console::style;
use tracing::info;

use acolheia_core::chat::dispatcher::ChatDispatcher;
use acolheia_types::error::{ChatError, DispatchError};

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::{print_message, print_reply, spinner};

/// Run the interactive chat loop for the logged-in account.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let loading = spinner("Carregando seu histórico...")?;
    let loaded = state.chat_service.resume().await;
    loading.finish_and_clear();
    let mut transcript = loaded?;

    print_welcome_banner(&transcript.session().email, transcript.len());
    for message in transcript.messages() {
        print_message(message);
    }
    println!();

    if let Err(DispatchError::Configuration { missing }) =
        state.chat_service.dispatcher().ensure_configured()
    {
        let err = ChatError::Configuration { missing };
        eprintln!("  {} {}", style("!").yellow().bold(), err.user_message());
        println!();
    }

    info!(email = %transcript.session().email, "Chat started");

    let prompt = format!("  {} ", style("Você >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    let result = loop {
        match chat_input.read_line().await {
            InputEvent::Eof => break Ok(()),
            InputEvent::Interrupted => {
                println!("\n  {}", style("Ctrl+D para sair, ou continue conversando.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                if text.trim().is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => break Ok(()),
                        ChatCommand::History => {
                            println!();
                            for message in transcript.messages() {
                                print_message(message);
                            }
                            println!();
                        }
                        ChatCommand::Unknown(name) => println!(
                            "\n  {} Comando desconhecido: {}. Digite /help.\n",
                            style("?").yellow().bold(),
                            style(name).dim()
                        ),
                    }
                    continue;
                }

                let typing = spinner("digitando...")?;
                let sent = state.chat_service.send(&mut transcript, &text).await;
                typing.finish_and_clear();

                match sent {
                    Ok(outcome) => {
                        println!();
                        print_reply(&outcome);
                        println!();
                    }
                    // Nothing was recorded; the user may fix it and retry.
                    Err(e @ (ChatError::Validation(_) | ChatError::Configuration { .. })) => {
                        eprintln!("\n  {} {}\n", style("!").red().bold(), e.user_message());
                    }
                    Err(e) => break Err(e.into()),
                }
            }
        }
    };

    chat_input.flush();
    println!("\n  {}", style("Conversa encerrada.").dim());
    info!(
        email = %transcript.session().email,
        messages = transcript.len(),
        "Chat ended"
    );
    result
}
