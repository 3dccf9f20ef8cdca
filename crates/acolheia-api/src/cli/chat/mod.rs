//! Chat commands: the interactive loop, one-shot send and history.
//!
//! All of them operate on the transcript of the active session.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;

use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use acolheia_core::chat::service::SendOutcome;
use acolheia_types::chat::{ChatMessage, Sender};

use crate::state::AppState;

pub(crate) const ASSISTANT_LABEL: &str = "AcolheIA";
pub(crate) const USER_LABEL: &str = "Você";

/// Spinner shown while waiting on storage or the chat API.
pub(crate) fn spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("  {spinner:.magenta} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    Ok(spinner)
}

pub(crate) fn print_message(message: &ChatMessage) {
    match message.sender {
        Sender::User => println!("  {} {}", style(USER_LABEL).green().bold(), message.text),
        Sender::Bot => println!(
            "  {} {}",
            style(ASSISTANT_LABEL).magenta().bold(),
            message.text
        ),
    }
}

/// Print the bot side of an exchange. Error replies are shown in yellow.
pub(crate) fn print_reply(outcome: &SendOutcome) {
    if outcome.is_synthetic() {
        println!(
            "  {} {}",
            style(ASSISTANT_LABEL).magenta().bold(),
            style(&outcome.reply.text).yellow()
        );
    } else {
        print_message(&outcome.reply);
    }
}

/// Send one message from the active session and print the reply.
pub async fn send_once(state: &AppState, message: &str, json: bool) -> Result<()> {
    let mut transcript = state.chat_service.resume().await?;

    let spinner = if json { None } else { Some(spinner("digitando...")?) };
    let result = state.chat_service.send(&mut transcript, message).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let outcome = result?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "ok": true,
                "message": outcome.user_message,
                "reply": outcome.reply,
                "synthetic": outcome.is_synthetic(),
                "error": outcome.failure.as_ref().map(|e| e.to_string()),
            })
        );
    } else {
        print_reply(&outcome);
    }
    Ok(())
}

/// Print the transcript of the active session, optionally only its tail.
pub async fn show_history(state: &AppState, limit: Option<usize>, json: bool) -> Result<()> {
    let transcript = state.chat_service.resume().await?;
    let messages = transcript.messages();
    let start = limit.map_or(0, |n| messages.len().saturating_sub(n));
    let shown = &messages[start..];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style("Histórico de").bold(),
        style(&transcript.session().email).cyan()
    );
    println!();
    for message in shown {
        print_message(message);
    }
    println!();
    Ok(())
}
