//! Slash commands available inside the chat loop.

use console::style;

#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    Clear,
    Exit,
    /// Reprint the transcript.
    History,
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" | "/ajuda" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" | "/sair" => Some(ChatCommand::Exit),
        "/history" | "/historico" => Some(ChatCommand::History),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Help listing for the chat loop.
pub fn help_text() -> String {
    [
        format!("  {}", style("Comandos:").bold()),
        String::new(),
        format!("  {}     Mostra esta ajuda", style("/help").cyan()),
        format!("  {}  Mostra a conversa completa", style("/history").cyan()),
        format!("  {}    Limpa a tela", style("/clear").cyan()),
        format!("  {}     Encerra o chat", style("/exit").cyan()),
        String::new(),
        format!("  {}", style("Ctrl+D para sair").dim()),
    ]
    .join("\n")
}

pub fn print_help() {
    println!();
    println!("{}", help_text());
    println!();
}
