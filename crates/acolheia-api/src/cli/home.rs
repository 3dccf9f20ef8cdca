//! Home screen: welcome text, active session and setup status.

use anyhow::Result;
use console::style;

use crate::state::AppState;

const WELCOME_TITLE: &str = "Bem-vindo(a)!";
const WELCOME_TEXT: &str = "O AcolheIA é um projeto de plataforma de saúde digital voltado para a população transgênero e não-binária.";

/// Display the home screen.
pub async fn home(state: &AppState, json: bool) -> Result<()> {
    let session = state.auth_service.current_session().await?;
    let accounts = state.auth_service.accounts().list().await?;
    let missing = state.config.chat_api.missing_settings();

    if json {
        let home = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "storage": state.store.backend_name(),
            "session": session.as_ref().map(|s| s.email.as_str()),
            "accounts": accounts.len(),
            "chat_api": {
                "configured": missing.is_empty(),
                "missing": missing,
            },
        });
        println!("{}", serde_json::to_string_pretty(&home)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(WELCOME_TITLE).magenta().bold());
    println!("  {}", style(WELCOME_TEXT).dim());
    println!();

    println!("  {}", style("── Sessão ──").dim());
    match &session {
        Some(session) => {
            println!("  Conectado(a): {}", style(&session.email).cyan().bold());
            println!(
                "  {}",
                style("acolheia chat  para iniciar a conversa, acolheia logout  para sair").dim()
            );
        }
        None => {
            println!("  {}", style("Nenhum usuário conectado.").yellow());
            println!(
                "  {}",
                style("acolheia login  ou  acolheia register").dim()
            );
        }
    }
    println!();

    println!("  {}", style("── Setup ──").dim());
    println!("  Accounts: {}", style(accounts.len()).bold());
    println!(
        "  Storage:  {} ({})",
        state.store.backend_name(),
        style(state.data_dir.display()).dim()
    );
    if missing.is_empty() {
        println!("  Chat API: {}", style("configured").green());
    } else {
        println!(
            "  Chat API: {} (missing: {})",
            style("not configured").red(),
            missing.join(", ")
        );
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::ephemeral_state;

    #[tokio::test]
    async fn test_home_renders_without_session() {
        let state = ephemeral_state();
        home(&state, false).await.unwrap();
        home(&state, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_home_with_session() {
        let state = ephemeral_state();
        state.auth_service.sessions().set_session("a@x.com").await.unwrap();
        home(&state, false).await.unwrap();
    }
}
