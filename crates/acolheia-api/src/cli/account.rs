//! Account CLI commands: register, login, logout, reset-password, accounts.

use anyhow::Result;
use comfy_table::{Cell, ContentArrangement, Table, presets};
use console::style;

use acolheia_types::account::{LoginForm, RegistrationForm, Session};

use super::prompt::{secret_or_prompt, text_or_prompt};
use crate::state::AppState;

/// Register a new account, prompting for any missing field.
pub async fn register(
    state: &AppState,
    email: Option<String>,
    password: Option<String>,
    confirm: Option<String>,
    json: bool,
) -> Result<()> {
    let form = RegistrationForm {
        email: text_or_prompt(email, "email")?,
        password: secret_or_prompt(password, "senha (mín. 6 caracteres)")?,
        confirm_password: secret_or_prompt(confirm, "confirme sua senha")?,
    };
    submit_registration(state, &form, json).await
}

pub(crate) async fn submit_registration(
    state: &AppState,
    form: &RegistrationForm,
    json: bool,
) -> Result<()> {
    let account = state.auth_service.register(form).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({"ok": true, "registered": account.email})
        );
    } else {
        println!(
            "  {} Cadastro realizado com sucesso! Faça login com {}.",
            style("✓").green().bold(),
            style(&account.email).bold()
        );
    }
    Ok(())
}

/// Log in, prompting for any missing field.
pub async fn login(
    state: &AppState,
    email: Option<String>,
    password: Option<String>,
    json: bool,
) -> Result<()> {
    let form = LoginForm {
        email: text_or_prompt(email, "email")?,
        password: secret_or_prompt(password, "senha")?,
    };
    submit_login(state, &form, json).await?;
    Ok(())
}

pub(crate) async fn submit_login(
    state: &AppState,
    form: &LoginForm,
    json: bool,
) -> Result<Session> {
    let session = state.auth_service.login(form).await?;

    if json {
        println!("{}", serde_json::json!({"ok": true, "session": session.email}));
    } else {
        println!(
            "  {} Bem-vindo(a), {}!",
            style("✓").green().bold(),
            style(&session.email).cyan().bold()
        );
        println!(
            "  {}",
            style("Use `acolheia chat` para iniciar uma conversa.").dim()
        );
    }
    Ok(session)
}

/// End the active session.
pub async fn logout(state: &AppState, json: bool) -> Result<()> {
    let previous = state.auth_service.logout().await?;

    if json {
        println!(
            "{}",
            serde_json::json!({"ok": true, "logged_out": previous.as_ref().map(|s| s.email.as_str())})
        );
        return Ok(());
    }

    match previous {
        Some(session) => println!(
            "  {} Usuário deslogado ({}).",
            style("✓").green().bold(),
            style(&session.email).dim()
        ),
        None => println!("  {}", style("Nenhum usuário conectado.").dim()),
    }
    Ok(())
}

/// Request a password reset link for an email.
pub async fn reset_password(state: &AppState, email: Option<String>, json: bool) -> Result<()> {
    let email = text_or_prompt(email, "seu-email@exemplo.com")?;
    state.auth_service.request_password_reset(&email).await?;

    if json {
        println!("{}", serde_json::json!({"ok": true, "reset_requested": true}));
    } else {
        println!(
            "  {} Sucesso! Verifique seu e-mail para o link de redefinição.",
            style("✓").green().bold()
        );
    }
    Ok(())
}

/// List registered accounts. Passwords are never printed.
pub async fn list_accounts(state: &AppState, json: bool) -> Result<()> {
    let accounts = state.auth_service.accounts().list().await?;
    let active = state.auth_service.current_session().await?;
    let is_active = |email: &str| active.as_ref().is_some_and(|s| s.email == email);

    if json {
        let rows: Vec<_> = accounts
            .iter()
            .map(|a| serde_json::json!({"email": a.email, "active": is_active(&a.email)}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if accounts.is_empty() {
        println!();
        println!("  No accounts registered yet.");
        println!(
            "  Create one with: {}",
            style("acolheia register").cyan()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Email", "Session"]);

    for (i, account) in accounts.iter().enumerate() {
        let marker = if is_active(&account.email) { "active" } else { "" };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&account.email),
            Cell::new(marker),
        ]);
    }

    println!("{table}");
    Ok(())
}
