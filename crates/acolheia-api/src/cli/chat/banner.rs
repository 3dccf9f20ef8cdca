//! Header printed when an interactive chat starts.

use console::style;

pub fn print_welcome_banner(email: &str, message_count: usize) {
    println!();
    println!("  {}", style("Assistente AcolheIA").magenta().bold());
    println!(
        "  {}  {}",
        style("Conta:").bold(),
        style(email).dim()
    );
    println!(
        "  {}  {}",
        style("Mensagens:").bold(),
        style(message_count).dim()
    );
    println!();
    println!(
        "  {}",
        style("Digite sua mensagem... /help para comandos, Ctrl+D para sair").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
