//! Terminal chat for the ECO Matrix assistant.
//! Run: cargo run -p eco-console            (interactive)
//!      cargo run -p eco-console -- -m "What services do you offer?"

mod session;

use clap::Parser;
use eco_core::{validate_message, CoreConfig, PhrasePicker, RandomPicker, Responder, SeededPicker};
use session::{Outcome, Session};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "eco-console", version, about = "Chat with the ECO Matrix AI Assistant")]
struct Cli {
    /// Answer a single message and exit.
    #[arg(short, long)]
    message: Option<String>,

    /// Seed greeting/farewell phrasing (overrides `phrase_seed` from config).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Some(notice) = dotenv_notice(dotenvy::dotenv()) {
        eprintln!("{}", notice);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CoreConfig::load()?;

    let picker: Arc<dyn PhrasePicker> = match cli.seed.or(config.phrase_seed) {
        Some(seed) => Arc::new(SeededPicker::new(seed)),
        None => Arc::new(RandomPicker),
    };
    let responder = Arc::new(Responder::builtin(picker));

    if let Some(message) = cli.message {
        let message = validate_message(&message)?;
        println!("{}", responder.generate_response(message));
        return Ok(());
    }

    run_interactive(&config, Session::new(responder))
}

/// Startup notice for a `.env` file that could not be loaded.
fn dotenv_notice<T>(result: dotenvy::Result<T>) -> Option<String> {
    result
        .err()
        .map(|e| format!("[eco-console] .env not loaded: {} (using system environment)", e))
}

fn run_interactive(
    config: &CoreConfig,
    mut session: Session,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", config.app_name)?;
    writeln!(stdout, "Ask about services, the platform, pricing or contact details. Type /help for commands.\n")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle_line(&line) {
            Outcome::Reply(text) => writeln!(stdout, "\n{}\n", text)?,
            Outcome::Quit => break,
        }
    }

    tracing::debug!("Console session ended after {} turns", session.transcript().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotenv_notice_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let notice = dotenv_notice(dotenvy::from_path(dir.path().join(".env"))).unwrap();
        assert!(notice.starts_with("[eco-console] .env not loaded: "));
        assert!(notice.ends_with("(using system environment)"));
    }

    #[test]
    fn test_dotenv_notice_silent_when_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "ECO_CONSOLE_DOTENV_CHECK=1\n").unwrap();
        assert_eq!(dotenv_notice(dotenvy::from_path(&path)), None);
    }
}
