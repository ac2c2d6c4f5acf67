//! Discoursa CLI - Gather article evidence and consult a chat model.

use clap::Parser;
use discoursa_cli::{commands, logging};
use discoursa_cli::{Cli, Command, Config};

#[tokio::main]
async fn main() {
    // .env is loaded before the subscriber so RUST_LOG can come from it
    let filter = logging::load_env(None);

    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> discoursa_cli::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Gather(args) => {
            commands::execute_gather(args, &config, &mut stdout)?;
        }
        Command::Ask(args) => {
            let provider = commands::connect(&config, &args.model)?;
            commands::execute_ask(args, &provider, &mut stdout).await?;
        }
        Command::Debate(args) => {
            let provider = commands::connect(&config, &args.model)?;
            commands::execute_debate(args, &config, &provider, &mut stdout).await?;
        }
    }

    Ok(())
}
