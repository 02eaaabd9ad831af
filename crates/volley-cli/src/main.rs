use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use volley_transport::{GameConfig, GameController};

/// Run the initiator/responder message exchange in a single process.
#[derive(Debug, Parser)]
#[command(author, version, about = "Two-player message exchange over in-process mailboxes")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of rounds before the exchange stops
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    rounds: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }

    let controller = GameController::with_config(config);
    let report = controller.run().await?;

    println!(
        "Exchange complete: initiator sent {} and received {}; responder sent {}",
        report.initiator_sent, report.initiator_received, report.responder_sent
    );

    Ok(())
}
