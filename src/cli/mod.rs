use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Stellar Multisig Signer Inspector
#[derive(Parser)]
#[command(name = "signer-inspector")]
#[command(about = "Find the signers a Stellar account or transaction needs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Discover signers for an account at a threshold
    Account(commands::account::AccountCommand),
    /// Discover signers for a transaction envelope (JSON)
    Transaction(commands::transaction::TransactionCommand),
    /// Test Horizon connectivity
    TestHorizon(commands::test_horizon::TestHorizonCommand),
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Account(command) => command.run().await,
        Commands::Transaction(command) => command.run().await,
        Commands::TestHorizon(command) => command.run().await,
    }
}
