use super::horizon_config;
use crate::errors::{AppError, AppResult};
use crate::horizon::HorizonClient;
use clap::Args;
use tracing::{error, info};

/// Test Horizon connectivity
#[derive(Args)]
pub struct TestHorizonCommand {
    /// Optional account to load once the connection is up
    pub account_id: Option<String>,

    /// Horizon URL (overrides config.toml)
    #[arg(long)]
    pub horizon_url: Option<String>,
}

impl TestHorizonCommand {
    pub async fn run(&self) -> AppResult<()> {
        info!("=== Testing Horizon Connection ===");

        let config = horizon_config(self.horizon_url.as_deref())?;
        info!("Testing connection to: {}", config.url);
        let url = config.url.clone();
        let client = HorizonClient::new(config)?;

        if let Err(e) = client.test_connection().await {
            error!("Horizon connection test failed: {}", e);
            println!("Horizon connection test FAILED");
            println!("Error: {}", e);
            println!("\nTroubleshooting tips:");
            println!("1. Verify the Horizon URL is correct ({})", url);
            println!("2. Set HORIZON_URL or horizon.url in config.toml");
            return Err(AppError::Config(format!("Horizon test failed: {}", e)));
        }

        println!("Horizon connection test PASSED");

        if let Some(account_id) = &self.account_id {
            let record = client.load_account(account_id).await?;
            println!(
                "Account {}: {} signers, thresholds {}/{}/{}",
                record.id,
                record.signers.len(),
                record.thresholds.low_threshold,
                record.thresholds.med_threshold,
                record.thresholds.high_threshold
            );
        }

        Ok(())
    }
}
