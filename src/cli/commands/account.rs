use super::report::SignerReport;
use super::{horizon_config, load_account_records};
use crate::errors::AppResult;
use crate::horizon::HorizonClient;
use crate::inspector::{inspect_account_signers, AccountResolver, InspectionOptions, MemoryLedger};
use crate::types::Threshold;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Discover the signers an account needs for a threshold
#[derive(Args)]
pub struct AccountCommand {
    /// Account public key (G...)
    pub account_id: String,

    /// Threshold level (low, med, high) or a raw weight
    #[arg(long, default_value = "med")]
    pub threshold: Threshold,

    /// Proposed signers to check for sufficiency and extra signatures
    #[arg(long, num_args = 1..)]
    pub signers: Option<Vec<String>>,

    /// JSON file with pre-fetched account records
    #[arg(long)]
    pub accounts: Option<PathBuf>,

    /// Do not contact Horizon; accounts missing from --accounts are treated as new
    #[arg(long)]
    pub offline: bool,

    /// Horizon URL (overrides config.toml)
    #[arg(long)]
    pub horizon_url: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl AccountCommand {
    pub async fn run(&self) -> AppResult<()> {
        let options = InspectionOptions::with_accounts(load_account_records(self.accounts.as_deref())?);

        let report = if self.offline {
            self.inspect(&MemoryLedger::new(), &options).await?
        } else {
            let config = horizon_config(self.horizon_url.as_deref())?;
            info!("Using Horizon at {}", config.url);
            self.inspect(&HorizonClient::new(config)?, &options).await?
        };

        report.print(self.json)
    }

    async fn inspect<R: AccountResolver>(
        &self,
        resolver: &R,
        options: &InspectionOptions,
    ) -> AppResult<SignerReport> {
        let schema = inspect_account_signers(&self.account_id, resolver, options).await?;
        Ok(SignerReport::for_account(
            &schema,
            self.threshold,
            self.signers.as_deref(),
        )?)
    }
}
