use super::report::SignerReport;
use super::{horizon_config, load_account_records};
use crate::errors::{AppError, AppResult};
use crate::horizon::HorizonClient;
use crate::inspector::{
    inspect_transaction_signers, AccountResolver, InspectionOptions, MemoryLedger,
};
use crate::types::TransactionEnvelope;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Discover the signers a transaction needs
#[derive(Args)]
pub struct TransactionCommand {
    /// JSON file holding the transaction envelope
    pub file: PathBuf,

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

impl TransactionCommand {
    pub async fn run(&self) -> AppResult<()> {
        let envelope = read_envelope(&self.file)?;
        let options = InspectionOptions::with_accounts(load_account_records(self.accounts.as_deref())?);

        let report = if self.offline {
            self.inspect(&envelope, &MemoryLedger::new(), &options).await?
        } else {
            let config = horizon_config(self.horizon_url.as_deref())?;
            info!("Using Horizon at {}", config.url);
            self.inspect(&envelope, &HorizonClient::new(config)?, &options)
                .await?
        };

        report.print(self.json)
    }

    async fn inspect<R: AccountResolver>(
        &self,
        envelope: &TransactionEnvelope,
        resolver: &R,
        options: &InspectionOptions,
    ) -> AppResult<SignerReport> {
        let schema = inspect_transaction_signers(envelope, resolver, options).await?;
        Ok(SignerReport::for_transaction(
            &schema,
            self.signers.as_deref(),
        )?)
    }
}

/// Read a transaction envelope from a JSON file
pub fn read_envelope(path: &Path) -> AppResult<TransactionEnvelope> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::InvalidData(format!(
            "Failed to parse transaction envelope {}: {}",
            path.display(),
            e
        ))
    })
}
