pub mod account;
pub mod report;
pub mod test_horizon;
pub mod transaction;

use crate::config::{AppConfig, HorizonConfig};
use crate::errors::{AppError, AppResult};
use crate::types::AccountRecord;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load configuration or use defaults, then apply the CLI URL override
pub fn horizon_config(url_override: Option<&str>) -> AppResult<HorizonConfig> {
    let app_config = AppConfig::get_defaults().map_err(|e| AppError::Config(e.to_string()))?;
    let mut horizon = app_config.horizon;
    if let Some(url) = url_override {
        horizon.url = url.to_string();
    }
    Ok(horizon)
}

/// Read a JSON array of pre-fetched account records
pub fn load_account_records(path: Option<&Path>) -> AppResult<Vec<AccountRecord>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let contents = fs::read_to_string(path)?;
    let records: Vec<AccountRecord> = serde_json::from_str(&contents).map_err(|e| {
        AppError::InvalidData(format!("Failed to parse accounts file {}: {}", path.display(), e))
    })?;
    info!("Loaded {} account records from {}", records.len(), path.display());
    Ok(records)
}
