//! Non-fatal annotations attached to a signature schema

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningCode {
    /// Referenced account does not exist on the ledger yet
    AccountNotFound,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::AccountNotFound => "account-not-found",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition that cannot be fully checked up front and may make a
/// transaction fail on submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub code: WarningCode,
    pub message: String,
    pub data: String,
}

impl Warning {
    pub fn account_not_found(account_id: &str) -> Self {
        Self {
            code: WarningCode::AccountNotFound,
            message: format!("Source account {} does not exist on the ledger.", account_id),
            data: account_id.to_string(),
        }
    }
}
