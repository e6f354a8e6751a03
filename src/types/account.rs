//! Ledger account state as returned by Horizon's `/accounts/{id}` endpoint

use super::threshold::ThresholdSet;
use serde::{Deserialize, Serialize};

/// Weight the ledger implicitly assigns to an account's own key
pub const DEFAULT_MASTER_WEIGHT: u32 = 1;

/// Numeric thresholds in Horizon's wire naming
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerThresholds {
    pub low_threshold: u32,
    pub med_threshold: u32,
    pub high_threshold: u32,
}

impl From<LedgerThresholds> for ThresholdSet {
    fn from(t: LedgerThresholds) -> Self {
        ThresholdSet::new(t.low_threshold, t.med_threshold, t.high_threshold)
    }
}

/// Signer entry of an account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSigner {
    pub key: String,
    pub weight: u32,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub signer_type: Option<String>,
}

impl LedgerSigner {
    pub fn new(key: impl Into<String>, weight: u32) -> Self {
        Self {
            key: key.into(),
            weight,
            signer_type: Some("ed25519_public_key".to_string()),
        }
    }
}

/// Resolved account state: the only part of an account the inspector reads
///
/// Extra Horizon fields (balances, sequence, flags) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub thresholds: LedgerThresholds,
    #[serde(default)]
    pub signers: Vec<LedgerSigner>,
}

impl AccountRecord {
    /// Fresh account: master key at default weight, all thresholds zero
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            signers: vec![LedgerSigner::new(id.clone(), DEFAULT_MASTER_WEIGHT)],
            id,
            thresholds: LedgerThresholds::default(),
        }
    }

    /// Stand-in for an account missing from the ledger
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::new(id)
    }

    pub fn with_signer(mut self, key: impl Into<String>, weight: u32) -> Self {
        self.signers.push(LedgerSigner::new(key, weight));
        self
    }

    /// Set the master key weight, adding the master signer if absent
    pub fn with_master_weight(mut self, weight: u32) -> Self {
        match self.signers.iter().position(|s| s.key == self.id) {
            Some(index) => self.signers[index].weight = weight,
            None => self.signers.push(LedgerSigner::new(self.id.clone(), weight)),
        }
        self
    }

    pub fn with_thresholds(mut self, low: u32, med: u32, high: u32) -> Self {
        self.thresholds = LedgerThresholds {
            low_threshold: low,
            med_threshold: med,
            high_threshold: high,
        };
        self
    }

    pub fn threshold_set(&self) -> ThresholdSet {
        self.thresholds.into()
    }
}
