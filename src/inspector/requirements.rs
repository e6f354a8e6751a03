//! Per-account weighted signature requirements

use crate::types::{AccountRecord, ThresholdLevel, ThresholdSet, DEFAULT_MASTER_WEIGHT};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Candidate signer of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerDescriptor {
    pub key: String,
    pub weight: u32,
    /// Signer key equals the owning account id
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_master: bool,
}

/// Threshold levels requested for one source account across all operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestedLevels {
    low: bool,
    med: bool,
    high: bool,
}

impl RequestedLevels {
    pub fn all() -> Self {
        Self {
            low: true,
            med: true,
            high: true,
        }
    }

    pub fn insert(&mut self, level: ThresholdLevel) {
        match level {
            ThresholdLevel::Low => self.low = true,
            ThresholdLevel::Med => self.med = true,
            ThresholdLevel::High => self.high = true,
        }
    }

    pub fn contains(&self, level: ThresholdLevel) -> bool {
        match level {
            ThresholdLevel::Low => self.low,
            ThresholdLevel::Med => self.med,
            ThresholdLevel::High => self.high,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ThresholdLevel> + '_ {
        ThresholdLevel::ALL
            .into_iter()
            .filter(move |level| self.contains(*level))
    }

    pub fn is_empty(&self) -> bool {
        !(self.low || self.med || self.high)
    }
}

impl FromIterator<ThresholdLevel> for RequestedLevels {
    fn from_iter<I: IntoIterator<Item = ThresholdLevel>>(iter: I) -> Self {
        let mut levels = RequestedLevels::default();
        for level in iter {
            levels.insert(level);
        }
        levels
    }
}

/// Weighted signature requirement of a single source account
///
/// `signers` is sorted by weight descending; equal weights put the master
/// key last, then order by key. Any prefix of the list is therefore the
/// heaviest selection of its size, which is what the greedy search relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRequirement {
    pub account_id: String,
    pub min_threshold: u32,
    pub thresholds: ThresholdSet,
    pub signers: Vec<SignerDescriptor>,
}

impl AccountRequirement {
    /// Normalise resolved account state into a requirement record
    ///
    /// Weight-0 signers are dropped. A record without any signers gets a
    /// synthetic master signer of `DEFAULT_MASTER_WEIGHT`, the weight the
    /// ledger implicitly grants an account's own key.
    pub fn build(account_id: &str, requested: &RequestedLevels, record: &AccountRecord) -> Self {
        let thresholds = record.threshold_set();
        let min_threshold = requested
            .iter()
            .map(|level| thresholds.get(level))
            .max()
            .unwrap_or(0);

        let mut signers: Vec<SignerDescriptor> = record
            .signers
            .iter()
            .filter(|s| s.weight > 0)
            .map(|s| SignerDescriptor {
                key: s.key.clone(),
                weight: s.weight,
                is_master: s.key == account_id,
            })
            .collect();

        if record.signers.is_empty() {
            debug!(
                "Account {} has no signers on record, using master key with weight {}",
                account_id, DEFAULT_MASTER_WEIGHT
            );
            signers.push(SignerDescriptor {
                key: account_id.to_string(),
                weight: DEFAULT_MASTER_WEIGHT,
                is_master: true,
            });
        }

        signers.sort_by(signer_order);

        let requirement = Self {
            account_id: account_id.to_string(),
            min_threshold,
            thresholds,
            signers,
        };
        debug!(
            "Built requirement for {}: min threshold {}, {} candidate signers, total weight {}",
            account_id,
            min_threshold,
            requirement.signers.len(),
            requirement.total_weight()
        );
        requirement
    }

    /// Sum of every candidate signer's weight
    pub fn total_weight(&self) -> u64 {
        self.signers.iter().map(|s| s.weight as u64).sum()
    }
}

fn signer_order(a: &SignerDescriptor, b: &SignerDescriptor) -> Ordering {
    b.weight
        .cmp(&a.weight)
        .then_with(|| a.is_master.cmp(&b.is_master))
        .then_with(|| a.key.cmp(&b.key))
}

/// Mandatory signer unrelated to any account's weighted signer set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraSignerRequirement {
    pub key: String,
}

/// Unit stored in a schema's requirement list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    Account(AccountRequirement),
    ExtraSigner(ExtraSignerRequirement),
}

impl Requirement {
    pub fn as_account(&self) -> Option<&AccountRequirement> {
        match self {
            Requirement::Account(account) => Some(account),
            Requirement::ExtraSigner(_) => None,
        }
    }
}
