//! Signature schema: immutable requirement set plus the optimal-signer search
//!
//! A schema is produced once by the composer and never mutated. Two kinds
//! share the same engine:
//!
//! - **Account** schemas answer queries against a threshold supplied per call
//!   (a level name resolved through the account's thresholds, or a raw weight).
//! - **Transaction** schemas use the threshold baked into each requirement
//!   when the transaction's operations were classified, and may carry
//!   extra-signer requirements.
//!
//! Infeasibility is never an error: discovery returns an empty list and
//! feasibility returns `false`. Errors are reserved for malformed input.

use super::requirements::{AccountRequirement, Requirement};
use crate::errors::{InspectError, InspectResult};
use crate::types::{Threshold, Warning};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Evaluation mode of a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Account,
    Transaction,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Account => "account",
            SchemaKind::Transaction => "transaction",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirements tree that fully describes the source accounts and weights
/// needed for an account action or a transaction to be authorised
#[derive(Debug, Clone, Serialize)]
pub struct SignatureSchema {
    kind: SchemaKind,
    requirements: Vec<Requirement>,
    warnings: Vec<Warning>,
}

impl SignatureSchema {
    pub(crate) fn new(kind: SchemaKind, requirements: Vec<Requirement>, warnings: Vec<Warning>) -> Self {
        Self {
            kind,
            requirements,
            warnings,
        }
    }

    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Conditions that could not be fully checked and may cause a failure on submission
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Every signer that could contribute to this schema, first-seen order
    pub fn all_potential_signers(&self) -> Vec<String> {
        let mut signers: Vec<String> = Vec::new();
        let mut add = |key: &str| {
            if !signers.iter().any(|s| s == key) {
                signers.push(key.to_string());
            }
        };
        for requirement in &self.requirements {
            match requirement {
                Requirement::Account(account) => {
                    account.signers.iter().for_each(|s| add(&s.key));
                }
                Requirement::ExtraSigner(extra) => add(&extra.key),
            }
        }
        signers
    }

    // ---- transaction mode ----

    /// Optimal signer list, optionally restricted to `available` signers
    ///
    /// Each key appears once, including an extra signer that is also an account signer.
    pub fn discover_signers(&self, available: Option<&[String]>) -> InspectResult<Vec<String>> {
        self.ensure_kind(SchemaKind::Transaction)?;
        Ok(self.discover_with(|account| account.min_threshold, available))
    }

    /// True if `signers` carry enough weight to fully authorise the transaction
    pub fn check_feasibility(&self, signers: &[String]) -> InspectResult<bool> {
        Ok(!self.discover_signers(Some(signers))?.is_empty())
    }

    /// Proposed signers that would make the ledger reject the transaction
    /// for carrying unneeded signatures
    pub fn check_auth_extra(&self, proposed: &[String]) -> InspectResult<Vec<String>> {
        self.ensure_kind(SchemaKind::Transaction)?;
        Ok(self.auth_extra_with(|account| account.min_threshold, proposed))
    }

    // ---- account mode ----

    /// Optimal signer list for `threshold`, optionally restricted to `available` signers
    pub fn discover_account_signers(
        &self,
        threshold: impl Into<Threshold>,
        available: Option<&[String]>,
    ) -> InspectResult<Vec<String>> {
        self.ensure_kind(SchemaKind::Account)?;
        let threshold = self.normalize_threshold(threshold.into())?;
        Ok(self.discover_with(|_| threshold, available))
    }

    /// True if `signers` carry enough weight to meet `threshold`
    pub fn check_account_feasibility(
        &self,
        threshold: impl Into<Threshold>,
        signers: &[String],
    ) -> InspectResult<bool> {
        Ok(!self
            .discover_account_signers(threshold, Some(signers))?
            .is_empty())
    }

    /// Proposed signers that are not needed to meet `threshold`
    pub fn check_account_auth_extra(
        &self,
        threshold: impl Into<Threshold>,
        proposed: &[String],
    ) -> InspectResult<Vec<String>> {
        self.ensure_kind(SchemaKind::Account)?;
        let threshold = self.normalize_threshold(threshold.into())?;
        Ok(self.auth_extra_with(|_| threshold, proposed))
    }

    /// Convert a threshold level to its numeric value
    ///
    /// Levels resolve through the first account requirement's thresholds;
    /// raw weights pass through unchanged.
    pub fn normalize_threshold(&self, threshold: Threshold) -> InspectResult<u32> {
        match threshold {
            Threshold::Weight(weight) => Ok(weight),
            Threshold::Level(level) => self
                .requirements
                .iter()
                .find_map(Requirement::as_account)
                .map(|account| account.thresholds.get(level))
                .ok_or_else(|| InspectError::InvalidThreshold {
                    value: level.to_string(),
                }),
        }
    }

    fn ensure_kind(&self, expected: SchemaKind) -> InspectResult<()> {
        if self.kind != expected {
            return Err(InspectError::SchemaKindMismatch {
                expected: expected.as_str(),
                actual: self.kind.as_str(),
            });
        }
        Ok(())
    }

    /// Greedy search shared by both modes.
    ///
    /// Walks every requirement in order. Account requirements take signers
    /// from the front of their weight-sorted list until the threshold is met;
    /// a single unreachable requirement fails the whole search.
    fn discover_with<F>(&self, threshold_of: F, available: Option<&[String]>) -> Vec<String>
    where
        F: Fn(&AccountRequirement) -> u32,
    {
        let is_available =
            |key: &str| available.map_or(true, |signers| signers.iter().any(|s| s == key));
        let mut result: Vec<String> = Vec::new();

        for requirement in &self.requirements {
            match requirement {
                Requirement::Account(account) => {
                    let threshold = threshold_of(account) as u64;
                    let mut total_weight: u64 = 0;

                    for signer in account.signers.iter().filter(|s| is_available(&s.key)) {
                        total_weight += signer.weight as u64;
                        if !result.contains(&signer.key) {
                            result.push(signer.key.clone());
                        }
                        if total_weight >= threshold {
                            break;
                        }
                    }

                    if total_weight < threshold || total_weight == 0 {
                        debug!(
                            "Account {} unreachable: weight {} of required {}",
                            account.account_id, total_weight, threshold
                        );
                        return Vec::new();
                    }
                }
                Requirement::ExtraSigner(extra) => {
                    if !is_available(&extra.key) {
                        debug!("Extra signer {} not available", extra.key);
                        return Vec::new();
                    }
                    if !result.contains(&extra.key) {
                        result.push(extra.key.clone());
                    }
                }
            }
        }

        result
    }

    fn auth_extra_with<F>(&self, threshold_of: F, proposed: &[String]) -> Vec<String>
    where
        F: Fn(&AccountRequirement) -> u32,
    {
        if proposed.is_empty() {
            return Vec::new();
        }

        // A repeated signature never adds weight
        let mut unique: Vec<String> = Vec::with_capacity(proposed.len());
        let mut unneeded: Vec<String> = Vec::new();
        for signer in proposed {
            if unique.contains(signer) {
                unneeded.push(signer.clone());
            } else {
                unique.push(signer.clone());
            }
        }

        let optimal = self.discover_with(threshold_of, Some(unique.as_slice()));
        if optimal.is_empty() {
            return unneeded;
        }

        unneeded.extend(unique.into_iter().filter(|s| !optimal.contains(s)));
        unneeded
    }
}
