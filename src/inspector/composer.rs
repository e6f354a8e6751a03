//! Schema composition: source collection, account loading, requirement assembly

use super::requirements::{AccountRequirement, ExtraSignerRequirement, RequestedLevels, Requirement};
use super::resolver::AccountResolver;
use super::schema::{SchemaKind, SignatureSchema};
use crate::crypto::strkey;
use crate::errors::{InspectError, InspectResult};
use crate::types::{AccountRecord, ThresholdLevel, Warning};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// Collects source accounts and their requested levels, loads their state
/// and assembles the final schema
#[derive(Debug, Default)]
pub struct SchemaComposer {
    /// First-reference order
    sources: Vec<(String, RequestedLevels)>,
    extra_signers: Vec<String>,
    accounts: HashMap<String, AccountRecord>,
    warnings: Vec<Warning>,
}

impl SchemaComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `level` as required for `account_id`
    pub fn add_source(&mut self, account_id: &str, level: ThresholdLevel) -> InspectResult<()> {
        if !strkey::is_valid_account_id(account_id) {
            return Err(InspectError::InvalidAccountId {
                id: account_id.to_string(),
            });
        }

        match self.sources.iter_mut().find(|(id, _)| id == account_id) {
            Some((_, levels)) => levels.insert(level),
            None => {
                let mut levels = RequestedLevels::default();
                levels.insert(level);
                self.sources.push((account_id.to_string(), levels));
            }
        }
        Ok(())
    }

    /// Require a signature that is not tied to any account's signer set
    pub fn add_extra_signer(&mut self, key: &str) -> InspectResult<()> {
        if key.trim().is_empty() {
            return Err(InspectError::InvalidSignerKey {
                key: key.to_string(),
            });
        }
        self.extra_signers.push(key.to_string());
        Ok(())
    }

    pub fn sources(&self) -> impl Iterator<Item = (&str, RequestedLevels)> + '_ {
        self.sources.iter().map(|(id, levels)| (id.as_str(), *levels))
    }

    /// Load state for every source account.
    ///
    /// Pre-fetched records are used as-is. The rest are resolved concurrently;
    /// results are applied in source order so warnings do not depend on
    /// completion order. A missing account becomes a warning plus a
    /// single-master-key stand-in; any other failure aborts at once without
    /// waiting for the remaining lookups.
    pub async fn load_accounts<R: AccountResolver>(
        &mut self,
        resolver: &R,
        prefetched: &[AccountRecord],
    ) -> InspectResult<()> {
        let mut pending: Vec<(usize, &str)> = Vec::new();
        for (index, (id, _)) in self.sources.iter().enumerate() {
            match prefetched.iter().find(|record| &record.id == id) {
                Some(record) => {
                    debug!("Using pre-fetched state for account {}", id);
                    self.accounts.insert(id.clone(), record.clone());
                }
                None => pending.push((index, id.as_str())),
            }
        }

        if pending.is_empty() {
            return Ok(());
        }

        let concurrent_limit = resolver.concurrency_hint().max(1);
        info!(
            "Resolving {} accounts with concurrent limit: {}",
            pending.len(),
            concurrent_limit
        );

        // The first fatal error drops the stream, cancelling lookups still in flight
        let mut resolved: Vec<(usize, String, Option<AccountRecord>)> = stream::iter(pending)
            .map(|(index, id)| async move {
                match resolver.resolve(id).await {
                    Ok(record) => Ok((index, id.to_string(), Some(record))),
                    Err(e) if e.is_not_found() => Ok((index, id.to_string(), None)),
                    Err(e) => {
                        error!("Failed to resolve account {}: {}", id, e);
                        Err(InspectError::Resolve {
                            id: id.to_string(),
                            source: e,
                        })
                    }
                }
            })
            .buffer_unordered(concurrent_limit)
            .try_collect::<Vec<_>>()
            .await?;
        resolved.sort_by_key(|(index, _, _)| *index);

        for (_, id, record) in resolved {
            match record {
                Some(record) => {
                    self.accounts.insert(id, record);
                }
                None => {
                    warn!("Source account {} does not exist on the ledger", id);
                    self.warnings.push(Warning::account_not_found(&id));
                    self.accounts.insert(id.clone(), AccountRecord::not_found(id));
                }
            }
        }

        Ok(())
    }

    /// Assemble the schema: account requirements in first-reference order,
    /// then extra-signer requirements (transaction schemas only)
    pub fn build(self, kind: SchemaKind) -> SignatureSchema {
        let Self {
            sources,
            extra_signers,
            accounts,
            warnings,
        } = self;

        let mut requirements: Vec<Requirement> = Vec::with_capacity(sources.len() + extra_signers.len());
        for (id, levels) in &sources {
            // Unloaded sources fall back to the ledger's defaults for a fresh account
            let record = accounts
                .get(id)
                .cloned()
                .unwrap_or_else(|| AccountRecord::new(id.clone()));
            requirements.push(Requirement::Account(AccountRequirement::build(id, levels, &record)));
        }

        if kind == SchemaKind::Transaction {
            requirements.extend(
                extra_signers
                    .into_iter()
                    .map(|key| Requirement::ExtraSigner(ExtraSignerRequirement { key })),
            );
        }

        debug!(
            "Built {} schema with {} requirements and {} warnings",
            kind,
            requirements.len(),
            warnings.len()
        );
        SignatureSchema::new(kind, requirements, warnings)
    }
}
