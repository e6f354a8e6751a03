//! Account state lookup boundary

use crate::errors::{ResolveError, ResolveResult};
use crate::types::AccountRecord;
use std::collections::HashMap;
use std::future::Future;

/// Source of ledger account state
///
/// Implementations report a missing account with `ResolveError::NotFound`;
/// the composer turns that into a warning. Any other error aborts composition.
pub trait AccountResolver {
    fn resolve(&self, account_id: &str) -> impl Future<Output = ResolveResult<AccountRecord>> + Send;

    /// Upper bound on lookups the composer keeps in flight
    fn concurrency_hint(&self) -> usize {
        4
    }
}

/// In-memory ledger, used for offline inspection from pre-fetched records
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    accounts: HashMap<String, AccountRecord>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: AccountRecord) {
        self.accounts.insert(record.id.clone(), record);
    }

    pub fn remove(&mut self, account_id: &str) -> Option<AccountRecord> {
        self.accounts.remove(account_id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl FromIterator<AccountRecord> for MemoryLedger {
    fn from_iter<I: IntoIterator<Item = AccountRecord>>(iter: I) -> Self {
        let mut ledger = MemoryLedger::new();
        for record in iter {
            ledger.insert(record);
        }
        ledger
    }
}

impl AccountResolver for MemoryLedger {
    async fn resolve(&self, account_id: &str) -> ResolveResult<AccountRecord> {
        self.accounts
            .get(account_id)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                id: account_id.to_string(),
            })
    }

    fn concurrency_hint(&self) -> usize {
        self.accounts.len().max(1)
    }
}
