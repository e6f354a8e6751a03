//! Common Test Utilities
//!
//! Shared helpers for the integration and unit test suites: deterministic
//! account ids, a counting in-memory ledger and transaction fixtures.

#![allow(dead_code)]

use signer_inspector::crypto::strkey::encode_account_id;

/// Deterministic account id for a given seed byte
pub fn account_id(seed: u8) -> String {
    encode_account_id(&[seed; 32])
}

pub fn keys(ids: &[&String]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Order-insensitive comparison, mirroring set-membership assertions
pub fn assert_same_members(actual: &[String], expected: &[String]) {
    let mut a = actual.to_vec();
    let mut e = expected.to_vec();
    a.sort();
    e.sort();
    assert_eq!(a, e, "signer sets differ");
}

/// Fake ledger resolvers
pub mod ledger {
    use signer_inspector::errors::{ResolveError, ResolveResult};
    use signer_inspector::inspector::{AccountResolver, MemoryLedger};
    use signer_inspector::types::AccountRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Memory ledger that counts lookups and can delay responses
    #[derive(Default)]
    pub struct FakeLedger {
        ledger: MemoryLedger,
        lookups: AtomicUsize,
        /// Delay lookups so later references complete first
        staggered: bool,
    }

    impl FakeLedger {
        pub fn new(records: Vec<AccountRecord>) -> Self {
            Self {
                ledger: records.into_iter().collect(),
                ..Default::default()
            }
        }

        /// Lookups sleep longer for accounts referenced earlier
        pub fn staggered(mut self) -> Self {
            self.staggered = true;
            self
        }

        pub fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl AccountResolver for FakeLedger {
        async fn resolve(&self, account_id: &str) -> ResolveResult<AccountRecord> {
            let call = self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.staggered {
                let delay = 40u64.saturating_sub(call as u64 * 10);
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            self.ledger.resolve(account_id).await
        }

        fn concurrency_hint(&self) -> usize {
            8
        }
    }

    /// Fails one account immediately; every other lookup hangs for `delay`
    pub struct FailingLedger {
        pub failing: String,
        pub delay: Duration,
    }

    impl AccountResolver for FailingLedger {
        async fn resolve(&self, account_id: &str) -> ResolveResult<AccountRecord> {
            if account_id == self.failing {
                return Err(ResolveError::RequestFailed {
                    url: format!("/accounts/{}", account_id),
                    message: "HTTP 400 Bad Request".to_string(),
                });
            }
            tokio::time::sleep(self.delay).await;
            Ok(AccountRecord::new(account_id))
        }
    }

    /// Resolver whose backend is always down
    pub struct UnreachableLedger;

    impl AccountResolver for UnreachableLedger {
        async fn resolve(&self, _account_id: &str) -> ResolveResult<AccountRecord> {
            Err(ResolveError::ConnectionFailed("connection refused".to_string()))
        }
    }
}

/// Transaction fixtures
pub mod fixtures {
    use signer_inspector::types::{Operation, OperationKind, SignerUpdate, Transaction};

    pub fn payment() -> Operation {
        Operation::new(OperationKind::Payment)
    }

    pub fn change_trust(source: &str) -> Operation {
        Operation::new(OperationKind::ChangeTrust).with_source(source)
    }

    pub fn create_account() -> Operation {
        Operation::new(OperationKind::CreateAccount)
    }

    pub fn add_signer(key: &str, weight: u32) -> Operation {
        let mut kind = OperationKind::set_options();
        if let OperationKind::SetOptions { signer, .. } = &mut kind {
            *signer = Some(SignerUpdate {
                key: key.to_string(),
                weight,
            });
        }
        Operation::new(kind)
    }

    pub fn transaction(source: &str, operations: Vec<Operation>) -> Transaction {
        Transaction::new(source, operations)
    }
}
