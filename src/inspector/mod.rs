//! Signer inspection
//!
//! - **Classifier** - operation kind to required threshold level
//! - **Requirements** - per-account weighted requirement records
//! - **Schema** - immutable requirement set with the optimal-signer search
//! - **Composer** - collects sources, loads accounts and assembles a schema
//! - **Resolver** - account state lookup boundary
//!
//! Entry points are [`inspect_transaction_signers`] and
//! [`inspect_account_signers`]; both return a [`SignatureSchema`].

pub mod classifier;
pub mod composer;
pub mod requirements;
pub mod resolver;
pub mod schema;

pub use classifier::classify;
pub use composer::SchemaComposer;
pub use requirements::{
    AccountRequirement, ExtraSignerRequirement, RequestedLevels, Requirement, SignerDescriptor,
};
pub use resolver::{AccountResolver, MemoryLedger};
pub use schema::{SchemaKind, SignatureSchema};

use crate::errors::InspectResult;
use crate::types::{AccountRecord, ThresholdLevel, TransactionEnvelope};
use tracing::info;

/// Inspection options
#[derive(Debug, Clone, Default)]
pub struct InspectionOptions {
    /// Account records already fetched by the caller; these accounts are not resolved again
    pub accounts_info: Vec<AccountRecord>,
}

impl InspectionOptions {
    pub fn with_accounts(accounts_info: Vec<AccountRecord>) -> Self {
        Self { accounts_info }
    }
}

/// Discover required signers for a transaction.
///
/// The transaction source is always required at `low`; every operation adds
/// its own source (or the transaction source) at the operation's level.
/// A fee-bump envelope only requires its fee source; evaluate the inner
/// transaction with a separate call.
pub async fn inspect_transaction_signers<R: AccountResolver>(
    envelope: &TransactionEnvelope,
    resolver: &R,
    options: &InspectionOptions,
) -> InspectResult<SignatureSchema> {
    let mut composer = SchemaComposer::new();

    match envelope {
        TransactionEnvelope::Transaction(tx) => {
            composer.add_source(&tx.source, ThresholdLevel::Low)?;
            for operation in &tx.operations {
                let source = operation.source.as_deref().unwrap_or(&tx.source);
                composer.add_source(source, classify(operation))?;
            }
            for key in &tx.extra_signers {
                composer.add_extra_signer(key)?;
            }
            info!(
                "Inspecting transaction from {} with {} operations",
                tx.source,
                tx.operations.len()
            );
        }
        TransactionEnvelope::FeeBump(bump) => {
            composer.add_source(&bump.fee_source, ThresholdLevel::Low)?;
            info!("Inspecting fee bump transaction from {}", bump.fee_source);
        }
    }

    composer.load_accounts(resolver, &options.accounts_info).await?;
    Ok(composer.build(SchemaKind::Transaction))
}

/// Discover signers for an account across all threshold levels
pub async fn inspect_account_signers<R: AccountResolver>(
    account_id: &str,
    resolver: &R,
    options: &InspectionOptions,
) -> InspectResult<SignatureSchema> {
    let mut composer = SchemaComposer::new();
    for level in ThresholdLevel::ALL {
        composer.add_source(account_id, level)?;
    }
    info!("Inspecting account {}", account_id);

    composer.load_accounts(resolver, &options.accounts_info).await?;
    Ok(composer.build(SchemaKind::Account))
}
