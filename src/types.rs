//! Signer Inspector - Type System
//!
//! - `threshold`: threshold levels, numeric threshold sets, query thresholds
//! - `account`: resolved ledger account state (Horizon account records)
//! - `operation`: transactions, fee-bump envelopes and operation kinds
//! - `warning`: non-fatal schema annotations

pub mod account;
pub mod operation;
pub mod threshold;
pub mod warning;

pub use account::{AccountRecord, LedgerSigner, LedgerThresholds, DEFAULT_MASTER_WEIGHT};
pub use operation::{
    FeeBumpTransaction, Operation, OperationKind, SignerUpdate, Transaction, TransactionEnvelope,
};
pub use threshold::{Threshold, ThresholdLevel, ThresholdSet};
pub use warning::{Warning, WarningCode};
