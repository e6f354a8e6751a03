//! Stellar Multisig Signer Inspector
//!
//! Works out which keys must sign a transaction or an account action, and
//! whether a given set of signatures is sufficient or carries extras the
//! ledger would reject.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod horizon;
pub mod inspector;
pub mod types;
