//! Transaction and operation descriptors consumed by the inspector
//!
//! Only the parts that matter for signer discovery are modelled: source
//! accounts, operation kinds, the `setOptions` fields that raise the
//! required threshold, and transaction-level extra signers.

use serde::{Deserialize, Serialize};

/// Signer change carried by a `setOptions` operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerUpdate {
    pub key: String,
    pub weight: u32,
}

/// Operation kind tag with the fields the threshold classifier inspects
///
/// Unknown tags decode as `Other` and are classified at the default level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OperationKind {
    CreateAccount,
    Payment,
    PathPaymentStrictReceive,
    PathPaymentStrictSend,
    ManageSellOffer,
    ManageBuyOffer,
    CreatePassiveSellOffer,
    #[serde(rename_all = "camelCase")]
    SetOptions {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        master_weight: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        low_threshold: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        med_threshold: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        high_threshold: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        signer: Option<SignerUpdate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        home_domain: Option<String>,
    },
    ChangeTrust,
    AllowTrust,
    SetTrustLineFlags,
    AccountMerge,
    Inflation,
    ManageData,
    BumpSequence,
    CreateClaimableBalance,
    ClaimClaimableBalance,
    BeginSponsoringFutureReserves,
    EndSponsoringFutureReserves,
    RevokeSponsorship,
    Clawback,
    ClawbackClaimableBalance,
    LiquidityPoolDeposit,
    LiquidityPoolWithdraw,
    InvokeHostFunction,
    ExtendFootprintTtl,
    RestoreFootprint,
    #[serde(other)]
    Other,
}

impl OperationKind {
    /// `setOptions` with no fields set
    pub fn set_options() -> Self {
        OperationKind::SetOptions {
            master_weight: None,
            low_threshold: None,
            med_threshold: None,
            high_threshold: None,
            signer: None,
            home_domain: None,
        }
    }
}

/// Single operation with its optional source override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub kind: OperationKind,
}

impl Operation {
    pub fn new(kind: OperationKind) -> Self {
        Self { source: None, kind }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Regular transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub source: String,
    pub operations: Vec<Operation>,
    /// Signers required by the transaction itself, outside any account's signer set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_signers: Vec<String>,
}

impl Transaction {
    pub fn new(source: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            source: source.into(),
            operations,
            extra_signers: Vec::new(),
        }
    }

    pub fn with_extra_signer(mut self, key: impl Into<String>) -> Self {
        self.extra_signers.push(key.into());
        self
    }
}

/// Fee-bump wrapper: only the fee source signs the outer envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBumpTransaction {
    pub fee_source: String,
    pub inner: Transaction,
}

/// Transaction-mode input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionEnvelope {
    Transaction(Transaction),
    FeeBump(FeeBumpTransaction),
}

impl From<Transaction> for TransactionEnvelope {
    fn from(tx: Transaction) -> Self {
        TransactionEnvelope::Transaction(tx)
    }
}

impl From<FeeBumpTransaction> for TransactionEnvelope {
    fn from(tx: FeeBumpTransaction) -> Self {
        TransactionEnvelope::FeeBump(tx)
    }
}
