//! Operation → required threshold level

use crate::types::{Operation, OperationKind, ThresholdLevel};

/// Threshold level an operation's source account must meet
///
/// `setOptions` only needs `high` when it touches the master weight, any
/// threshold or the signer list; otherwise it falls through to `med` like
/// every other (including unrecognised) operation.
pub fn classify(operation: &Operation) -> ThresholdLevel {
    classify_kind(&operation.kind)
}

pub fn classify_kind(kind: &OperationKind) -> ThresholdLevel {
    match kind {
        OperationKind::AllowTrust
        | OperationKind::SetTrustLineFlags
        | OperationKind::BumpSequence => ThresholdLevel::Low,
        OperationKind::AccountMerge => ThresholdLevel::High,
        OperationKind::SetOptions {
            master_weight,
            low_threshold,
            med_threshold,
            high_threshold,
            signer,
            ..
        } if master_weight.is_some()
            || low_threshold.is_some()
            || med_threshold.is_some()
            || high_threshold.is_some()
            || signer.is_some() =>
        {
            ThresholdLevel::High
        }
        _ => ThresholdLevel::Med,
    }
}
