use anyhow::Result;
use signer_inspector::inspector::{
    inspect_account_signers, InspectionOptions, MemoryLedger, SignatureSchema,
};
use signer_inspector::types::AccountRecord;

use crate::common::account_id;

/// Properties of the greedy signer search, checked exhaustively over every
/// subset of a small weighted signer set

const WEIGHTS: [u32; 5] = [4, 3, 2, 1, 1];

struct Fixture {
    schema: SignatureSchema,
    signers: Vec<String>,
}

impl Fixture {
    fn weight_of(&self, key: &str) -> u32 {
        self.signers
            .iter()
            .position(|s| s == key)
            .map(|i| WEIGHTS[i])
            .unwrap_or(0)
    }

    fn subset(&self, mask: u32) -> Vec<String> {
        self.signers
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, s)| s.clone())
            .collect()
    }

    fn all_masks(&self) -> impl Iterator<Item = u32> {
        0..(1u32 << self.signers.len())
    }
}

async fn fixture() -> Result<Fixture> {
    let source = account_id(150);
    let signers: Vec<String> = (0..WEIGHTS.len() as u8).map(|i| account_id(151 + i)).collect();

    let mut record = AccountRecord::new(source.clone())
        .with_master_weight(0)
        .with_thresholds(2, 4, 6);
    for (key, weight) in signers.iter().zip(WEIGHTS) {
        record = record.with_signer(key.clone(), weight);
    }
    let ledger: MemoryLedger = vec![record].into_iter().collect();

    let schema = inspect_account_signers(&source, &ledger, &InspectionOptions::default()).await?;
    Ok(Fixture { schema, signers })
}

#[tokio::test]
async fn test_feasibility_is_monotonic() -> Result<()> {
    let f = fixture().await?;
    for threshold in 1u32..=11 {
        for small in f.all_masks() {
            if !f.schema.check_account_feasibility(threshold, &f.subset(small))? {
                continue;
            }
            for large in f.all_masks().filter(|m| m & small == small) {
                assert!(
                    f.schema.check_account_feasibility(threshold, &f.subset(large))?,
                    "adding signers broke feasibility at threshold {}",
                    threshold
                );
            }
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_duplicates_never_add_weight() -> Result<()> {
    let f = fixture().await?;
    for threshold in 1u32..=11 {
        for mask in f.all_masks() {
            let once = f.subset(mask);
            let mut twice = once.clone();
            twice.extend(once.iter().cloned());

            assert_eq!(
                f.schema.check_account_feasibility(threshold, &once)?,
                f.schema.check_account_feasibility(threshold, &twice)?
            );
            assert_eq!(
                f.schema.discover_account_signers(threshold, Some(once.as_slice()))?,
                f.schema.discover_account_signers(threshold, Some(twice.as_slice()))?
            );
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_discovery_is_a_minimal_heaviest_prefix() -> Result<()> {
    let f = fixture().await?;
    for threshold in 1u32..=11 {
        for mask in f.all_masks() {
            let available = f.subset(mask);
            let found = f
                .schema
                .discover_account_signers(threshold, Some(available.as_slice()))?;
            if found.is_empty() {
                let total: u32 = available.iter().map(|k| f.weight_of(k)).sum();
                assert!(total < threshold);
                continue;
            }

            let weights: Vec<u32> = found.iter().map(|k| f.weight_of(k)).collect();
            assert!(weights.windows(2).all(|w| w[0] >= w[1]), "not heaviest first");
            let total: u32 = weights.iter().sum();
            assert!(total >= threshold);
            assert!(total - weights[weights.len() - 1] < threshold, "over-selected");

            // Nothing left out is heavier than the lightest pick
            let lightest = weights[weights.len() - 1];
            for key in available.iter().filter(|k| !found.contains(k)) {
                assert!(f.weight_of(key) <= lightest);
            }
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_auth_extra_is_complement_of_discovery() -> Result<()> {
    let f = fixture().await?;
    for threshold in 1u32..=11 {
        for mask in f.all_masks() {
            let proposed = f.subset(mask);
            let extra = f.schema.check_account_auth_extra(threshold, &proposed)?;
            if !f.schema.check_account_feasibility(threshold, &proposed)? {
                assert!(extra.is_empty());
                continue;
            }

            let found = f
                .schema
                .discover_account_signers(threshold, Some(proposed.as_slice()))?;
            let expected: Vec<String> = proposed
                .iter()
                .filter(|k| !found.contains(k))
                .cloned()
                .collect();
            assert_eq!(extra, expected);
        }
    }
    Ok(())
}
