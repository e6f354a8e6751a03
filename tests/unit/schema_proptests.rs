//! Randomised checks of the signer search in both schema kinds
//!
//! Accounts draw cosigners from a shared pool, so the same key often
//! carries weight for several accounts. Weights include zero and ties with
//! the master key; transaction schemas may carry an extra signer that is
//! any key of the universe, or one nobody else knows.

use futures::executor::block_on;
use proptest::prelude::*;
use signer_inspector::inspector::{MemoryLedger, SchemaComposer, SchemaKind, SignatureSchema};
use signer_inspector::types::{AccountRecord, ThresholdLevel};

use crate::common::account_id;

const MAX_ACCOUNTS: usize = 3;
const POOL: usize = 6;
/// Masters, then pool cosigners, then one standalone key
const UNIVERSE: usize = MAX_ACCOUNTS + POOL + 1;

fn universe() -> Vec<String> {
    (0..UNIVERSE as u8).map(|i| account_id(60 + i)).collect()
}

fn master(index: usize) -> String {
    universe()[index].clone()
}

fn cosigner(index: usize) -> String {
    universe()[MAX_ACCOUNTS + index].clone()
}

#[derive(Debug, Clone)]
struct AccountSpec {
    master_weight: u32,
    cosigners: Vec<(usize, u32)>,
    thresholds: (u32, u32, u32),
    level: ThresholdLevel,
}

impl AccountSpec {
    fn record(&self, index: usize) -> AccountRecord {
        let (low, med, high) = self.thresholds;
        let mut record = AccountRecord::new(master(index))
            .with_master_weight(self.master_weight)
            .with_thresholds(low, med, high);
        for &(pool_index, weight) in &self.cosigners {
            record = record.with_signer(cosigner(pool_index), weight);
        }
        record
    }
}

fn account_spec() -> impl Strategy<Value = AccountSpec> {
    (
        0u32..=3,
        prop::collection::btree_map(0..POOL, 0u32..=4, 0..4),
        (0u32..=8, 0u32..=8, 0u32..=8),
        prop::sample::select(ThresholdLevel::ALL.to_vec()),
    )
        .prop_map(|(master_weight, cosigners, thresholds, level)| AccountSpec {
            master_weight,
            cosigners: cosigners.into_iter().collect(),
            thresholds,
            level,
        })
}

/// How queries pick their threshold
#[derive(Debug, Clone, Copy)]
enum Mode {
    Account(u32),
    Transaction,
}

fn compose(
    accounts: &[AccountSpec],
    extra: Option<usize>,
    kind: SchemaKind,
) -> SignatureSchema {
    let mut composer = SchemaComposer::new();
    let ledger: MemoryLedger = accounts
        .iter()
        .enumerate()
        .map(|(i, spec)| spec.record(i))
        .collect();

    for (i, spec) in accounts.iter().enumerate() {
        match kind {
            SchemaKind::Account => {
                for level in ThresholdLevel::ALL {
                    composer.add_source(&master(i), level).unwrap();
                }
            }
            SchemaKind::Transaction => composer.add_source(&master(i), spec.level).unwrap(),
        }
    }
    if let Some(index) = extra {
        composer.add_extra_signer(&universe()[index]).unwrap();
    }

    block_on(composer.load_accounts(&ledger, &[])).unwrap();
    composer.build(kind)
}

fn subset(mask: u32) -> Vec<String> {
    universe()
        .into_iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, key)| key)
        .collect()
}

fn feasible(schema: &SignatureSchema, mode: Mode, signers: &[String]) -> bool {
    match mode {
        Mode::Account(threshold) => schema.check_account_feasibility(threshold, signers),
        Mode::Transaction => schema.check_feasibility(signers),
    }
    .unwrap()
}

fn discover(schema: &SignatureSchema, mode: Mode, signers: &[String]) -> Vec<String> {
    match mode {
        Mode::Account(threshold) => schema.discover_account_signers(threshold, Some(signers)),
        Mode::Transaction => schema.discover_signers(Some(signers)),
    }
    .unwrap()
}

fn auth_extra(schema: &SignatureSchema, mode: Mode, signers: &[String]) -> Vec<String> {
    match mode {
        Mode::Account(threshold) => schema.check_account_auth_extra(threshold, signers),
        Mode::Transaction => schema.check_auth_extra(signers),
    }
    .unwrap()
}

/// Properties shared by both modes for one proposed set `S` (no repeats)
/// and one key `x` drawn from the universe
fn check_properties(
    schema: &SignatureSchema,
    mode: Mode,
    mask: u32,
    pick: usize,
) -> Result<(), TestCaseError> {
    let proposed = subset(mask);
    let x = universe()[pick].clone();
    let is_feasible = feasible(schema, mode, &proposed);
    let found = discover(schema, mode, &proposed);
    let extra = auth_extra(schema, mode, &proposed);

    // Discovery only ever picks from what was offered
    prop_assert!(found.iter().all(|key| proposed.contains(key)));
    prop_assert_eq!(is_feasible, !found.is_empty());

    // No over-signing: extras are exactly what discovery left out
    if is_feasible {
        let expected: Vec<String> = proposed
            .iter()
            .filter(|key| !found.contains(key))
            .cloned()
            .collect();
        prop_assert_eq!(&extra, &expected);
    } else {
        prop_assert!(extra.is_empty());
    }

    if proposed.contains(&x) {
        // A repeated signature is always reported, ahead of everything else
        let mut doubled = proposed.clone();
        doubled.push(x.clone());
        let mut expected = vec![x.clone()];
        expected.extend(extra.iter().cloned());
        prop_assert_eq!(auth_extra(schema, mode, &doubled), expected);
        prop_assert_eq!(feasible(schema, mode, &doubled), is_feasible);
    } else if is_feasible {
        // Monotonicity: one more signer never breaks feasibility
        let mut larger = proposed.clone();
        larger.push(x);
        prop_assert!(feasible(schema, mode, &larger));
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_account_schema_properties(
        spec in account_spec(),
        threshold in 0u32..=12,
        mask in 0u32..(1 << UNIVERSE),
        pick in 0..UNIVERSE,
    ) {
        let schema = compose(std::slice::from_ref(&spec), None, SchemaKind::Account);
        check_properties(&schema, Mode::Account(threshold), mask, pick)?;
    }

    #[test]
    fn prop_transaction_schema_properties(
        accounts in prop::collection::vec(account_spec(), 1..=MAX_ACCOUNTS),
        extra in prop::option::of(0..UNIVERSE),
        mask in 0u32..(1 << UNIVERSE),
        pick in 0..UNIVERSE,
    ) {
        let schema = compose(&accounts, extra, SchemaKind::Transaction);
        check_properties(&schema, Mode::Transaction, mask, pick)?;
    }

    #[test]
    fn prop_unrestricted_discovery_matches_full_universe(
        accounts in prop::collection::vec(account_spec(), 1..=MAX_ACCOUNTS),
        extra in prop::option::of(0..UNIVERSE),
    ) {
        let schema = compose(&accounts, extra, SchemaKind::Transaction);
        let everyone = universe();
        prop_assert_eq!(
            schema.discover_signers(None).unwrap(),
            schema.discover_signers(Some(everyone.as_slice())).unwrap()
        );
    }
}
