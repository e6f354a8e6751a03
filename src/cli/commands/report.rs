//! Signer report shared by the `account` and `transaction` commands

use crate::errors::{AppResult, InspectResult};
use crate::inspector::SignatureSchema;
use crate::types::{Threshold, Warning};
use serde::Serialize;

/// Result of checking a proposed signer set against a schema
#[derive(Debug, Clone, Serialize)]
pub struct ProposedSignersCheck {
    pub signers: Vec<String>,
    pub feasible: bool,
    /// Signatures the ledger would reject as unneeded
    pub extra_signers: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignerReport {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    pub potential_signers: Vec<String>,
    /// Optimal signer list; empty when the schema cannot be satisfied
    pub required_signers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed: Option<ProposedSignersCheck>,
    pub warnings: Vec<Warning>,
}

impl SignerReport {
    /// Build a report for a transaction schema
    pub fn for_transaction(schema: &SignatureSchema, proposed: Option<&[String]>) -> InspectResult<Self> {
        let proposed = match proposed {
            Some(signers) => Some(ProposedSignersCheck {
                signers: signers.to_vec(),
                feasible: schema.check_feasibility(signers)?,
                extra_signers: schema.check_auth_extra(signers)?,
            }),
            None => None,
        };

        Ok(Self {
            kind: schema.kind().to_string(),
            threshold: None,
            potential_signers: schema.all_potential_signers(),
            required_signers: schema.discover_signers(None)?,
            proposed,
            warnings: schema.warnings().to_vec(),
        })
    }

    /// Build a report for an account schema at `threshold`
    pub fn for_account(
        schema: &SignatureSchema,
        threshold: Threshold,
        proposed: Option<&[String]>,
    ) -> InspectResult<Self> {
        let weight = schema.normalize_threshold(threshold)?;
        let proposed = match proposed {
            Some(signers) => Some(ProposedSignersCheck {
                signers: signers.to_vec(),
                feasible: schema.check_account_feasibility(weight, signers)?,
                extra_signers: schema.check_account_auth_extra(weight, signers)?,
            }),
            None => None,
        };

        Ok(Self {
            kind: schema.kind().to_string(),
            threshold: Some(weight),
            potential_signers: schema.all_potential_signers(),
            required_signers: schema.discover_account_signers(weight, None)?,
            proposed,
            warnings: schema.warnings().to_vec(),
        })
    }

    /// Human-readable rendering
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Schema: {}\n", self.kind));
        if let Some(threshold) = self.threshold {
            out.push_str(&format!("Threshold: {}\n", threshold));
        }

        out.push_str(&format!("Potential signers ({}):\n", self.potential_signers.len()));
        for key in &self.potential_signers {
            out.push_str(&format!("  {}\n", key));
        }

        if self.required_signers.is_empty() {
            out.push_str("Required signers: none (cannot be satisfied)\n");
        } else {
            out.push_str(&format!("Required signers ({}):\n", self.required_signers.len()));
            for key in &self.required_signers {
                out.push_str(&format!("  {}\n", key));
            }
        }

        if let Some(check) = &self.proposed {
            out.push_str(&format!(
                "Proposed signers: {} ({})\n",
                check.signers.len(),
                if check.feasible { "sufficient" } else { "insufficient" }
            ));
            for key in &check.extra_signers {
                out.push_str(&format!("  extra: {}\n", key));
            }
        }

        for warning in &self.warnings {
            out.push_str(&format!("Warning [{}]: {}\n", warning.code, warning.message));
        }
        out
    }

    /// Print to stdout, as JSON when `json` is set
    pub fn print(&self, json: bool) -> AppResult<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            print!("{}", self.render());
        }
        Ok(())
    }
}
