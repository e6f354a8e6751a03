//! Threshold levels and numeric threshold sets

use crate::errors::InspectError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sensitivity tier an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdLevel {
    Low,
    Med,
    High,
}

impl ThresholdLevel {
    /// All levels, lowest first
    pub const ALL: [ThresholdLevel; 3] = [ThresholdLevel::Low, ThresholdLevel::Med, ThresholdLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdLevel::Low => "low",
            ThresholdLevel::Med => "med",
            ThresholdLevel::High => "high",
        }
    }
}

impl fmt::Display for ThresholdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only `low`, `med` and `high` are accepted
impl FromStr for ThresholdLevel {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ThresholdLevel::Low),
            "med" => Ok(ThresholdLevel::Med),
            "high" => Ok(ThresholdLevel::High),
            other => Err(InspectError::InvalidThresholdLevel {
                level: other.to_string(),
            }),
        }
    }
}

/// Account's configured numeric thresholds per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub low: u32,
    pub med: u32,
    pub high: u32,
}

impl ThresholdSet {
    pub fn new(low: u32, med: u32, high: u32) -> Self {
        Self { low, med, high }
    }

    pub fn get(&self, level: ThresholdLevel) -> u32 {
        match level {
            ThresholdLevel::Low => self.low,
            ThresholdLevel::Med => self.med,
            ThresholdLevel::High => self.high,
        }
    }
}

/// Threshold argument for account-mode queries: a level name resolved
/// against the schema, or a raw weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    Level(ThresholdLevel),
    Weight(u32),
}

impl From<ThresholdLevel> for Threshold {
    fn from(level: ThresholdLevel) -> Self {
        Threshold::Level(level)
    }
}

impl From<u32> for Threshold {
    fn from(weight: u32) -> Self {
        Threshold::Weight(weight)
    }
}

/// Lenient parse used for user-supplied thresholds.
///
/// Numbers become `Weight`. Level names are matched case-insensitively on
/// their alphabetic prefix, so `"HIGH"` and `"med_threshold"` both resolve.
impl FromStr for Threshold {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(weight) = trimmed.parse::<u32>() {
            return Ok(Threshold::Weight(weight));
        }

        let prefix: String = trimmed
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();

        prefix
            .parse::<ThresholdLevel>()
            .map(Threshold::Level)
            .map_err(|_| InspectError::InvalidThreshold {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Level(level) => write!(f, "{}", level),
            Threshold::Weight(weight) => write!(f, "{}", weight),
        }
    }
}
