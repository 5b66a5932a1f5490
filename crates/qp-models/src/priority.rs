//! Work item classifications: kind, estimation certainty, priority, complexity

use qp_core::config::CertaintyMultipliers;
use serde::{Deserialize, Serialize};

/// Kind of planned work
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Feature,
    Story,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Story => "Story",
        }
    }
}

/// Confidence in an estimate. Drives the effort multiplier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Certainty {
    Low,
    #[default]
    Mid,
    High,
}

impl Certainty {
    /// Multiplier applied to base days for this certainty
    pub fn multiplier(&self, table: &CertaintyMultipliers) -> f64 {
        match self {
            Self::Low => table.low,
            Self::Mid => table.mid,
            Self::High => table.high,
        }
    }
}

/// Work item priority
///
/// Higher weight is processed first by the enhanced engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn weight(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Estimated complexity; simpler items go first among equals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
    #[serde(rename = "Very Complex")]
    VeryComplex,
}

impl Complexity {
    pub fn rank(&self) -> u8 {
        match self {
            Self::Simple => 1,
            Self::Medium => 2,
            Self::Complex => 3,
            Self::VeryComplex => 4,
        }
    }
}
