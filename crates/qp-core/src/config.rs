//! Configuration types and loading
//!
//! Planner settings: the certainty multiplier table, the assignment engine
//! and its strategy knobs, and the proposal staleness threshold.

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::result::{ensure_valid, PlanResult};
use crate::types::{Algorithm, EngineKind, ScoreWeights};

/// Main planner configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    /// Estimation settings
    pub estimation: EstimationConfig,

    /// Assignment engine settings
    pub assignment: AssignmentConfig,

    /// Proposal lifecycle settings
    pub proposals: ProposalConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct EstimationConfig {
    pub multipliers: CertaintyMultipliers,
}

/// Certainty -> effort multiplier table
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CertaintyMultipliers {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl Default for CertaintyMultipliers {
    fn default() -> Self {
        Self {
            low: 1.5,
            mid: 1.25,
            high: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Which engine generates proposals
    pub engine: EngineKind,
    /// Scoring preset for the enhanced engine
    pub algorithm: Algorithm,
    /// Weights used when `algorithm` is `custom`
    pub custom_weights: Option<ScoreWeights>,
    /// Items may only go to members of the same application
    pub strict_application_matching: bool,
    /// Upper bound on concurrent items per member
    pub max_concurrent_items: u32,
    /// Use preferred/avoided item kinds in scoring
    pub respect_preferences: bool,
    /// Honor member availability windows
    pub consider_availability: bool,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Enhanced,
            algorithm: Algorithm::Hybrid,
            custom_weights: None,
            strict_application_matching: true,
            max_concurrent_items: 3,
            respect_preferences: true,
            consider_availability: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProposalConfig {
    /// A proposal older than this is flagged stale
    pub stale_after_hours: i64,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            stale_after_hours: 24,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from `QP_*` environment variables on top of defaults.
    /// Unparsable values keep their default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let parse_bool = |v: String| v == "true" || v == "1" || v == "yes";

        // Estimation
        if let Ok(v) = std::env::var("QP_MULTIPLIER_LOW") {
            config.estimation.multipliers.low = v.parse().unwrap_or(config.estimation.multipliers.low);
        }
        if let Ok(v) = std::env::var("QP_MULTIPLIER_MID") {
            config.estimation.multipliers.mid = v.parse().unwrap_or(config.estimation.multipliers.mid);
        }
        if let Ok(v) = std::env::var("QP_MULTIPLIER_HIGH") {
            config.estimation.multipliers.high = v.parse().unwrap_or(config.estimation.multipliers.high);
        }

        // Assignment
        if let Ok(v) = std::env::var("QP_ENGINE") {
            match v.trim().to_lowercase().as_str() {
                "strict" => config.assignment.engine = EngineKind::Strict,
                "enhanced" => config.assignment.engine = EngineKind::Enhanced,
                other => tracing::warn!(value = other, "Ignoring unknown QP_ENGINE"),
            }
        }
        if let Ok(v) = std::env::var("QP_ALGORITHM") {
            match Algorithm::parse(&v) {
                Some(algorithm) => config.assignment.algorithm = algorithm,
                None => tracing::warn!(value = %v, "Ignoring unknown QP_ALGORITHM"),
            }
        }
        if let Ok(v) = std::env::var("QP_STRICT_APPLICATION_MATCHING") {
            config.assignment.strict_application_matching = parse_bool(v);
        }
        if let Ok(v) = std::env::var("QP_MAX_CONCURRENT_ITEMS") {
            config.assignment.max_concurrent_items =
                v.parse().unwrap_or(config.assignment.max_concurrent_items);
        }

        // Proposals
        if let Ok(v) = std::env::var("QP_STALE_AFTER_HOURS") {
            config.proposals.stale_after_hours = v.parse().unwrap_or(config.proposals.stale_after_hours);
        }

        config
    }

    /// Load configuration from an optional file (TOML or JSON, by extension)
    /// layered under `QP__SECTION__KEY` environment overrides.
    pub fn load(path: Option<&str>) -> PlanResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix("QP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: PlannerConfig = builder.build()?.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    /// Reject settings no generation can run with
    pub fn check(&self) -> PlanResult<()> {
        let mut errors = ValidationErrors::new();
        let m = &self.estimation.multipliers;
        for (name, value) in [("low", m.low), ("mid", m.mid), ("high", m.high)] {
            if value < 0.0 {
                errors.add(format!("estimation.multipliers.{name}"), "must be non-negative");
            }
        }
        if self.proposals.stale_after_hours <= 0 {
            errors.add("proposals.stale_after_hours", "must be positive");
        }
        ensure_valid(errors)
    }

    /// Weights for the configured custom algorithm, if any
    pub fn custom_weights(&self) -> Option<ScoreWeights> {
        match self.assignment.algorithm {
            Algorithm::Custom => self.assignment.custom_weights,
            _ => None,
        }
    }
}
