//! Assignment strategies
//!
//! A strategy is the weight record for the four scoring factors plus the
//! settings that gate eligibility. The four named presets live in [`presets`].

use qp_core::config::AssignmentConfig;
use qp_core::types::{Algorithm, ScoreWeights};
use serde::{Deserialize, Serialize};

/// Eligibility and scoring switches
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategySettings {
    /// Default cap on concurrent items per member
    pub max_concurrent_items: u32,
    /// Only members of the item's application are eligible
    pub require_application_match: bool,
    /// Preferred/avoided item kinds feed the priority factor
    pub respect_preferences: bool,
    /// Availability windows exclude members outside them
    pub consider_availability: bool,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            max_concurrent_items: 3,
            require_application_match: true,
            respect_preferences: true,
            consider_availability: true,
        }
    }
}

impl StrategySettings {
    pub fn from_config(config: &AssignmentConfig) -> Self {
        Self {
            max_concurrent_items: config.max_concurrent_items,
            require_application_match: config.strict_application_matching,
            respect_preferences: config.respect_preferences,
            consider_availability: config.consider_availability,
        }
    }
}

/// Weights plus settings for one enhanced-engine run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStrategy {
    pub algorithm: Algorithm,
    pub weights: ScoreWeights,
    #[serde(default)]
    pub settings: StrategySettings,
}

impl Default for AssignmentStrategy {
    fn default() -> Self {
        presets::hybrid()
    }
}

impl AssignmentStrategy {
    /// Named preset. `Custom` has no weights of its own and falls back to zero weights.
    pub fn preset(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::SkillBased => presets::skill_based(),
            Algorithm::WorkloadBalanced => presets::workload_balanced(),
            Algorithm::PriorityBased => presets::priority_based(),
            Algorithm::Hybrid => presets::hybrid(),
            Algorithm::Custom => presets::custom(ScoreWeights::default()),
        }
    }

    /// Strategy described by configuration. A custom algorithm without
    /// weights is treated as the default preset.
    pub fn from_config(config: &AssignmentConfig) -> Self {
        let base = match (config.algorithm, config.custom_weights) {
            (Algorithm::Custom, Some(weights)) => presets::custom(weights),
            (Algorithm::Custom, None) => {
                tracing::warn!("Custom algorithm configured without weights, using hybrid");
                presets::hybrid()
            }
            (algorithm, _) => Self::preset(algorithm),
        };
        base.with_settings(StrategySettings::from_config(config))
    }

    pub fn with_settings(mut self, settings: StrategySettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn name(&self) -> &'static str {
        self.algorithm.label()
    }
}

/// The built-in strategies
pub mod presets {
    use super::*;

    fn preset(algorithm: Algorithm, weights: ScoreWeights) -> AssignmentStrategy {
        AssignmentStrategy {
            algorithm,
            weights,
            settings: StrategySettings::default(),
        }
    }

    pub fn skill_based() -> AssignmentStrategy {
        preset(Algorithm::SkillBased, ScoreWeights::new(0.7, 0.2, 0.1, 0.0))
    }

    pub fn workload_balanced() -> AssignmentStrategy {
        preset(Algorithm::WorkloadBalanced, ScoreWeights::new(0.3, 0.6, 0.1, 0.0))
    }

    pub fn priority_based() -> AssignmentStrategy {
        preset(Algorithm::PriorityBased, ScoreWeights::new(0.2, 0.2, 0.4, 0.2))
    }

    pub fn hybrid() -> AssignmentStrategy {
        preset(Algorithm::Hybrid, ScoreWeights::new(0.4, 0.3, 0.2, 0.1))
    }

    pub fn custom(weights: ScoreWeights) -> AssignmentStrategy {
        preset(Algorithm::Custom, weights)
    }

    /// All named presets, in display order
    pub fn all() -> Vec<AssignmentStrategy> {
        Algorithm::PRESETS.iter().map(|a| AssignmentStrategy::preset(*a)).collect()
    }
}
