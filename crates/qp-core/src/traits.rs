//! Collaborator traits
//!
//! The planner never loads or stores anything itself. Whatever holds the
//! active period and the settings implements these, and callers hand the
//! resulting snapshots to the engines.

use chrono::Duration;

use crate::config::{AssignmentConfig, CertaintyMultipliers, PlannerConfig};
use crate::types::Period;

/// Supplies the currently selected planning period
pub trait PeriodProvider: Send + Sync {
    fn active_period(&self) -> Option<Period>;
}

/// Supplies estimation and assignment settings
pub trait SettingsProvider: Send + Sync {
    fn multipliers(&self) -> CertaintyMultipliers;

    fn strict_application_matching(&self) -> bool;

    fn assignment(&self) -> AssignmentConfig;

    /// Age after which a generated proposal is considered stale
    fn stale_after(&self) -> Duration;
}

impl SettingsProvider for PlannerConfig {
    fn multipliers(&self) -> CertaintyMultipliers {
        self.estimation.multipliers
    }

    fn strict_application_matching(&self) -> bool {
        self.assignment.strict_application_matching
    }

    fn assignment(&self) -> AssignmentConfig {
        self.assignment.clone()
    }

    fn stale_after(&self) -> Duration {
        Duration::hours(self.proposals.stale_after_hours)
    }
}

impl PeriodProvider for Option<Period> {
    fn active_period(&self) -> Option<Period> {
        *self
    }
}
