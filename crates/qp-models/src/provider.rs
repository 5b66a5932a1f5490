//! Planning data collaborators
//!
//! The source of items, members, holidays and overrides is opaque to the
//! planner. `PlanningSnapshot` is the plain in-memory form of all of it, and
//! the form the CLI reads from disk.

use qp_core::traits::PeriodProvider;
use qp_core::types::Period;
use serde::{Deserialize, Serialize};

use crate::history::HistoricalAssignment;
use crate::holiday::Holiday;
use crate::manual_override::ManualOverride;
use crate::member::TeamMember;
use crate::work_item::WorkItem;

/// Supplies the current collections for the active period
pub trait PlanningDataProvider: Send + Sync {
    fn work_items(&self) -> Vec<WorkItem>;

    fn team_members(&self) -> Vec<TeamMember>;

    fn holidays(&self) -> Vec<Holiday>;

    fn manual_overrides(&self) -> Vec<ManualOverride> {
        Vec::new()
    }

    fn history(&self) -> Vec<HistoricalAssignment> {
        Vec::new()
    }
}

/// Everything one generation needs, already loaded
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanningSnapshot {
    pub period: Option<Period>,
    pub items: Vec<WorkItem>,
    pub members: Vec<TeamMember>,
    pub holidays: Vec<Holiday>,
    pub overrides: Vec<ManualOverride>,
    pub history: Vec<HistoricalAssignment>,
}

impl PlanningDataProvider for PlanningSnapshot {
    fn work_items(&self) -> Vec<WorkItem> {
        self.items.clone()
    }

    fn team_members(&self) -> Vec<TeamMember> {
        self.members.clone()
    }

    fn holidays(&self) -> Vec<Holiday> {
        self.holidays.clone()
    }

    fn manual_overrides(&self) -> Vec<ManualOverride> {
        self.overrides.clone()
    }

    fn history(&self) -> Vec<HistoricalAssignment> {
        self.history.clone()
    }
}

impl PeriodProvider for PlanningSnapshot {
    fn active_period(&self) -> Option<Period> {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "period": { "start": "2025-01-01", "end": "2025-03-31" },
            "items": [
                { "id": "i1", "title": "Import", "kind": "Story", "baseDays": 3 }
            ],
            "members": [
                { "id": "m1", "name": "Ada", "allocationPct": 100 }
            ],
            "holidays": [
                { "date": "2025-01-01", "name": "New Year" }
            ]
        }"#;
        let snapshot: PlanningSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.active_period().is_some());
        assert_eq!(snapshot.work_items().len(), 1);
        assert_eq!(snapshot.team_members()[0].allocation_pct, 100.0);
        assert_eq!(snapshot.holidays().len(), 1);
        assert!(snapshot.manual_overrides().is_empty());
    }
}
