//! Per-member view of a proposal
//!
//! `remaining_days` is clamped at zero, so over-allocation only shows as
//! `allocated_days > capacity_days`; use [`MemberOverview::is_over_allocated`].

use chrono::{DateTime, Utc};
use qp_core::types::{Days, ItemId, MemberId};
use serde::Serialize;

use crate::capacity::CapacityRecord;
use crate::proposal::Proposal;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAssignment {
    pub item_id: ItemId,
    pub key: Option<String>,
    pub title: String,
    pub application: Option<String>,
    pub days_assigned: Days,
    pub adjusted_days: Days,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberOverview {
    pub member_id: MemberId,
    pub member_name: String,
    pub capacity_days: Days,
    pub allocated_days: Days,
    pub remaining_days: Days,
    pub assignments: Vec<MemberAssignment>,
}

impl MemberOverview {
    pub fn is_over_allocated(&self) -> bool {
        self.allocated_days > self.capacity_days + crate::DAYS_EPSILON
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewTotals {
    pub capacity_days: Days,
    pub allocated_days: Days,
    pub remaining_days: Days,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOverview {
    #[serde(rename = "generatedAtISO")]
    pub generated_at: DateTime<Utc>,
    pub per_member: Vec<MemberOverview>,
    pub totals: OverviewTotals,
}

impl AssignmentOverview {
    /// One row per capacity record. Allocations to members without a record are left out.
    pub fn build(proposal: &Proposal, capacities: &[CapacityRecord]) -> Self {
        let mut per_member: Vec<MemberOverview> = capacities
            .iter()
            .map(|c| MemberOverview {
                member_id: c.member_id.clone(),
                member_name: c.member_name.clone(),
                capacity_days: c.capacity_days,
                allocated_days: 0.0,
                remaining_days: 0.0,
                assignments: Vec::new(),
            })
            .collect();

        for item in &proposal.items {
            for allocation in &item.allocations {
                let Some(row) = per_member.iter_mut().find(|m| m.member_id == allocation.member_id) else {
                    tracing::debug!(member_id = %allocation.member_id, "Allocation for member without capacity record");
                    continue;
                };
                row.allocated_days += allocation.days_assigned;
                row.assignments.push(MemberAssignment {
                    item_id: item.item_id.clone(),
                    key: item.key.clone(),
                    title: item.title.clone(),
                    application: item.application.clone(),
                    days_assigned: allocation.days_assigned,
                    adjusted_days: item.adjusted_days,
                });
            }
        }

        let mut totals = OverviewTotals::default();
        for row in per_member.iter_mut() {
            row.remaining_days = (row.capacity_days - row.allocated_days).max(0.0);
            totals.capacity_days += row.capacity_days;
            totals.allocated_days += row.allocated_days;
            totals.remaining_days += row.remaining_days;
        }

        Self {
            generated_at: proposal.generated_at,
            per_member,
            totals,
        }
    }

    pub fn member(&self, member_id: &str) -> Option<&MemberOverview> {
        self.per_member.iter().find(|m| m.member_id == member_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qp_core::config::CertaintyMultipliers;
    use qp_core::types::EngineKind;
    use qp_models::{Certainty, ItemKind, WorkItem};

    use crate::proposal::{ProposalAllocation, ProposalItem};

    fn item(id: &str, days: f64) -> WorkItem {
        WorkItem::new(id, id, ItemKind::Story, days, Certainty::High, &CertaintyMultipliers::default())
            .with_key(format!("PROJ-{id}"))
    }

    #[test]
    fn test_overview() {
        let items = vec![
            ProposalItem::from_allocations(
                &item("i1", 6.0),
                vec![ProposalAllocation::new("a", "A", 4.0), ProposalAllocation::new("b", "B", 2.0)],
            ),
            ProposalItem::from_allocations(&item("i2", 3.0), vec![ProposalAllocation::new("a", "A", 3.0)]),
        ];
        let proposal = Proposal::new(EngineKind::Strict, None, items);
        let capacities = vec![CapacityRecord::fixed("a", 5.0), CapacityRecord::fixed("b", 10.0)];

        let overview = AssignmentOverview::build(&proposal, &capacities);
        let a = overview.member("a").unwrap();
        assert_eq!(a.allocated_days, 7.0);
        assert_eq!(a.remaining_days, 0.0);
        assert!(a.is_over_allocated());
        assert_eq!(a.assignments.len(), 2);
        assert_eq!(a.assignments[0].key.as_deref(), Some("PROJ-i1"));

        let b = overview.member("b").unwrap();
        assert_eq!(b.remaining_days, 8.0);
        assert!(!b.is_over_allocated());

        assert_eq!(overview.totals.capacity_days, 15.0);
        assert_eq!(overview.totals.allocated_days, 9.0);
        assert_eq!(overview.totals.remaining_days, 8.0);
        assert_eq!(overview.generated_at, proposal.generated_at);
    }
}
