//! Strict engine
//!
//! Items go only to members whose application equals the item's. Items are
//! processed in input order; each takes from the largest remaining capacity
//! first, and the ledger carries over to the next item.

use qp_core::types::tags_match;
use qp_models::{TeamMember, WorkItem};
use tracing::{debug, info};

use crate::capacity::{CapacityLedger, CapacityRecord};
use crate::engine::{AssignmentEngine, AssignmentInput};
use crate::proposal::{ProposalAllocation, ProposalItem};
use crate::DAYS_EPSILON;

pub const REASON_NO_APPLICATION: &str = "Application required for assignment";
pub const REASON_NO_CANDIDATES: &str = "No team members with matching application and remaining capacity";

/// Run the strict engine over a fresh ledger built from `capacities`
pub fn assign(items: &[WorkItem], members: &[TeamMember], capacities: &[CapacityRecord]) -> Vec<ProposalItem> {
    let mut ledger = CapacityLedger::from_records(capacities);
    assign_with_ledger(items, members, &mut ledger)
}

/// Run the strict engine against a caller-owned ledger
pub fn assign_with_ledger(
    items: &[WorkItem],
    members: &[TeamMember],
    ledger: &mut CapacityLedger,
) -> Vec<ProposalItem> {
    let results: Vec<ProposalItem> = items
        .iter()
        .map(|item| assign_item(item, members, ledger))
        .collect();

    let fully = results.iter().filter(|r| r.is_fully_assigned()).count();
    info!(
        items = results.len(),
        members = members.len(),
        fully_assigned = fully,
        remaining_days = ledger.total_remaining(),
        "Strict assignment finished"
    );
    results
}

fn assign_item(item: &WorkItem, members: &[TeamMember], ledger: &mut CapacityLedger) -> ProposalItem {
    if !item.has_application() {
        debug!(item_id = %item.id, "Item has no application");
        return ProposalItem::unassigned(item, REASON_NO_APPLICATION);
    }

    let mut candidates: Vec<&TeamMember> = members
        .iter()
        .filter(|m| tags_match(m.application.as_deref(), item.application.as_deref()))
        .filter(|m| ledger.has_capacity(&m.id))
        .collect();

    if candidates.is_empty() {
        debug!(item_id = %item.id, "No candidates");
        if item.adjusted_days <= DAYS_EPSILON {
            return ProposalItem::from_allocations(item, Vec::new());
        }
        return ProposalItem::unassigned(item, REASON_NO_CANDIDATES);
    }

    // Stable: equal capacities keep roster order
    candidates.sort_by(|a, b| ledger.remaining(&b.id).total_cmp(&ledger.remaining(&a.id)));

    let mut remaining = item.adjusted_days.max(0.0);
    let mut allocations = Vec::new();
    for member in candidates {
        if remaining <= DAYS_EPSILON {
            break;
        }
        let days = ledger.consume(&member.id, remaining);
        if days <= DAYS_EPSILON {
            continue;
        }
        debug!(item_id = %item.id, member_id = %member.id, days, "Allocated");
        remaining -= days;
        allocations.push(ProposalAllocation::new(member.id.clone(), member.name.clone(), days));
    }

    ProposalItem::from_allocations(item, allocations)
}

/// [`AssignmentEngine`] wrapper around [`assign`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictEngine;

impl AssignmentEngine for StrictEngine {
    fn name(&self) -> &str {
        "Strict"
    }

    fn assign(&self, input: &AssignmentInput<'_>) -> Vec<ProposalItem> {
        assign(input.items, input.members, input.capacities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::ProposalStatus;
    use qp_core::config::CertaintyMultipliers;
    use qp_models::{Certainty, ItemKind};

    fn item(id: &str, days: f64, app: Option<&str>) -> WorkItem {
        let item = WorkItem::new(id, id, ItemKind::Story, days, Certainty::High, &CertaintyMultipliers::default());
        match app {
            Some(app) => item.with_application(app),
            None => item,
        }
    }

    fn member(id: &str, app: &str) -> TeamMember {
        TeamMember::new(id, id.to_uppercase()).with_application(app)
    }

    #[test]
    fn test_largest_capacity_first() {
        let items = vec![item("i1", 10.0, Some("FIS"))];
        let members = vec![member("a", "FIS"), member("b", "fis")];
        let capacities = vec![CapacityRecord::fixed("a", 6.0), CapacityRecord::fixed("b", 8.0)];

        let results = assign(&items, &members, &capacities);
        let r = &results[0];
        assert_eq!(r.status, ProposalStatus::FullyAssigned);
        let pairs: Vec<(&str, f64)> = r
            .allocations
            .iter()
            .map(|a| (a.member_id.as_str(), a.days_assigned))
            .collect();
        assert_eq!(pairs, vec![("b", 8.0), ("a", 2.0)]);
    }

    #[test]
    fn test_missing_application() {
        let items = vec![item("i1", 3.0, None), item("i2", 3.0, Some("   "))];
        let members = vec![member("a", "FIS")];
        let capacities = vec![CapacityRecord::fixed("a", 10.0)];

        for r in assign(&items, &members, &capacities) {
            assert_eq!(r.status, ProposalStatus::Unassigned);
            assert_eq!(r.unassigned_days, 3.0);
            assert_eq!(r.assignment_reason.as_deref(), Some(REASON_NO_APPLICATION));
        }
    }

    #[test]
    fn test_no_matching_member() {
        let items = vec![item("i1", 3.0, Some("CRM"))];
        let members = vec![member("a", "FIS")];
        let capacities = vec![CapacityRecord::fixed("a", 10.0)];
        let r = &assign(&items, &members, &capacities)[0];
        assert_eq!(r.status, ProposalStatus::Unassigned);
        assert_eq!(r.assignment_reason.as_deref(), Some(REASON_NO_CANDIDATES));
    }

    #[test]
    fn test_ledger_shared_in_input_order() {
        let items = vec![item("first", 4.0, Some("FIS")), item("second", 4.0, Some("FIS"))];
        let members = vec![member("a", "FIS")];
        let capacities = vec![CapacityRecord::fixed("a", 5.0)];

        let results = assign(&items, &members, &capacities);
        assert_eq!(results[0].status, ProposalStatus::FullyAssigned);
        assert_eq!(results[1].status, ProposalStatus::PartiallyAssigned);
        assert_eq!(results[1].allocations[0].days_assigned, 1.0);
        assert_eq!(results[1].unassigned_days, 3.0);
    }

    #[test]
    fn test_exhausted_member_is_skipped() {
        let items = vec![item("i1", 2.0, Some("FIS")), item("i2", 2.0, Some("FIS"))];
        let members = vec![member("a", "FIS")];
        let capacities = vec![CapacityRecord::fixed("a", 2.0)];
        let results = assign(&items, &members, &capacities);
        assert_eq!(results[1].status, ProposalStatus::Unassigned);
        assert!(results[1].allocations.is_empty());
    }

    #[test]
    fn test_engine_trait() {
        let items = vec![item("i1", 1.0, Some("FIS"))];
        let members = vec![member("a", "FIS")];
        let capacities = vec![CapacityRecord::fixed("a", 2.0)];
        let as_of = chrono::NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let engine = StrictEngine;
        let results = engine.assign(&AssignmentInput::new(&items, &members, &capacities, as_of));
        assert_eq!(engine.name(), "Strict");
        assert_eq!(results.len(), 1);
    }
}
