//! Enhanced engine
//!
//! Items are processed by priority, deadline and complexity. For each item
//! active manual overrides are honored first, then eligible members are
//! scored under the strategy weights and filled greedily from the best
//! candidate down. Results come back in processing order.

use std::collections::BTreeMap;

use qp_core::types::{Days, MemberId};
use qp_models::{ManualOverride, TeamMember, WorkItem};
use tracing::{debug, info, warn};

use crate::capacity::CapacityLedger;
use crate::eligibility::{self, MemberLoad};
use crate::engine::{AssignmentEngine, AssignmentInput};
use crate::ordering::{rank_candidates, ItemOrder};
use crate::proposal::{Confidence, DependencyStatus, ProposalAllocation, ProposalItem, ProposalStatus};
use crate::scoring::{self, CandidateState};
use crate::strategy::AssignmentStrategy;
use crate::DAYS_EPSILON;

pub const REASON_NO_APPLICATION: &str = "Application required for assignment";
pub const REASON_BLOCKED: &str = "Dependencies not met";
pub const REASON_NO_CANDIDATES: &str = "No eligible team members with remaining capacity";

/// Dependency state of an item.
///
/// Dependencies and blockers are carried on the item but not resolved
/// against other items yet, so every item reports ready.
pub fn check_dependencies(item: &WorkItem) -> DependencyStatus {
    if !item.dependencies.is_empty() || !item.blockers.is_empty() {
        debug!(
            item_id = %item.id,
            dependencies = item.dependencies.len(),
            blockers = item.blockers.len(),
            "Dependencies are not resolved, treating item as ready"
        );
    }
    DependencyStatus::Ready
}

/// Mutable state of one run
struct Run<'a> {
    input: &'a AssignmentInput<'a>,
    strategy: &'a AssignmentStrategy,
    ledger: CapacityLedger,
    loads: BTreeMap<MemberId, MemberLoad>,
}

impl<'a> Run<'a> {
    fn new(input: &'a AssignmentInput<'a>, strategy: &'a AssignmentStrategy) -> Self {
        Self {
            input,
            strategy,
            ledger: CapacityLedger::from_records(input.capacities),
            loads: BTreeMap::new(),
        }
    }

    fn load(&self, member_id: &str) -> MemberLoad {
        self.loads.get(member_id).copied().unwrap_or_default()
    }

    fn member(&self, member_id: &str) -> Option<&'a TeamMember> {
        self.input.members.iter().find(|m| m.id == member_id)
    }

    /// Take up to `days` from `member` for the current item
    fn take(
        &mut self,
        item: &WorkItem,
        member: &TeamMember,
        days: Days,
        allocations: &mut Vec<ProposalAllocation>,
    ) -> Days {
        let taken = self.ledger.consume(&member.id, days);
        if taken <= DAYS_EPSILON {
            return 0.0;
        }
        let new_on_item = !allocations.iter().any(|a| a.member_id == member.id);
        let load = self.loads.entry(member.id.clone()).or_default();
        if new_on_item {
            load.record(taken);
        } else {
            load.assigned_days += taken;
        }
        debug!(item_id = %item.id, member_id = %member.id, days = taken, "Allocated");
        allocations.push(ProposalAllocation::new(member.id.clone(), member.name.clone(), taken));
        taken
    }

    fn apply_overrides(
        &mut self,
        item: &WorkItem,
        mut remaining: Days,
        allocations: &mut Vec<ProposalAllocation>,
    ) -> Days {
        let input = self.input;
        let overrides: Vec<&ManualOverride> = input
            .overrides
            .iter()
            .filter(|o| o.applies_to(&item.id))
            .collect();

        for o in overrides {
            let Some(member) = self.member(&o.member_id) else {
                warn!(item_id = %item.id, member_id = %o.member_id, "Override names an unknown member, skipping");
                continue;
            };
            let available = self.ledger.remaining(&member.id);
            if o.days_assigned <= 0.0 || available + DAYS_EPSILON < o.days_assigned {
                warn!(
                    item_id = %item.id,
                    member_id = %member.id,
                    days = o.days_assigned,
                    available,
                    "Override exceeds remaining capacity, skipping"
                );
                continue;
            }
            if remaining <= DAYS_EPSILON {
                break;
            }
            let before = allocations.len();
            remaining -= self.take(item, member, o.days_assigned.min(remaining), allocations);
            if let Some(allocation) = allocations.get_mut(before) {
                allocation.from_override = true;
            }
        }
        remaining
    }

    fn assign_item(&mut self, item: &WorkItem) -> ProposalItem {
        let input = self.input;
        let settings = self.strategy.settings;

        if settings.require_application_match && !item.has_application() {
            debug!(item_id = %item.id, "Item has no application");
            return finish(item, ProposalItem::unassigned(item, REASON_NO_APPLICATION), DependencyStatus::Ready);
        }

        let mut allocations = Vec::new();
        let mut remaining = self.apply_overrides(item, item.adjusted_days.max(0.0), &mut allocations);

        let dependency_status = check_dependencies(item);
        if dependency_status == DependencyStatus::Blocked {
            let result = ProposalItem::from_allocations(item, allocations).with_reason(REASON_BLOCKED);
            return finish(item, result, dependency_status);
        }

        let max_allocations = item.max_concurrent_assignments.map(|n| n as usize);
        let mut candidates = Vec::new();
        for (position, member) in input.members.iter().enumerate() {
            if allocations.iter().any(|a| a.member_id == member.id) {
                continue;
            }
            let load = self.load(&member.id);
            let available = self.ledger.remaining(&member.id);
            if let Err(why) = eligibility::check(member, item, available, &load, &settings, input.as_of) {
                debug!(item_id = %item.id, member_id = %member.id, reason = ?why, "Not eligible");
                continue;
            }
            let state = CandidateState {
                initial_capacity: self.ledger.initial(&member.id),
                remaining_capacity: available,
                assigned_days: load.assigned_days,
            };
            candidates.push(scoring::score_candidate(
                item,
                member,
                position,
                state,
                &self.strategy.weights,
                &settings,
                input.as_of,
            ));
        }
        rank_candidates(&mut candidates);

        for candidate in &candidates {
            if remaining <= DAYS_EPSILON {
                break;
            }
            if max_allocations.is_some_and(|max| allocations.len() >= max) {
                debug!(item_id = %item.id, "Item reached its assignee limit");
                break;
            }
            debug!(
                item_id = %item.id,
                member_id = %candidate.member.id,
                score = candidate.score,
                "Candidate"
            );
            remaining -= self.take(item, candidate.member, remaining, &mut allocations);
        }

        let mut result = ProposalItem::from_allocations(item, allocations);
        if result.status == ProposalStatus::Unassigned {
            result.assignment_reason = Some(REASON_NO_CANDIDATES.to_string());
        }
        finish(item, result, dependency_status)
    }
}

/// Fill in the enhanced-only fields
fn finish(item: &WorkItem, mut result: ProposalItem, dependency_status: DependencyStatus) -> ProposalItem {
    result.confidence = Some(Confidence::from_coverage(result.assigned_days(), item.adjusted_days));
    result.dependency_status = Some(dependency_status);
    result
}

/// Run the enhanced engine with `strategy`
pub fn assign(input: &AssignmentInput<'_>, strategy: &AssignmentStrategy) -> Vec<ProposalItem> {
    EnhancedEngine::new(*strategy).assign(input)
}

/// Multi-factor scoring engine
#[derive(Debug, Clone, Default)]
pub struct EnhancedEngine {
    strategy: AssignmentStrategy,
    order: ItemOrder,
}

impl EnhancedEngine {
    pub fn new(strategy: AssignmentStrategy) -> Self {
        Self {
            strategy,
            order: ItemOrder::default(),
        }
    }

    pub fn strategy(&self) -> &AssignmentStrategy {
        &self.strategy
    }
}

impl AssignmentEngine for EnhancedEngine {
    fn name(&self) -> &str {
        self.strategy.name()
    }

    fn assign(&self, input: &AssignmentInput<'_>) -> Vec<ProposalItem> {
        if !input.history.is_empty() {
            debug!(records = input.history.len(), "History supplied, not used for scoring");
        }

        let mut run = Run::new(input, &self.strategy);
        let results: Vec<ProposalItem> = self
            .order
            .sorted(input.items)
            .into_iter()
            .map(|item| {
                let mut result = run.assign_item(item);
                if let Some(first) = result.allocations.first() {
                    result.skill_match = run.member(&first.member_id).map(|m| scoring::skill_match(item, m));
                }
                result
            })
            .collect();

        let fully = results.iter().filter(|r| r.is_fully_assigned()).count();
        info!(
            algorithm = self.strategy.algorithm.as_str(),
            items = results.len(),
            members = input.members.len(),
            fully_assigned = fully,
            remaining_days = run.ledger.total_remaining(),
            "Enhanced assignment finished"
        );
        results
    }
}
