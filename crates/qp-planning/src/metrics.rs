//! Quality metrics of a finished proposal

use std::collections::{BTreeMap, HashMap};

use qp_core::types::{Days, MemberId};
use qp_models::TeamMember;
use serde::Serialize;

use crate::capacity::CapacityRecord;
use crate::proposal::{Confidence, DependencyStatus, ProposalItem, ProposalStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentMetrics {
    pub total_items: usize,
    pub fully_assigned: usize,
    pub partially_assigned: usize,
    pub unassigned: usize,
    /// Mean of per-item skill match; items without one count as 0
    pub average_skill_match: f64,
    /// allocated / capacity per member with a capacity entry
    pub utilization: BTreeMap<MemberId, f64>,
    /// Population variance of `utilization`
    pub workload_variance: f64,
    pub dependency_blocked: usize,
    /// Items with low confidence
    pub deadline_at_risk: usize,
    /// Share of fully assigned items, in percent
    pub efficiency: f64,
}

impl AssignmentMetrics {
    pub fn compute(members: &[TeamMember], capacities: &[CapacityRecord], proposals: &[ProposalItem]) -> Self {
        let mut metrics = Self {
            total_items: proposals.len(),
            ..Default::default()
        };

        let mut allocated: HashMap<&str, Days> = HashMap::new();
        let mut skill_total = 0.0;
        for p in proposals {
            match p.status {
                ProposalStatus::FullyAssigned => metrics.fully_assigned += 1,
                ProposalStatus::PartiallyAssigned => metrics.partially_assigned += 1,
                ProposalStatus::Unassigned => metrics.unassigned += 1,
            }
            if p.dependency_status == Some(DependencyStatus::Blocked) {
                metrics.dependency_blocked += 1;
            }
            if p.confidence == Some(Confidence::Low) {
                metrics.deadline_at_risk += 1;
            }
            skill_total += p.skill_match.unwrap_or(0.0);
            for a in &p.allocations {
                *allocated.entry(a.member_id.as_str()).or_default() += a.days_assigned;
            }
        }

        if !proposals.is_empty() {
            metrics.average_skill_match = skill_total / proposals.len() as f64;
        }
        metrics.efficiency = if proposals.is_empty() {
            100.0
        } else {
            metrics.fully_assigned as f64 / proposals.len() as f64 * 100.0
        };

        for member in members {
            let Some(record) = capacities.iter().find(|c| c.member_id == member.id) else {
                continue;
            };
            let used = allocated.get(member.id.as_str()).copied().unwrap_or(0.0);
            let utilization = if record.capacity_days > 0.0 {
                used / record.capacity_days
            } else {
                0.0
            };
            metrics.utilization.insert(member.id.clone(), utilization);
        }
        metrics.workload_variance = population_variance(metrics.utilization.values().copied());

        metrics
    }
}

fn population_variance(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let n = values.clone().count();
    if n == 0 {
        return 0.0;
    }
    let mean = values.clone().sum::<f64>() / n as f64;
    values.map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64
}
