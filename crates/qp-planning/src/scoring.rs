//! Candidate scoring for the enhanced engine
//!
//! Every factor is on a 0-100 scale. The final score is the weighted sum,
//! clamped to [0, 100]; weights are applied as given.

use chrono::NaiveDate;
use qp_core::types::{normalize_tag, Days, ScoreWeights};
use qp_models::{TeamMember, WorkItem};
use serde::Serialize;

use crate::strategy::StrategySettings;

/// Share of the item's required skills the member has
pub fn skill_match(item: &WorkItem, member: &TeamMember) -> f64 {
    if item.required_skills.is_empty() {
        return 100.0;
    }
    if member.skills.is_empty() {
        return 0.0;
    }
    let have = member.normalized_skills();
    let required: std::collections::BTreeSet<String> =
        item.required_skills.iter().map(|s| normalize_tag(s)).collect();
    let matched = required.iter().filter(|s| have.contains(*s)).count();
    matched as f64 / required.len() as f64 * 100.0
}

/// Favors less-loaded members. 0 when the member has no capacity at all.
pub fn workload_balance(assigned_days: Days, capacity_days: Days) -> f64 {
    if capacity_days <= 0.0 {
        return 0.0;
    }
    (100.0 - 100.0 * assigned_days / capacity_days).max(0.0)
}

/// Preferred kind 100, avoided kind 0, otherwise neutral 50
pub fn priority_score(item: &WorkItem, member: &TeamMember, respect_preferences: bool) -> f64 {
    if !respect_preferences {
        return 50.0;
    }
    if member.prefers(item.kind) {
        100.0
    } else if member.avoids_kind(item.kind) {
        0.0
    } else {
        50.0
    }
}

/// Whether the item still fits before its deadline. Capped at 100.
pub fn deadline_score(item: &WorkItem, member_capacity: Days, as_of: NaiveDate) -> f64 {
    let Some(deadline) = item.deadline else {
        return 50.0;
    };
    let days_until = (deadline - as_of).num_days() as f64;
    let needed = item.adjusted_days;
    if member_capacity >= needed && days_until >= needed {
        100.0
    } else {
        (100.0 - 10.0 * (needed - days_until)).clamp(0.0, 100.0)
    }
}

/// Per-factor breakdown of one candidate's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub workload_balance: f64,
    pub priority: f64,
    pub deadline: f64,
}

impl ScoreBreakdown {
    pub fn weighted(&self, weights: &ScoreWeights) -> f64 {
        let total = self.skill_match * weights.skill_match
            + self.workload_balance * weights.workload_balance
            + self.priority * weights.priority
            + self.deadline * weights.deadline;
        total.clamp(0.0, 100.0)
    }
}

/// What the scorer needs to know about a member's position in the run
#[derive(Debug, Clone, Copy)]
pub struct CandidateState {
    /// Capacity at the start of the run
    pub initial_capacity: Days,
    /// Capacity still free
    pub remaining_capacity: Days,
    /// Days already assigned in this run
    pub assigned_days: Days,
}

/// A scored candidate. `position` is the member's index in the roster, the
/// last tie-breaker.
#[derive(Debug, Clone, Copy)]
pub struct CandidateScore<'a> {
    pub member: &'a TeamMember,
    pub position: usize,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub current_workload: Days,
}

pub fn score_candidate<'a>(
    item: &WorkItem,
    member: &'a TeamMember,
    position: usize,
    state: CandidateState,
    weights: &ScoreWeights,
    settings: &StrategySettings,
    as_of: NaiveDate,
) -> CandidateScore<'a> {
    let breakdown = ScoreBreakdown {
        skill_match: skill_match(item, member),
        workload_balance: workload_balance(state.assigned_days, state.initial_capacity),
        priority: priority_score(item, member, settings.respect_preferences),
        deadline: deadline_score(item, state.remaining_capacity, as_of),
    };
    CandidateScore {
        member,
        position,
        score: breakdown.weighted(weights),
        breakdown,
        current_workload: state.assigned_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qp_core::config::CertaintyMultipliers;
    use qp_models::{Certainty, ItemKind, MemberPreferences};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(days: f64) -> WorkItem {
        WorkItem::new("i1", "Import", ItemKind::Story, days, Certainty::High, &CertaintyMultipliers::default())
    }

    #[test]
    fn test_skill_match_half() {
        let item = item(4.0).with_required_skills(["X", "Y"]);
        let member = TeamMember::new("m1", "Ada").with_skills(["x"]);
        assert_eq!(skill_match(&item, &member), 50.0);
    }

    #[test]
    fn test_skill_match_edges() {
        let no_requirements = item(4.0);
        let skilled = TeamMember::new("m1", "Ada").with_skills(["Rust"]);
        let unskilled = TeamMember::new("m2", "Bo");
        assert_eq!(skill_match(&no_requirements, &unskilled), 100.0);

        let needs_rust = item(4.0).with_required_skills(["rust"]);
        assert_eq!(skill_match(&needs_rust, &unskilled), 0.0);
        assert_eq!(skill_match(&needs_rust, &skilled), 100.0);
    }

    #[test]
    fn test_workload_balance() {
        assert_eq!(workload_balance(0.0, 10.0), 100.0);
        assert_eq!(workload_balance(5.0, 10.0), 50.0);
        assert_eq!(workload_balance(12.0, 10.0), 0.0);
        assert_eq!(workload_balance(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_priority_score() {
        let story = item(4.0);
        let fan = TeamMember::new("m1", "Ada").with_preferences(MemberPreferences {
            preferred_kinds: vec![ItemKind::Story],
            ..Default::default()
        });
        let hater = TeamMember::new("m2", "Bo").with_preferences(MemberPreferences {
            avoided_kinds: vec![ItemKind::Story],
            ..Default::default()
        });
        assert_eq!(priority_score(&story, &fan, true), 100.0);
        assert_eq!(priority_score(&story, &hater, true), 0.0);
        assert_eq!(priority_score(&story, &TeamMember::new("m3", "Cy"), true), 50.0);
        assert_eq!(priority_score(&story, &fan, false), 50.0);
    }

    #[test]
    fn test_deadline_score() {
        let as_of = date(2025, 1, 1);
        assert_eq!(deadline_score(&item(5.0), 10.0, as_of), 50.0);

        let roomy = item(5.0).with_deadline(date(2025, 1, 31));
        assert_eq!(deadline_score(&roomy, 10.0, as_of), 100.0);

        // 3 days left for 5 days of work
        let tight = item(5.0).with_deadline(date(2025, 1, 4));
        assert_eq!(deadline_score(&tight, 10.0, as_of), 80.0);

        let past = item(5.0).with_deadline(date(2024, 12, 1));
        assert_eq!(deadline_score(&past, 10.0, as_of), 0.0);

        // short on capacity but not on time stays on the 0-100 scale
        assert_eq!(deadline_score(&roomy, 2.0, as_of), 100.0);
    }

    #[test]
    fn test_weighted_is_clamped() {
        let breakdown = ScoreBreakdown {
            skill_match: 100.0,
            workload_balance: 100.0,
            priority: 100.0,
            deadline: 100.0,
        };
        assert_eq!(breakdown.weighted(&ScoreWeights::new(1.0, 1.0, 0.0, 0.0)), 100.0);
        assert_eq!(breakdown.weighted(&ScoreWeights::new(-1.0, 0.0, 0.0, 0.0)), 0.0);
        assert!((breakdown.weighted(&ScoreWeights::new(0.4, 0.3, 0.2, 0.1)) - 100.0).abs() < 1e-9);
    }
}
