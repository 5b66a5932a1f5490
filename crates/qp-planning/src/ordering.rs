//! Processing order of items and ranking of candidates
//!
//! Both orders are total: every tie ends at the input position, so the same
//! input always produces the same sequence.

use std::cmp::Ordering;

use qp_models::WorkItem;

use crate::scoring::CandidateScore;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Item attributes the enhanced engine orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSortKey {
    Priority,
    /// Dated items come before undated ones
    Deadline,
    Complexity,
}

impl ItemSortKey {
    fn compare(&self, a: &WorkItem, b: &WorkItem) -> Ordering {
        match self {
            Self::Priority => a.effective_priority().weight().cmp(&b.effective_priority().weight()),
            Self::Deadline => match (a.deadline, b.deadline) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Complexity => a
                .effective_complexity()
                .rank()
                .cmp(&b.effective_complexity().rank()),
        }
    }
}

/// Ordered list of (key, direction) criteria
#[derive(Debug, Clone)]
pub struct ItemOrder {
    criteria: Vec<(ItemSortKey, SortDirection)>,
}

impl Default for ItemOrder {
    /// Priority high to low, then earliest deadline, then simplest first
    fn default() -> Self {
        Self {
            criteria: vec![
                (ItemSortKey::Priority, SortDirection::Desc),
                (ItemSortKey::Deadline, SortDirection::Asc),
                (ItemSortKey::Complexity, SortDirection::Asc),
            ],
        }
    }
}

impl ItemOrder {
    pub fn compare(&self, a: &WorkItem, b: &WorkItem) -> Ordering {
        self.criteria
            .iter()
            .map(|(key, direction)| direction.apply(key.compare(a, b)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Items in processing order. The sort is stable.
    pub fn sorted<'a>(&self, items: &'a [WorkItem]) -> Vec<&'a WorkItem> {
        let mut sorted: Vec<&WorkItem> = items.iter().collect();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

/// Best candidate first: higher score, then lighter current workload, then roster order
pub fn rank_candidates(candidates: &mut [CandidateScore<'_>]) {
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.current_workload.total_cmp(&b.current_workload))
            .then_with(|| a.position.cmp(&b.position))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use qp_core::config::CertaintyMultipliers;
    use qp_models::{Certainty, Complexity, ItemKind, Priority, TeamMember};

    use crate::scoring::ScoreBreakdown;

    fn item(id: &str) -> WorkItem {
        WorkItem::new(id, id, ItemKind::Story, 1.0, Certainty::High, &CertaintyMultipliers::default())
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn ids(items: Vec<&WorkItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_priority_first() {
        let items = vec![
            item("low").with_priority(Priority::Low),
            item("default"),
            item("critical").with_priority(Priority::Critical),
            item("high").with_priority(Priority::High),
        ];
        assert_eq!(
            ids(ItemOrder::default().sorted(&items)),
            vec!["critical", "high", "default", "low"]
        );
    }

    #[test]
    fn test_deadline_then_complexity() {
        let items = vec![
            item("undated"),
            item("late").with_deadline(date(20)),
            item("early-hard").with_deadline(date(10)).with_complexity(Complexity::VeryComplex),
            item("early-easy").with_deadline(date(10)).with_complexity(Complexity::Simple),
        ];
        assert_eq!(
            ids(ItemOrder::default().sorted(&items)),
            vec!["early-easy", "early-hard", "late", "undated"]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![item("a"), item("b"), item("c")];
        assert_eq!(ids(ItemOrder::default().sorted(&items)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rank_candidates() {
        let members = [
            TeamMember::new("m0", "A"),
            TeamMember::new("m1", "B"),
            TeamMember::new("m2", "C"),
        ];
        let breakdown = ScoreBreakdown {
            skill_match: 0.0,
            workload_balance: 0.0,
            priority: 0.0,
            deadline: 0.0,
        };
        let scored = |i: usize, score: f64, workload: f64| CandidateScore {
            member: &members[i],
            position: i,
            score,
            breakdown,
            current_workload: workload,
        };
        let mut candidates = vec![scored(0, 60.0, 4.0), scored(1, 60.0, 1.0), scored(2, 80.0, 9.0)];
        rank_candidates(&mut candidates);
        let order: Vec<&str> = candidates.iter().map(|c| c.member.id.as_str()).collect();
        assert_eq!(order, vec!["m2", "m1", "m0"]);
    }
}
