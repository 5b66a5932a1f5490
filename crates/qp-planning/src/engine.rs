//! Engine seam
//!
//! Both engines take the same snapshot of inputs and return one result per
//! item. A run is pure: same input, same output.

use chrono::NaiveDate;
use qp_models::{HistoricalAssignment, ManualOverride, TeamMember, WorkItem};

use crate::capacity::CapacityRecord;
use crate::proposal::ProposalItem;

/// Borrowed inputs of a single generation
#[derive(Debug, Clone, Copy)]
pub struct AssignmentInput<'a> {
    pub items: &'a [WorkItem],
    pub members: &'a [TeamMember],
    pub capacities: &'a [CapacityRecord],
    pub overrides: &'a [ManualOverride],
    pub history: &'a [HistoricalAssignment],
    /// Reference date for availability windows and deadlines
    pub as_of: NaiveDate,
}

impl<'a> AssignmentInput<'a> {
    pub fn new(
        items: &'a [WorkItem],
        members: &'a [TeamMember],
        capacities: &'a [CapacityRecord],
        as_of: NaiveDate,
    ) -> Self {
        Self {
            items,
            members,
            capacities,
            overrides: &[],
            history: &[],
            as_of,
        }
    }

    pub fn with_overrides(mut self, overrides: &'a [ManualOverride]) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_history(mut self, history: &'a [HistoricalAssignment]) -> Self {
        self.history = history;
        self
    }
}

/// An assignment algorithm
pub trait AssignmentEngine: Send + Sync {
    /// Display name
    fn name(&self) -> &str;

    /// One result per input item
    fn assign(&self, input: &AssignmentInput<'_>) -> Vec<ProposalItem>;
}
