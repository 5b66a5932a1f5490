//! Work item model
//!
//! A unit of planned work within one period. `adjusted_days` is derived from
//! `base_days` and `certainty` through the active multiplier table and is
//! recomputed by every setter that touches either input.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use qp_core::config::CertaintyMultipliers;
use qp_core::types::{normalized_tag, round2, Days, ItemId, MemberId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::priority::{Certainty, Complexity, ItemKind, Priority};

/// Work item entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: ItemId,

    /// External tracker key (e.g. "PROJ-123")
    pub key: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub kind: ItemKind,

    /// Application tag, compared case-insensitively
    pub application: Option<String>,

    pub label: Option<String>,

    #[validate(range(min = 0.0))]
    pub base_days: f64,

    #[serde(default)]
    pub certainty: Certainty,

    /// `base_days` x multiplier(certainty), rounded to 2 decimals
    #[serde(default)]
    pub adjusted_days: Days,

    #[serde(default)]
    pub required_skills: BTreeSet<String>,

    pub priority: Option<Priority>,

    pub estimated_complexity: Option<Complexity>,

    pub deadline: Option<NaiveDate>,

    /// Advisory only; not resolved by the engines
    #[serde(default)]
    pub dependencies: Vec<ItemId>,

    /// Advisory only; not resolved by the engines
    #[serde(default)]
    pub blockers: Vec<ItemId>,

    #[serde(default)]
    pub preferred_assignees: Vec<MemberId>,

    #[serde(default)]
    pub avoid_assignees: Vec<MemberId>,

    #[validate(range(min = 1))]
    pub max_concurrent_assignments: Option<u32>,
}

impl WorkItem {
    /// Create a new item with its adjusted days derived from `table`
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        kind: ItemKind,
        base_days: Days,
        certainty: Certainty,
        table: &CertaintyMultipliers,
    ) -> Self {
        let mut item = Self {
            id: id.into(),
            key: None,
            title: title.into(),
            kind,
            application: None,
            label: None,
            base_days,
            certainty,
            adjusted_days: 0.0,
            required_skills: BTreeSet::new(),
            priority: None,
            estimated_complexity: None,
            deadline: None,
            dependencies: Vec::new(),
            blockers: Vec::new(),
            preferred_assignees: Vec::new(),
            avoid_assignees: Vec::new(),
            max_concurrent_assignments: None,
        };
        item.recalculate(table);
        item
    }

    /// Change the estimate inputs and re-derive adjusted days
    pub fn set_estimate(&mut self, base_days: Days, certainty: Certainty, table: &CertaintyMultipliers) {
        self.base_days = base_days;
        self.certainty = certainty;
        self.recalculate(table);
    }

    /// Re-derive adjusted days, e.g. after the multiplier table changed
    pub fn recalculate(&mut self, table: &CertaintyMultipliers) {
        self.adjusted_days = round2(self.base_days * self.certainty.multiplier(table));
    }

    /// Whether `adjusted_days` agrees with the inputs under `table`
    pub fn is_consistent(&self, table: &CertaintyMultipliers) -> bool {
        (self.adjusted_days - round2(self.base_days * self.certainty.multiplier(table))).abs() < 1e-9
    }

    /// Normalized application tag, None when missing or blank
    pub fn normalized_application(&self) -> Option<String> {
        normalized_tag(self.application.as_deref())
    }

    pub fn has_application(&self) -> bool {
        self.normalized_application().is_some()
    }

    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    pub fn effective_complexity(&self) -> Complexity {
        self.estimated_complexity.unwrap_or_default()
    }

    pub fn avoids(&self, member_id: &str) -> bool {
        self.avoid_assignees.iter().any(|m| m == member_id)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.estimated_complexity = Some(complexity);
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn avoiding(mut self, member_id: impl Into<MemberId>) -> Self {
        self.avoid_assignees.push(member_id.into());
        self
    }
}

/// Re-derive adjusted days for a whole collection
pub fn recalculate_all(items: &mut [WorkItem], table: &CertaintyMultipliers) {
    for item in items.iter_mut() {
        item.recalculate(table);
    }
}
