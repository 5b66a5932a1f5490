//! Proposal types
//!
//! A `ProposalItem` is the outcome for one work item; a `Proposal` is one
//! generation's batch of them. Nothing here is mutated after generation.

use chrono::{DateTime, Duration, Utc};
use qp_core::types::{Algorithm, Days, EngineKind, ItemId, MemberId};
use qp_models::WorkItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DAYS_EPSILON;

/// Assignment status of one item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProposalStatus {
    FullyAssigned,
    PartiallyAssigned,
    Unassigned,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullyAssigned => "fully-assigned",
            Self::PartiallyAssigned => "partially-assigned",
            Self::Unassigned => "unassigned",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyStatus {
    Blocked,
    Ready,
    InProgress,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// High at 90% of the required days or more, Medium at 50% or more
    pub fn from_coverage(assigned: Days, required: Days) -> Self {
        let ratio = if required > 0.0 { assigned / required } else { 1.0 };
        if ratio >= 0.9 {
            Self::High
        } else if ratio >= 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One (member, days) pairing inside an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalAllocation {
    pub member_id: MemberId,
    pub member_name: String,
    pub days_assigned: Days,
    /// Set when the allocation came from a manual override
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub from_override: bool,
}

impl ProposalAllocation {
    pub fn new(member_id: impl Into<MemberId>, member_name: impl Into<String>, days_assigned: Days) -> Self {
        Self {
            member_id: member_id.into(),
            member_name: member_name.into(),
            days_assigned,
            from_override: false,
        }
    }
}

/// Per-item assignment result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalItem {
    pub item_id: ItemId,
    pub key: Option<String>,
    pub title: String,
    pub application: Option<String>,
    pub adjusted_days: Days,
    pub allocations: Vec<ProposalAllocation>,
    pub unassigned_days: Days,
    pub status: ProposalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_match: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_status: Option<DependencyStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl ProposalItem {
    /// Result for `item` with the given allocations; leftover days and status are derived
    pub fn from_allocations(item: &WorkItem, allocations: Vec<ProposalAllocation>) -> Self {
        let assigned: Days = allocations.iter().map(|a| a.days_assigned).sum();
        let mut unassigned_days = (item.adjusted_days - assigned).max(0.0);
        if unassigned_days < DAYS_EPSILON {
            unassigned_days = 0.0;
        }
        let status = if unassigned_days == 0.0 {
            ProposalStatus::FullyAssigned
        } else if allocations.is_empty() {
            ProposalStatus::Unassigned
        } else {
            ProposalStatus::PartiallyAssigned
        };

        Self {
            item_id: item.id.clone(),
            key: item.key.clone(),
            title: item.title.clone(),
            application: item.application.clone(),
            adjusted_days: item.adjusted_days,
            allocations,
            unassigned_days,
            status,
            assignment_reason: None,
            skill_match: None,
            dependency_status: None,
            confidence: None,
        }
    }

    /// Nothing assigned, with the reason why
    pub fn unassigned(item: &WorkItem, reason: impl Into<String>) -> Self {
        let mut result = Self::from_allocations(item, Vec::new());
        result.unassigned_days = item.adjusted_days.max(0.0);
        result.status = ProposalStatus::Unassigned;
        result.assignment_reason = Some(reason.into());
        result
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.assignment_reason = Some(reason.into());
        self
    }

    pub fn assigned_days(&self) -> Days {
        self.allocations.iter().map(|a| a.days_assigned).sum()
    }

    pub fn is_fully_assigned(&self) -> bool {
        self.status == ProposalStatus::FullyAssigned
    }
}

/// Status counts of a proposal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSummary {
    pub total: usize,
    pub fully_assigned: usize,
    pub partially_assigned: usize,
    pub unassigned: usize,
}

/// One generation's batch of results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: Uuid,
    #[serde(rename = "generatedAtISO")]
    pub generated_at: DateTime<Utc>,
    pub engine: EngineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    pub items: Vec<ProposalItem>,
}

impl Proposal {
    pub fn new(engine: EngineKind, algorithm: Option<Algorithm>, items: Vec<ProposalItem>) -> Self {
        Self::generated_at(Utc::now(), engine, algorithm, items)
    }

    pub fn generated_at(
        generated_at: DateTime<Utc>,
        engine: EngineKind,
        algorithm: Option<Algorithm>,
        items: Vec<ProposalItem>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at,
            engine,
            algorithm,
            items,
        }
    }

    /// Older than `threshold` at `now`. Only a wall-clock heuristic; the
    /// underlying items may or may not have changed.
    pub fn is_stale(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        now - self.generated_at > threshold
    }

    pub fn summary(&self) -> ProposalSummary {
        let mut summary = ProposalSummary {
            total: self.items.len(),
            ..Default::default()
        };
        for item in &self.items {
            match item.status {
                ProposalStatus::FullyAssigned => summary.fully_assigned += 1,
                ProposalStatus::PartiallyAssigned => summary.partially_assigned += 1,
                ProposalStatus::Unassigned => summary.unassigned += 1,
            }
        }
        summary
    }

    pub fn item(&self, item_id: &str) -> Option<&ProposalItem> {
        self.items.iter().find(|i| i.item_id == item_id)
    }
}
