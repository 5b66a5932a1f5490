//! # qp-planning
//!
//! Capacity model and assignment engines for Quarter Planner.
//!
//! ## Structure
//!
//! - `calendar` - working-day counting and holiday resolution
//! - `capacity` - per-member capacity records and the per-generation ledger
//! - `strategy` - scoring weights, settings, and the named presets
//! - `eligibility` - whether a member may take an item right now
//! - `scoring` - the 0-100 compatibility score of the enhanced engine
//! - `ordering` - item processing order and candidate ranking
//! - `proposal` - per-item results and the proposal batch
//! - `strict` - application-matching-only engine
//! - `enhanced` - multi-factor scoring engine
//! - `metrics` - quality metrics over a finished proposal
//! - `overview` - per-member view of a proposal
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use qp_core::{config::CertaintyMultipliers, types::Period};
//! use qp_models::{Certainty, ItemKind, TeamMember, WorkItem};
//! use qp_planning::{capacity::capacities_for_members, strict, ProposalStatus};
//!
//! let period = Period::new(
//!     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
//! );
//! let table = CertaintyMultipliers::default();
//! let items = vec![
//!     WorkItem::new("i1", "Import", ItemKind::Story, 4.0, Certainty::High, &table)
//!         .with_application("FIS"),
//! ];
//! let members = vec![TeamMember::new("m1", "Ada").with_application("fis").with_allocation(100.0)];
//!
//! let capacities = capacities_for_members(&members, &[], Some(&period));
//! let results = strict::assign(&items, &members, &capacities);
//! assert_eq!(results[0].status, ProposalStatus::FullyAssigned);
//! ```

pub mod calendar;
pub mod capacity;
pub mod strategy;
pub mod eligibility;
pub mod scoring;
pub mod ordering;
pub mod proposal;
pub mod engine;
pub mod strict;
pub mod enhanced;
pub mod metrics;
pub mod overview;

// Re-exports for convenience
pub use calendar::working_days_between;
pub use capacity::{capacities_for_members, capacity_for_member, CapacityLedger, CapacityRecord};
pub use strategy::{presets, AssignmentStrategy, StrategySettings};
pub use proposal::{Confidence, DependencyStatus, Proposal, ProposalAllocation, ProposalItem, ProposalStatus};
pub use engine::{AssignmentEngine, AssignmentInput};
pub use strict::StrictEngine;
pub use enhanced::EnhancedEngine;
pub use metrics::AssignmentMetrics;
pub use overview::{AssignmentOverview, MemberOverview};

/// Tolerance for comparing day amounts
pub const DAYS_EPSILON: f64 = 1e-9;
