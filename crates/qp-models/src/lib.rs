//! # qp-models
//!
//! Domain models for Quarter Planner.
//!
//! All entities are scoped to one planning period. They are plain in-memory
//! snapshots; loading and saving them is the business of whoever implements
//! [`PlanningDataProvider`].

pub use qp_core::types::{Days, ItemId, MemberId, Period};

pub mod priority;
pub mod work_item;
pub mod member;
pub mod holiday;
pub mod manual_override;
pub mod history;
pub mod provider;

// Re-exports for convenience
pub use priority::{Certainty, Complexity, ItemKind, Priority};
pub use work_item::{recalculate_all, WorkItem};
pub use member::{AvailabilityWindow, MemberPreferences, TeamMember};
pub use holiday::Holiday;
pub use manual_override::ManualOverride;
pub use history::HistoricalAssignment;
pub use provider::{PlanningDataProvider, PlanningSnapshot};
