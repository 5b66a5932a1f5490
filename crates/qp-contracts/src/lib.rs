//! # qp-contracts
//!
//! Input contracts for Quarter Planner.
//!
//! The engines compute on whatever numbers they are given. Callers that want
//! malformed input rejected up front (negative days, unknown override
//! targets, inverted periods) run these contracts first.

pub mod base;
pub mod work_items;
pub mod members;
pub mod holidays;
pub mod overrides;
pub mod snapshot;

pub use base::*;
pub use work_items::WorkItemContract;
pub use members::TeamMemberContract;
pub use holidays::HolidayContract;
pub use overrides::ManualOverrideContract;
pub use snapshot::SnapshotContract;
