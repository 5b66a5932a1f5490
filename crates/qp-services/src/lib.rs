//! # qp-services
//!
//! Service layer for Quarter Planner.
//!
//! Services gather inputs from the collaborator traits, run an engine, and
//! report the outcome as a `ServiceResult`. They never persist anything.

pub mod base;
pub mod result;
pub mod proposals;

pub use base::*;
pub use result::ServiceResult;
pub use proposals::{GenerateParams, GenerateProposalService, GeneratedProposal, ProposalBook};
