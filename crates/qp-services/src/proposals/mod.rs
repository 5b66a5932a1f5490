//! Proposal services

pub mod book;
pub mod generate;

pub use book::ProposalBook;
pub use generate::{GenerateParams, GenerateProposalService, GeneratedProposal, NO_ACTIVE_PERIOD};
