//! # qp-core
//!
//! Core types, traits, and utilities for Quarter Planner.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types
//! - Result type aliases
//! - Collaborator traits (period and settings providers)
//! - Shared primitive types (`Period`, ids, score weights, tag normalization)
//! - Configuration types

pub mod error;
pub mod result;
pub mod traits;
pub mod types;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use types::*;
