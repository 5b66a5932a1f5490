//! Core error types for Quarter Planner
//!
//! Per-item assignment failures are data, not errors. These types only cover
//! conditions that stop a whole generation or reject malformed input.

use std::collections::BTreeMap;
use thiserror::Error;

/// Core error type for all planning operations
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Validation failed: {}", .0.full_messages().join(", "))]
    Validation(#[from] ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for PlanError {
    fn from(err: config::ConfigError) -> Self {
        PlanError::Config(err.to_string())
    }
}

/// Validation errors collection, keyed by field
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("Validation errors: {errors:?} {base_errors:?}")]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: BTreeMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self.base_errors.extend(other.base_errors);
    }

    /// Prefix every field name, used when validating members of a collection
    pub fn nested(self, prefix: &str) -> Self {
        let mut nested = ValidationErrors::new();
        for (field, messages) in self.errors {
            nested
                .errors
                .entry(format!("{prefix}.{field}"))
                .or_default()
                .extend(messages);
        }
        for message in self.base_errors {
            nested.add(prefix, message);
        }
        nested
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }
}

impl PlanError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PlanError::Validation(_) => "validation_failed",
            PlanError::Config(_) => "configuration_error",
        }
    }
}
