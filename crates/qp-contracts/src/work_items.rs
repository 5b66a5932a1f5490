//! Contract for work items

use qp_core::config::CertaintyMultipliers;
use qp_core::error::ValidationErrors;
use qp_models::WorkItem;
use validator::Validate;

use crate::base::{from_validator, into_result, Contract, ValidationResult};

pub struct WorkItemContract<'a> {
    multipliers: &'a CertaintyMultipliers,
}

impl<'a> WorkItemContract<'a> {
    pub fn new(multipliers: &'a CertaintyMultipliers) -> Self {
        Self { multipliers }
    }

    pub fn validate_id(&self, item: &WorkItem, errors: &mut ValidationErrors) {
        if item.id.trim().is_empty() {
            errors.add("id", "can't be blank");
        }
    }

    /// Adjusted days must follow from base days and certainty
    pub fn validate_adjusted_days(&self, item: &WorkItem, errors: &mut ValidationErrors) {
        if !item.is_consistent(self.multipliers) {
            errors.add(
                "adjusted_days",
                format!(
                    "is {} but base days and certainty give {}",
                    item.adjusted_days,
                    qp_core::types::round2(item.base_days * item.certainty.multiplier(self.multipliers))
                ),
            );
        }
    }

    pub fn validate_references(&self, item: &WorkItem, errors: &mut ValidationErrors) {
        if item.dependencies.iter().chain(&item.blockers).any(|d| *d == item.id) {
            errors.add("dependencies", "can't reference the item itself");
        }
        if item.preferred_assignees.iter().any(|m| item.avoid_assignees.contains(m)) {
            errors.add("avoid_assignees", "overlaps with preferred assignees");
        }
    }
}

impl<'a> Contract<WorkItem> for WorkItemContract<'a> {
    fn validate(&self, entity: &WorkItem) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if let Err(e) = entity.validate() {
            from_validator(e, &mut errors);
        }
        self.validate_id(entity, &mut errors);
        self.validate_adjusted_days(entity, &mut errors);
        self.validate_references(entity, &mut errors);

        into_result(errors)
    }
}
