//! Contract for manual overrides
//!
//! An override must point at a known item and member and carry positive days.
//! Capacity is not checked here; the enhanced engine skips overrides the
//! member can't absorb at generation time.

use std::collections::HashSet;

use qp_core::error::ValidationErrors;
use qp_models::ManualOverride;

use crate::base::{into_result, Contract, ValidationResult};

pub struct ManualOverrideContract<'a> {
    item_ids: HashSet<&'a str>,
    member_ids: HashSet<&'a str>,
}

impl<'a> ManualOverrideContract<'a> {
    pub fn new<I, M>(item_ids: I, member_ids: M) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        M: IntoIterator<Item = &'a str>,
    {
        Self {
            item_ids: item_ids.into_iter().collect(),
            member_ids: member_ids.into_iter().collect(),
        }
    }
}

impl<'a> Contract<ManualOverride> for ManualOverrideContract<'a> {
    fn validate(&self, entity: &ManualOverride) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if !self.item_ids.contains(entity.item_id.as_str()) {
            errors.add("item_id", format!("{} does not exist", entity.item_id));
        }
        if !self.member_ids.contains(entity.member_id.as_str()) {
            errors.add("member_id", format!("{} does not exist", entity.member_id));
        }
        if entity.days_assigned <= 0.0 {
            errors.add("days_assigned", "must be greater than 0");
        }

        into_result(errors)
    }
}
