//! Contract for a whole planning snapshot
//!
//! Runs every entity contract and prefixes field names with the entity's
//! position, e.g. `items[3].base_days`.
//!
//! Manual overrides are not part of `validate`. A bad override only loses
//! that override, so `override_issues` reports them for the caller to log.

use std::collections::HashSet;

use qp_core::config::CertaintyMultipliers;
use qp_core::error::ValidationErrors;
use qp_models::PlanningSnapshot;

use crate::base::{into_result, Contract, ValidationResult};
use crate::holidays::HolidayContract;
use crate::members::TeamMemberContract;
use crate::overrides::ManualOverrideContract;
use crate::work_items::WorkItemContract;

pub struct SnapshotContract<'a> {
    multipliers: &'a CertaintyMultipliers,
}

impl<'a> SnapshotContract<'a> {
    pub fn new(multipliers: &'a CertaintyMultipliers) -> Self {
        Self { multipliers }
    }

    fn validate_unique_ids<'b>(
        &self,
        field: &str,
        ids: impl Iterator<Item = &'b str>,
        errors: &mut ValidationErrors,
    ) {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                errors.add(field, format!("contain duplicate id {}", id));
            }
        }
    }
}

impl<'a> Contract<PlanningSnapshot> for SnapshotContract<'a> {
    fn validate(&self, entity: &PlanningSnapshot) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if let Some(period) = &entity.period {
            if !period.is_valid() {
                errors.add("period", "must start on or before its end date");
            }
        }

        self.validate_unique_ids("items", entity.items.iter().map(|i| i.id.as_str()), &mut errors);
        self.validate_unique_ids("members", entity.members.iter().map(|m| m.id.as_str()), &mut errors);

        let item_contract = WorkItemContract::new(self.multipliers);
        for (i, item) in entity.items.iter().enumerate() {
            if let Err(e) = item_contract.validate(item) {
                errors.merge(e.nested(&format!("items[{i}]")));
            }
        }

        let member_contract = TeamMemberContract::new();
        for (i, member) in entity.members.iter().enumerate() {
            if let Err(e) = member_contract.validate(member) {
                errors.merge(e.nested(&format!("members[{i}]")));
            }
        }

        let holiday_contract = HolidayContract::new();
        for (i, holiday) in entity.holidays.iter().enumerate() {
            if let Err(e) = holiday_contract.validate(holiday) {
                errors.merge(e.nested(&format!("holidays[{i}]")));
            }
        }

        into_result(errors)
    }
}

impl<'a> SnapshotContract<'a> {
    /// Problems with active overrides, keyed `overrides[i].field`. Inactive
    /// overrides are never applied and are not checked.
    pub fn override_issues(&self, entity: &PlanningSnapshot) -> ValidationErrors {
        let contract = ManualOverrideContract::new(
            entity.items.iter().map(|i| i.id.as_str()),
            entity.members.iter().map(|m| m.id.as_str()),
        );
        let mut issues = ValidationErrors::new();
        for (i, o) in entity.overrides.iter().enumerate().filter(|(_, o)| o.active) {
            if let Err(e) = contract.validate(o) {
                issues.merge(e.nested(&format!("overrides[{i}]")));
            }
        }
        issues
    }
}
