//! Contract for team members

use qp_core::error::ValidationErrors;
use qp_models::TeamMember;
use validator::Validate;

use crate::base::{from_validator, into_result, Contract, ValidationResult};

#[derive(Debug, Default)]
pub struct TeamMemberContract;

impl TeamMemberContract {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_id(&self, member: &TeamMember, errors: &mut ValidationErrors) {
        if member.id.trim().is_empty() {
            errors.add("id", "can't be blank");
        }
    }

    pub fn validate_preferences(&self, member: &TeamMember, errors: &mut ValidationErrors) {
        let Some(preferences) = &member.preferences else {
            return;
        };
        if preferences.max_concurrent_items == Some(0) {
            errors.add("preferences.max_concurrent_items", "must be at least 1");
        }
        if let Some(hours) = preferences.max_daily_hours {
            if !(0.0..=24.0).contains(&hours) {
                errors.add("preferences.max_daily_hours", "must be between 0 and 24");
            }
        }
        if preferences
            .preferred_kinds
            .iter()
            .any(|k| preferences.avoided_kinds.contains(k))
        {
            errors.add("preferences.avoided_kinds", "overlaps with preferred kinds");
        }
    }

    pub fn validate_availability(&self, member: &TeamMember, errors: &mut ValidationErrors) {
        if let Some(window) = &member.availability {
            if let (Some(start), Some(end)) = (window.start, window.end) {
                if start > end {
                    errors.add("availability", "must start before it ends");
                }
            }
        }
    }

    pub fn validate_skill_levels(&self, member: &TeamMember, errors: &mut ValidationErrors) {
        for (skill, level) in &member.skill_levels {
            if !(1..=5).contains(level) {
                errors.add("skill_levels", format!("{} must be between 1 and 5", skill));
            }
        }
    }
}

impl Contract<TeamMember> for TeamMemberContract {
    fn validate(&self, entity: &TeamMember) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if let Err(e) = entity.validate() {
            from_validator(e, &mut errors);
        }
        self.validate_id(entity, &mut errors);
        self.validate_preferences(entity, &mut errors);
        self.validate_availability(entity, &mut errors);
        self.validate_skill_levels(entity, &mut errors);

        into_result(errors)
    }
}
