//! Contract for holidays

use qp_core::error::ValidationErrors;
use qp_models::member::COUNTRY_CODE;
use qp_models::Holiday;

use crate::base::{into_result, Contract, ValidationResult};

#[derive(Debug, Default)]
pub struct HolidayContract;

impl HolidayContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<Holiday> for HolidayContract {
    fn validate(&self, entity: &Holiday) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        if entity.name.trim().is_empty() {
            errors.add("name", "can't be blank");
        }
        for code in &entity.country_codes {
            if !COUNTRY_CODE.is_match(code) {
                errors.add("country_codes", format!("{:?} is not a two-letter country code", code));
            }
        }

        into_result(errors)
    }
}
