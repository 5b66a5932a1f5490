//! Base contract system

use qp_core::error::ValidationErrors;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    /// Validate the entity
    fn validate(&self, entity: &T) -> ValidationResult;
}

/// Finish a validation pass
pub fn into_result(errors: ValidationErrors) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Fold derive-level `validator` errors into our field-keyed collection
pub fn from_validator(source: validator::ValidationErrors, errors: &mut ValidationErrors) {
    let mut fields: Vec<_> = source.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, field_errors) in fields {
        for error in field_errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => default_message(&error.code).to_string(),
            };
            errors.add(field, message);
        }
    }
}

fn default_message(code: &str) -> &'static str {
    match code {
        "length" => "has an invalid length",
        "range" => "is out of range",
        "regex" => "is invalid",
        "required" => "can't be blank",
        _ => "is invalid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        name: String,
        #[validate(range(min = 0.0))]
        days: f64,
    }

    #[test]
    fn test_from_validator_maps_fields() {
        let sample = Sample { name: String::new(), days: -2.0 };
        let mut errors = ValidationErrors::new();
        from_validator(sample.validate().unwrap_err(), &mut errors);

        assert_eq!(errors.get("name"), Some(&vec!["has an invalid length".to_string()]));
        assert_eq!(errors.get("days"), Some(&vec!["is out of range".to_string()]));
    }

    #[test]
    fn test_into_result() {
        assert!(into_result(ValidationErrors::new()).is_ok());
        let mut errors = ValidationErrors::new();
        errors.add_base("bad");
        assert!(into_result(errors).is_err());
    }
}
