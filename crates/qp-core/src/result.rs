//! Result type aliases

use crate::error::{PlanError, ValidationErrors};

/// Standard Result type for planning operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Turn a collected set of validation errors into a result
pub fn ensure_valid(errors: ValidationErrors) -> PlanResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(PlanError::Validation(errors))
    }
}
