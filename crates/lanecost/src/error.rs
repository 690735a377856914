use thiserror::Error;

use crate::trip::accessorial::AccessorialCode;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CostingError {
    #[error("Invalid driver type: {0}")]
    InvalidDriverType(String),

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Accessorial {0} is already present on this trip")]
    DuplicateAccessorial(AccessorialCode),

    #[error("Unknown accessorial code: {0}")]
    UnknownAccessorial(String),
}

impl CostingError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        CostingError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Rejects negative, NaN and infinite values.
    pub fn check_non_negative(field: &'static str, value: f64) -> Result<f64, CostingError> {
        if !value.is_finite() {
            return Err(CostingError::invalid_input(
                field,
                format!("{value} is not a finite number"),
            ));
        }

        if value < 0.0 {
            return Err(CostingError::invalid_input(
                field,
                format!("{value} is negative"),
            ));
        }

        Ok(value)
    }
}
