use thiserror::Error;

/// Failures that the delivery layer reports to the user instead of a curve.
#[derive(Debug, Error)]
pub enum HullResError {
    /// Missing or non-numeric input field
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
    /// Method tag outside the six known wetted surface area methods
    #[error("Unknown wetted surface area method {0:?}")]
    UnknownMethod(String),
    /// Curve sample that is NaN or infinite
    #[error("Non-finite resistance at sample {index} (speed {speed} m/s): {resistance} N")]
    NumericDegeneracy {
        index: usize,
        speed: f64,
        resistance: f64,
    },
}

pub type HullResResult<T> = Result<T, HullResError>;
