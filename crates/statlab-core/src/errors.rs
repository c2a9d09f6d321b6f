use thiserror::Error;

/// Reasons a statistical routine declines to produce a result
///
/// None of these are fatal. The `Option`-returning test routines collapse
/// every variant into `None`; the `try_*` forms hand the reason back to the
/// caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    // Input validation errors
    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Insufficient data: {0}")]
    InsufficientDataMsg(String),

    #[error("Dimension mismatch: {left} has {left_len} values, {right} has {right_len}")]
    DimensionMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatchMsg(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unsupported significance level: {0} (must be 0.05 or 0.01)")]
    InvalidSignificance(f64),

    #[error("Unsupported significance level: {0:?} is not a number")]
    UnparsedSignificance(String),

    // Numerical errors
    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StatsError {
    fn from(e: serde_json::Error) -> Self {
        StatsError::SerializationError(e.to_string())
    }
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
