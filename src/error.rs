use thiserror::Error;

/// Top-level error type for the planmark annotation engine.
#[derive(Debug, Error)]
pub enum PlanmarkError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors related to geometric inputs.
///
/// These are contract violations: malformed values a caller constructed,
/// not data-quality anomalies found during analysis (those are recovered
/// locally and reported as warnings on the result).
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("{parameter} = {value} is not a finite number")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to operation parameters and the command contract.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("{parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} must not be negative")]
    Negative { parameter: &'static str, value: f64 },

    #[error("required field missing: {0}")]
    MissingField(&'static str),

    #[error("operation not supported by this planner: {0}")]
    UnsupportedOperation(String),
}

/// Convenience type alias for results using [`PlanmarkError`].
pub type Result<T> = std::result::Result<T, PlanmarkError>;
