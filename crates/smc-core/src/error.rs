//! Error types for market structure analysis.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum SmcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

/// A price series that does not satisfy the input contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Non-finite {field} price at position {position}")]
    NonFinitePrice { position: usize, field: &'static str },

    #[error("High {high} below low {low} at position {position}")]
    InvertedRange { position: usize, high: f64, low: f64 },

    #[error("Timestamp {current} at position {position} does not follow {previous}")]
    OutOfOrder {
        position: usize,
        previous: i64,
        current: i64,
    },
}

/// Failures raised while detecting swings, classifying structure or scoring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Computation error: {0}")]
    Computation(String),
}

impl AnalysisError {
    /// Whether the failure is attributable to the supplied series.
    pub fn is_input(&self) -> bool {
        matches!(self, AnalysisError::Input(_))
    }
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid series: {0}")]
    Input(#[from] InputError),
}
