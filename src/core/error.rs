//! Error handling logic

use thiserror::Error;

/// Errors raised by the reduction and projection pipeline.
///
/// Every variant is reported synchronously to the immediate caller. They all
/// point at malformed input or a programming error upstream, so there is no
/// fallback computation to retry with.
#[derive(Error, Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QtraceError {
    /// A length or shape is not a power of two, a matrix is not square, or a
    /// qubit index lies outside `[0, n-1]`.
    #[error("Invalid Dimension: {message}")]
    InvalidDimension {
        /// InvalidDimension failure message
        message: String,
    },

    /// A density matrix failed the Hermiticity check: the imaginary part of a
    /// trace that must be real exceeded tolerance.
    #[error("Non-Hermitian Density Matrix: {message}")]
    NonHermitian {
        /// NonHermitian failure message
        message: String,
    },

    /// The export package could not be serialized.
    #[error("Serialization Error: {message}")]
    Serialization {
        /// Serialization failure message
        message: String,
    },
}

impl From<serde_json::Error> for QtraceError {
    fn from(err: serde_json::Error) -> Self {
        QtraceError::Serialization { message: err.to_string() }
    }
}

impl From<csv::Error> for QtraceError {
    fn from(err: csv::Error) -> Self {
        QtraceError::Serialization { message: err.to_string() }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, QtraceError>;

/// Non-fatal report that a state vector's squared norm drifted from 1.
///
/// The pipeline still runs; downstream trace-1 invariants will be off by the
/// same amount.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct NormalizationWarning {
    /// Observed `Σ|c_i|^2`.
    pub norm_sqr: f64,
    /// Tolerance the deviation was measured against.
    pub tolerance: f64,
}

impl NormalizationWarning {
    /// Absolute deviation of the squared norm from 1.
    pub fn deviation(&self) -> f64 {
        (self.norm_sqr - 1.0).abs()
    }
}

impl std::fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Normalization Warning: Sum(|c_i|^2) = {} (Deviation {:.3e} > {})",
            self.norm_sqr,
            self.deviation(),
            self.tolerance
        )
    }
}
