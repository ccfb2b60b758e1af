// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod qubit;
pub mod state;
pub mod density;
pub mod format;

// Re-export public types for convenient access via `qtrace::core::TypeName`
pub use error::{NormalizationWarning, QtraceError, Result};
pub use qubit::QubitIndex;
pub use state::StateVector;
pub use density::DensityMatrix;
pub use format::format_complex;

pub mod constants;
pub use constants::{SIGMA_X, SIGMA_Y, SIGMA_Z}; // Re-export
