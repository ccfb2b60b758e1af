//! Numeric constants shared by the pipeline.

use num_complex::Complex;

/// Default tolerances (can be overridden by caller)
pub mod tolerances {
    /// Allowed deviation of `Σ|c_i|^2` from 1 before a warning is raised.
    pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-6;
    /// Largest imaginary part a trace that must be real may carry.
    pub const DEFAULT_HERMITICITY_TOLERANCE: f64 = 1e-9;
}

/// Pauli X, `[[0, 1], [1, 0]]`.
pub const SIGMA_X: [[Complex<f64>; 2]; 2] = [
    [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
];

/// Pauli Y, `[[0, -i], [i, 0]]`.
pub const SIGMA_Y: [[Complex<f64>; 2]; 2] = [
    [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
    [Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)],
];

/// Pauli Z, `[[1, 0], [0, -1]]`.
pub const SIGMA_Z: [[Complex<f64>; 2]; 2] = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0)],
];
