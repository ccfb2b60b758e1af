// src/validation/mod.rs

//! Input checks applied at the edges of the reduction pipeline.

use crate::core::constants::tolerances::{DEFAULT_HERMITICITY_TOLERANCE, DEFAULT_NORM_TOLERANCE};
use crate::core::{DensityMatrix, NormalizationWarning, QtraceError, StateVector};

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// A drifted norm is not fatal: the pipeline still runs, but every reduced
/// matrix inherits the wrong trace. The deviation is logged at `warn` level
/// and handed back so the caller can surface it.
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-6.
///
/// # Returns
/// * `None` if normalized within tolerance.
/// * `Some(NormalizationWarning)` otherwise.
pub fn check_normalization(
    state: &StateVector,
    tolerance: Option<f64>,
) -> Option<NormalizationWarning> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        let warning = NormalizationWarning { norm_sqr, tolerance: effective_tolerance };
        log::warn!("{} for {}-qubit state", warning, state.num_qubits());
        Some(warning)
    } else {
        None
    }
}

/// Checks that `ρ_ij == conj(ρ_ji)` entry-wise within tolerance.
///
/// # Arguments
/// * `rho` - The `DensityMatrix` to check.
/// * `tolerance` - Allowed entry-wise deviation. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if Hermitian within tolerance.
/// * `Err(QtraceError::NonHermitian)` naming the first offending pair.
pub fn check_hermitian(rho: &DensityMatrix, tolerance: Option<f64>) -> Result<(), QtraceError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_HERMITICITY_TOLERANCE);
    for i in 0..rho.dim() {
        for j in i..rho.dim() {
            let deviation = (rho.get(i, j) - rho.get(j, i).conj()).norm();
            if deviation > effective_tolerance {
                return Err(QtraceError::NonHermitian {
                    message: format!(
                        "rho[{},{}] = {} is not the conjugate of rho[{},{}] = {} (deviation {:.3e} > {})",
                        i, j, rho.get(i, j), j, i, rho.get(j, i), deviation, effective_tolerance
                    ),
                });
            }
        }
    }
    Ok(())
}
