// src/bloch/mod.rs

//! Projects single-qubit density matrices onto the Bloch ball.

use crate::core::constants::tolerances::DEFAULT_HERMITICITY_TOLERANCE;
use crate::core::{DensityMatrix, QtraceError, SIGMA_X, SIGMA_Y, SIGMA_Z};
use num_complex::Complex;
use num_traits::Zero;
use serde::Serialize;
use std::fmt;

/// Point in the Bloch ball, `(Tr ρσx, Tr ρσy, Tr ρσz)`.
///
/// Each component lies in `[-1, 1]`; the point is on the sphere for a pure
/// state and inside it for a mixed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlochCoordinate {
    /// Expectation of σx.
    pub x: f64,
    /// Expectation of σy.
    pub y: f64,
    /// Expectation of σz.
    pub z: f64,
}

impl BlochCoordinate {
    /// Euclidean length `sqrt(x² + y² + z²)`.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Components as an array.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for BlochCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(4);
        write!(f, "({:.*}, {:.*}, {:.*})", p, self.x, p, self.y, p, self.z)
    }
}

/// Bloch coordinate and purity of one qubit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlochProjection {
    /// Position in the Bloch ball.
    pub coordinate: BlochCoordinate,
    /// `Tr(ρ²)`, in `[0.5, 1]` for a physical qubit.
    pub purity: f64,
}

/// `Tr(A·B)` for 2×2 matrices.
fn trace_of_product(a: &[[Complex<f64>; 2]; 2], b: &[[Complex<f64>; 2]; 2]) -> Complex<f64> {
    let mut total = Complex::zero();
    for i in 0..2 {
        for j in 0..2 {
            total += a[i][j] * b[j][i];
        }
    }
    total
}

/// Discards the imaginary part of a trace that must be real for Hermitian
/// input, failing if it is not negligible.
fn real_part_checked(value: Complex<f64>, label: &str, tolerance: f64) -> Result<f64, QtraceError> {
    if value.im.abs() > tolerance {
        return Err(QtraceError::NonHermitian {
            message: format!("Im({}) = {:.3e} exceeds tolerance {}", label, value.im, tolerance),
        });
    }
    Ok(value.re)
}

/// Maps a 2×2 density matrix to its Bloch coordinate and purity.
///
/// Uses the default Hermiticity tolerance of 1e-9. See
/// [`project_to_bloch_with_tolerance`].
pub fn project_to_bloch(rho: &DensityMatrix) -> Result<BlochProjection, QtraceError> {
    project_to_bloch_with_tolerance(rho, DEFAULT_HERMITICITY_TOLERANCE)
}

/// Maps a 2×2 density matrix to `(Tr ρσx, Tr ρσy, Tr ρσz)` and `Tr ρ²`.
///
/// Coordinates are clamped to `[-1, 1]` and purity to `[0, 1]` to absorb
/// floating-point overshoot.
///
/// # Errors
/// * `QtraceError::InvalidDimension` if `rho` is not 2×2.
/// * `QtraceError::NonHermitian` if the imaginary part of any of these
///   traces, or of `Tr ρ`, exceeds `tolerance`.
pub fn project_to_bloch_with_tolerance(
    rho: &DensityMatrix,
    tolerance: f64,
) -> Result<BlochProjection, QtraceError> {
    let m = rho.as_2x2()?;

    real_part_checked(m[0][0] + m[1][1], "Tr(rho)", tolerance)?;
    let x = real_part_checked(trace_of_product(&m, &SIGMA_X), "Tr(rho*X)", tolerance)?;
    let y = real_part_checked(trace_of_product(&m, &SIGMA_Y), "Tr(rho*Y)", tolerance)?;
    let z = real_part_checked(trace_of_product(&m, &SIGMA_Z), "Tr(rho*Z)", tolerance)?;
    let purity = real_part_checked(trace_of_product(&m, &m), "Tr(rho^2)", tolerance)?;

    Ok(BlochProjection {
        coordinate: BlochCoordinate {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
            z: z.clamp(-1.0, 1.0),
        },
        purity: purity.clamp(0.0, 1.0),
    })
}
