// src/core/density.rs

use super::error::QtraceError;
use super::format::format_rows;
use super::state::qubits_for_dimension;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// Square complex matrix describing a (possibly mixed) quantum state.
///
/// Stored row-major. The dimension is always a power of two, `2^n` for an
/// `n`-qubit system. Matrices produced by the pipeline are Hermitian with
/// unit trace; matrices supplied directly by a caller are only checked for
/// shape, so Hermiticity is verified where it is relied on.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DensityMatrix {
    dim: usize,
    #[serde(skip)]
    num_qubits: usize,
    entries: Vec<Complex<f64>>,
}

impl DensityMatrix {
    /// Creates a matrix from row-major entries whose dimension has already
    /// been validated. (Internal visibility)
    pub(crate) fn from_raw(dim: usize, num_qubits: usize, entries: Vec<Complex<f64>>) -> Self {
        debug_assert_eq!(entries.len(), dim * dim);
        Self { dim, num_qubits, entries }
    }

    /// All-zero matrix of the given validated dimension. (Internal visibility)
    pub(crate) fn zeros(dim: usize, num_qubits: usize) -> Self {
        Self::from_raw(dim, num_qubits, vec![Complex::zero(); dim * dim])
    }

    /// Builds a matrix from rows supplied by a caller that already holds a
    /// density matrix, e.g. from a noisy or measured simulation.
    ///
    /// # Errors
    /// `QtraceError::InvalidDimension` if the rows do not form a square
    /// matrix or the dimension is not a power of two.
    pub fn from_rows(rows: Vec<Vec<Complex<f64>>>) -> Result<Self, QtraceError> {
        let dim = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != dim) {
            return Err(QtraceError::InvalidDimension {
                message: format!(
                    "Density matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    dim
                ),
            });
        }
        let num_qubits = qubits_for_dimension(dim, "Density matrix")?;
        Ok(Self::from_raw(dim, num_qubits, rows.into_iter().flatten().collect()))
    }

    /// Convenience constructor for a single-qubit matrix.
    pub fn from_2x2(matrix: [[Complex<f64>; 2]; 2]) -> Self {
        Self::from_raw(2, 1, matrix.iter().flatten().copied().collect())
    }

    /// Matrix dimension `2^n`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of qubits `n` the matrix describes.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Entry at (`row`, `col`). Panics if out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> Complex<f64> {
        self.entries[row * self.dim + col]
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> &mut Complex<f64> {
        &mut self.entries[row * self.dim + col]
    }

    /// Row-major entries.
    pub fn entries(&self) -> &[Complex<f64>] {
        &self.entries
    }

    /// Entries as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Complex<f64>>> {
        self.entries.chunks(self.dim).map(|row| row.to_vec()).collect()
    }

    /// Returns the matrix as a fixed 2×2 array.
    ///
    /// # Errors
    /// `QtraceError::InvalidDimension` unless the matrix describes one qubit.
    pub fn as_2x2(&self) -> Result<[[Complex<f64>; 2]; 2], QtraceError> {
        if self.dim != 2 {
            return Err(QtraceError::InvalidDimension {
                message: format!(
                    "Expected a 2x2 single-qubit density matrix, got {}x{}",
                    self.dim, self.dim
                ),
            });
        }
        Ok([
            [self.entries[0], self.entries[1]],
            [self.entries[2], self.entries[3]],
        ])
    }

    /// `Tr(ρ)`.
    pub fn trace(&self) -> Complex<f64> {
        (0..self.dim).map(|i| self.get(i, i)).sum()
    }

    /// `Tr(ρ²)` as a real number. Lies in `[1/d, 1]` for a valid density
    /// matrix of dimension `d`.
    pub fn purity(&self) -> f64 {
        // Tr(ρ²) = Σ_ij ρ_ij ρ_ji; for Hermitian ρ this is Σ|ρ_ij|².
        let mut total = Complex::zero();
        for i in 0..self.dim {
            for j in 0..self.dim {
                total += self.get(i, j) * self.get(j, i);
            }
        }
        total.re
    }

    /// Whether `|ρ_ij - conj(ρ_ji)| <= tolerance` for every entry.
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        (0..self.dim).all(|i| {
            (i..self.dim).all(|j| (self.get(i, j) - self.get(j, i).conj()).norm() <= tolerance)
        })
    }
}

impl fmt::Display for DensityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "{}", format_rows(&self.entries, self.dim, precision))
    }
}
