// src/core/state.rs

use super::error::QtraceError;
use super::format::format_complex;
use num_complex::Complex;
use std::fmt;

/// States with more amplitudes than this are abbreviated by `Display`.
const DISPLAY_FULL_LIMIT: usize = 16;
/// Number of leading and trailing amplitudes shown for abbreviated states.
const DISPLAY_EDGE_COUNT: usize = 8;

/// Returns `n` such that `dim == 2^n`, or `InvalidDimension`.
pub(crate) fn qubits_for_dimension(dim: usize, what: &str) -> Result<usize, QtraceError> {
    if dim == 0 || !dim.is_power_of_two() {
        return Err(QtraceError::InvalidDimension {
            message: format!("{} has dimension {}, which is not a power of 2", what, dim),
        });
    }
    Ok(dim.trailing_zeros() as usize)
}

/// Pure state of an `n`-qubit register handed in by an upstream simulator.
///
/// Amplitude `i` belongs to the basis state whose bit `k` is the value of
/// qubit `k` (qubit 0 is the least-significant bit). The vector is expected
/// to be normalized but this is not enforced: see
/// [`crate::validation::check_normalization`].
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl StateVector {
    /// Wraps a vector of amplitudes.
    ///
    /// # Errors
    /// `QtraceError::InvalidDimension` if the length is not a power of two
    /// (an empty vector included).
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Result<Self, QtraceError> {
        let num_qubits = qubits_for_dimension(amplitudes.len(), "State vector")?;
        Ok(Self { amplitudes, num_qubits })
    }

    /// Builds a state from purely real amplitudes.
    pub fn from_real(amplitudes: &[f64]) -> Result<Self, QtraceError> {
        Self::new(amplitudes.iter().map(|&re| Complex::new(re, 0.0)).collect())
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of amplitudes, `2^n`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits `n`.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// `Σ|c_i|^2`.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Born-rule probability of each computational basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Ket label of basis state `index`, most significant qubit first,
    /// e.g. `|011>` for index 3 of a 3-qubit register.
    pub fn basis_label(&self, index: usize) -> String {
        if self.num_qubits == 0 {
            return "|>".to_string();
        }
        format!("|{:0width$b}>", index, width = self.num_qubits)
    }

    fn write_amplitudes(
        &self,
        f: &mut fmt::Formatter<'_>,
        range: std::ops::Range<usize>,
        precision: usize,
    ) -> fmt::Result {
        for i in range {
            let amplitude = format_complex(self.amplitudes[i], precision);
            writeln!(f, "  {}: {}", self.basis_label(i), amplitude)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Complex<f64>>> for StateVector {
    type Error = QtraceError;

    fn try_from(amplitudes: Vec<Complex<f64>>) -> Result<Self, Self::Error> {
        Self::new(amplitudes)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        writeln!(f, "StateVector ({} qubits, dim {}):", self.num_qubits, self.dim())?;
        if self.dim() <= DISPLAY_FULL_LIMIT {
            self.write_amplitudes(f, 0..self.dim(), precision)?;
        } else {
            // Large registers: first and last few amplitudes only
            self.write_amplitudes(f, 0..DISPLAY_EDGE_COUNT, precision)?;
            writeln!(f, "  ...")?;
            self.write_amplitudes(f, self.dim() - DISPLAY_EDGE_COUNT..self.dim(), precision)?;
        }
        write!(f, "  norm: {:.6}", self.norm_sqr().sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_two_lengths() {
        assert_eq!(StateVector::from_real(&[1.0]).map(|s| s.num_qubits()), Ok(0));
        assert_eq!(StateVector::from_real(&[1.0, 0.0, 0.0, 0.0]).map(|s| s.num_qubits()), Ok(2));
        assert!(matches!(
            StateVector::from_real(&[1.0, 0.0, 0.0]),
            Err(QtraceError::InvalidDimension { .. })
        ));
        assert!(StateVector::new(Vec::new()).is_err());
    }

    #[test]
    fn test_basis_labels_are_msb_first() -> Result<(), QtraceError> {
        let state = StateVector::from_real(&[0.0; 8])?;
        assert_eq!(state.basis_label(1), "|001>");
        assert_eq!(state.basis_label(6), "|110>");
        Ok(())
    }

    #[test]
    fn test_display_abbreviates_large_states() -> Result<(), QtraceError> {
        let mut amps = vec![0.0; 32];
        amps[0] = 1.0;
        let rendered = StateVector::from_real(&amps)?.to_string();
        assert!(rendered.contains("|00000>: 1.000"));
        assert!(rendered.contains("..."));
        assert!(rendered.contains("|11111>"));
        assert!(!rendered.contains("|01000>"));
        Ok(())
    }
}
