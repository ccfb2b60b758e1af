// src/core/qubit.rs

use super::error::QtraceError;
use std::fmt;

/// Position of a qubit inside a register.
///
/// Qubit `k` is bit `k` of a basis-state index (least-significant bit is
/// qubit 0), so `|q_{n-1} ... q_1 q_0>` enumerates as `Σ q_k 2^k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct QubitIndex(pub usize);

impl QubitIndex {
    /// Returns the index if it addresses one of `num_qubits` qubits.
    pub fn checked(self, num_qubits: usize) -> Result<Self, QtraceError> {
        if self.0 < num_qubits {
            Ok(self)
        } else {
            Err(QtraceError::InvalidDimension {
                message: format!(
                    "{} is out of range for a {}-qubit system (valid: 0..={})",
                    self,
                    num_qubits,
                    num_qubits.saturating_sub(1)
                ),
            })
        }
    }

    /// Bit mask selecting this qubit in a basis-state index. Only valid once
    /// the index has passed [`QubitIndex::checked`].
    pub(crate) fn mask(self) -> usize {
        1 << self.0
    }
}

impl From<usize> for QubitIndex {
    fn from(value: usize) -> Self {
        QubitIndex(value)
    }
}

/// Front ends that hold indices as signed integers go through here, so a
/// negative index is rejected the same way an index past the end is.
impl TryFrom<i64> for QubitIndex {
    type Error = QtraceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(QubitIndex)
            .map_err(|_| QtraceError::InvalidDimension {
                message: format!("Qubit index {} is negative", value),
            })
    }
}

impl fmt::Display for QubitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q[{}]", self.0)
    }
}
