// src/reduction/partial_trace.rs
use crate::core::{DensityMatrix, QtraceError, QubitIndex};

/// Reduces `rho` to the 2×2 marginal of `qubit` by tracing out every other
/// qubit.
///
/// `ρ_k[a,b] = Σ_s ρ[index(a,s), index(b,s)]`, where `s` runs over the
/// `2^(n-1)` settings of the remaining qubits and `index` inserts bit `a` at
/// position `k` of `s` (qubit 0 is the least-significant bit).
///
/// # Errors
/// `QtraceError::InvalidDimension` if `qubit` is not in `[0, n-1]`.
pub fn reduce_to_qubit(
    rho: &DensityMatrix,
    qubit: QubitIndex,
) -> Result<DensityMatrix, QtraceError> {
    let qubit = qubit.checked(rho.num_qubits())?;
    if rho.num_qubits() == 1 {
        // Nothing to trace out
        return Ok(rho.clone());
    }

    let k_mask = qubit.mask(); // Mask for the kept qubit
    let lower_mask = k_mask - 1; // Bits of s below the kept qubit stay put
    let upper_mask = !lower_mask; // Bits of s at or above it shift left by one

    let mut reduced = DensityMatrix::zeros(2, 1);
    for s in 0..rho.dim() / 2 {
        let i0 = ((s & upper_mask) << 1) | (s & lower_mask);
        let i1 = i0 | k_mask;
        let basis = [i0, i1];
        for (a, &row) in basis.iter().enumerate() {
            for (b, &col) in basis.iter().enumerate() {
                *reduced.get_mut(a, b) += rho.get(row, col);
            }
        }
    }
    Ok(reduced)
}

/// Reduces `rho` to every single-qubit marginal, in qubit-index order.
///
/// A zero-qubit (1×1) matrix yields an empty sequence.
pub fn reduce_all_qubits(rho: &DensityMatrix) -> Result<Vec<DensityMatrix>, QtraceError> {
    (0..rho.num_qubits())
        .map(|k| reduce_to_qubit(rho, QubitIndex(k)))
        .collect()
}
