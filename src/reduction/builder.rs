// src/reduction/builder.rs
use crate::core::{DensityMatrix, StateVector};

/// Forms the full-system density matrix `ρ = |ψ><ψ|`.
///
/// The dimension was validated when the `StateVector` was constructed, so
/// this cannot fail. The state is not renormalized: an unnormalized input
/// yields `Tr(ρ) = Σ|c_i|^2`.
pub fn build_density_matrix(state: &StateVector) -> DensityMatrix {
    let amplitudes = state.amplitudes();
    let dim = state.dim();
    let mut rho = DensityMatrix::zeros(dim, state.num_qubits());
    for (row, psi_row) in amplitudes.iter().enumerate() {
        for (col, psi_col) in amplitudes.iter().enumerate() {
            *rho.get_mut(row, col) = psi_row * psi_col.conj();
        }
    }
    rho
}

impl From<&StateVector> for DensityMatrix {
    fn from(state: &StateVector) -> Self {
        build_density_matrix(state)
    }
}
