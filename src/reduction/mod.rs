// src/reduction/mod.rs

//! Decomposes a multi-qubit state into its single-qubit reduced states.
//!
//! The pipeline is stateless: a `StateVector` becomes a full `DensityMatrix`
//! (`builder`), which is traced down to one 2×2 marginal per qubit
//! (`partial_trace`). Qubit `k` is bit `k` of a basis-state index, with
//! qubit 0 the least-significant bit, throughout.

mod builder;
mod partial_trace;

pub use builder::build_density_matrix;
pub use partial_trace::{reduce_all_qubits, reduce_to_qubit};

use crate::core::{DensityMatrix, QtraceError, StateVector};
use crate::validation::check_normalization;

/// Computes the reduced density matrix of every qubit of `state`, in
/// qubit-index order.
///
/// A state whose norm drifts from 1 is still reduced; the drift is logged as
/// a warning. Callers that need the warning as a value should call
/// [`check_normalization`] themselves, or use
/// [`StateAnalyzer::analyze`](crate::StateAnalyzer::analyze), which attaches it
/// to its result.
///
/// # Errors
/// Propagates `QtraceError::InvalidDimension` from the partial trace.
pub fn compute_reduced_states(state: &StateVector) -> Result<Vec<DensityMatrix>, QtraceError> {
    check_normalization(state, None);
    reduce_state(state)
}

/// Reduction without the normalization check. (Internal visibility)
pub(crate) fn reduce_state(state: &StateVector) -> Result<Vec<DensityMatrix>, QtraceError> {
    log::debug!("Reducing {}-qubit state (dim {})", state.num_qubits(), state.dim());
    let rho = build_density_matrix(state);
    reduce_all_qubits(&rho)
}
