// src/lib.rs

//! `qtrace` - Reduced single-qubit states and Bloch-sphere projection
//!
//! This library takes the state of a small quantum register, as produced by
//! an upstream simulator, and decomposes it into one reduced density matrix
//! per qubit. Each 2×2 marginal is then projected onto the Bloch ball as an
//! `(x, y, z)` coordinate plus a purity `Tr(ρ²)`.
//!
//! Pipeline: `StateVector` → [`build_density_matrix`] → [`reduce_to_qubit`]
//! → [`project_to_bloch`].
//!
//! Basis ordering: qubit `k` is bit `k` of a basis-state index, qubit 0 being
//! the least-significant bit. Amplitude 2 of a two-qubit state is therefore
//! `|q1 q0> = |10>`.

pub mod core;
pub mod validation;
pub mod reduction;
pub mod bloch;
pub mod analysis;

// Re-export the most common types for easier top-level use
pub use crate::core::{
    DensityMatrix, NormalizationWarning, QtraceError, QubitIndex, Result, StateVector,
};
pub use crate::core::format_complex;
pub use reduction::{
    build_density_matrix, compute_reduced_states, reduce_all_qubits, reduce_to_qubit,
};
pub use bloch::{
    project_to_bloch, project_to_bloch_with_tolerance, BlochCoordinate, BlochProjection,
};
pub use analysis::{
    format_density_matrix, EvolutionStep, ExportPackage, QubitAnalysis, StateAnalysis,
    StateAnalyzer, StateClass, Tolerances,
};
pub use validation::{check_hermitian, check_normalization};

// Example 1: Bell state
// Both halves of a maximally entangled pair are maximally mixed on their own.
/// ```
/// use qtrace::{StateVector, compute_reduced_states, project_to_bloch, QtraceError};
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// # fn main() -> Result<(), QtraceError> {
/// // (|00> + |11>)/sqrt(2)
/// let bell = StateVector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2])?;
///
/// for rho in compute_reduced_states(&bell)? {
///     let projection = project_to_bloch(&rho)?;
///     println!("{} purity {:.4}", projection.coordinate, projection.purity);
///     assert!(projection.coordinate.length() < 1e-9);
///     assert!((projection.purity - 0.5).abs() < 1e-9);
/// }
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Full analysis with export
// The analyzer runs the whole pipeline and packages the rows for a front end.
/// ```
/// use qtrace::{StateAnalyzer, StateVector, StateClass, QtraceError};
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// # fn main() -> Result<(), QtraceError> {
/// // Hadamard on |0>
/// let plus = StateVector::from_real(&[FRAC_1_SQRT_2, FRAC_1_SQRT_2])?;
/// let analysis = StateAnalyzer::new().analyze(&plus)?;
/// println!("{}", analysis);
///
/// let row = &analysis.qubits()[0];
/// assert!((row.coordinate().x - 1.0).abs() < 1e-9);
/// assert_eq!(row.class, StateClass::Pure);
///
/// let json = analysis.export_package().to_json_pretty()?;
/// assert!(json.contains("\"qubit_index\": 0"));
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
