// src/analysis/mod.rs

//! Runs the reduction pipeline end to end and packages its output.
//!
//! `StateAnalyzer` is the entry point a front end talks to: it takes a state
//! vector (or a density matrix, for mixed states), reduces it qubit by qubit,
//! projects each marginal onto the Bloch ball and collects the rows into a
//! `StateAnalysis`. The analyzer holds only its tolerances; every call is
//! independent.

mod results;
mod export;

// Re-export the main public interface types
pub use results::{
    EvolutionStep, QubitAnalysis, StateAnalysis, StateClass, MIXED_THRESHOLD, PURE_THRESHOLD,
};
pub use export::{
    format_density_matrix, ExportMetadata, ExportPackage, QubitRecord, EXPORT_TIME_FORMAT,
};

use crate::bloch::project_to_bloch_with_tolerance;
use crate::core::constants::tolerances::{DEFAULT_HERMITICITY_TOLERANCE, DEFAULT_NORM_TOLERANCE};
use crate::core::{DensityMatrix, QtraceError, QubitIndex, StateVector};
use crate::reduction::{reduce_all_qubits, reduce_state};
use crate::validation::{check_hermitian, check_normalization};

/// Numeric tolerances applied by a [`StateAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Allowed deviation of `Σ|c_i|^2` from 1 before a warning is attached.
    pub normalization: f64,
    /// Largest imaginary part tolerated on traces that must be real, and the
    /// entry-wise bound for caller-supplied density matrices.
    pub hermiticity: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            normalization: DEFAULT_NORM_TOLERANCE,
            hermiticity: DEFAULT_HERMITICITY_TOLERANCE,
        }
    }
}

/// Orchestrates reduction and projection for whole states.
#[derive(Debug, Clone, Default)] // Allows StateAnalyzer::default() -> StateAnalyzer::new()
pub struct StateAnalyzer {
    tolerances: Tolerances,
}

impl StateAnalyzer {
    /// Creates an analyzer with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom tolerances.
    pub fn with_tolerances(tolerances: Tolerances) -> Self {
        Self { tolerances }
    }

    /// Tolerances in effect.
    pub fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    /// Reduces `state` to per-qubit marginals and projects each one.
    ///
    /// # Returns
    /// * `Ok(StateAnalysis)` with one row per qubit. A state whose norm drifts
    ///   beyond tolerance is still analyzed and carries a warning.
    /// * `Err(QtraceError)` if a reduced matrix fails the Hermiticity check.
    pub fn analyze(&self, state: &StateVector) -> Result<StateAnalysis, QtraceError> {
        let warnings: Vec<_> = check_normalization(state, Some(self.tolerances.normalization))
            .into_iter()
            .collect();
        let reduced = reduce_state(state)?;
        let qubits = self.project_all(reduced)?;
        Ok(StateAnalysis::new(qubits, warnings))
    }

    /// Analyzes a density matrix supplied directly by the caller, e.g. the
    /// output of a noisy or measured simulation.
    ///
    /// # Errors
    /// `QtraceError::NonHermitian` if `rho` itself is not Hermitian.
    pub fn analyze_density_matrix(
        &self,
        rho: &DensityMatrix,
    ) -> Result<StateAnalysis, QtraceError> {
        check_hermitian(rho, Some(self.tolerances.hermiticity))?;
        let trace = rho.trace().re;
        if (trace - 1.0).abs() > self.tolerances.normalization {
            log::warn!("Density matrix trace is {} (expected 1)", trace);
        }
        let reduced = reduce_all_qubits(rho)?;
        let qubits = self.project_all(reduced)?;
        Ok(StateAnalysis::new(qubits, Vec::new()))
    }

    /// Analyzes a sequence of states, one per circuit step, in order.
    ///
    /// Each entry pairs a label (usually the gate just applied) with the
    /// state after that step. The first failing step aborts the whole run.
    pub fn analyze_evolution<'a, I>(&self, steps: I) -> Result<Vec<EvolutionStep>, QtraceError>
    where
        I: IntoIterator<Item = (&'a str, &'a StateVector)>,
    {
        steps
            .into_iter()
            .enumerate()
            .map(|(step, (label, state))| -> Result<EvolutionStep, QtraceError> {
                log::debug!("Analyzing step {} ({})", step, label);
                Ok(EvolutionStep {
                    step,
                    label: label.to_string(),
                    analysis: self.analyze(state)?,
                })
            })
            .collect()
    }

    fn project_all(&self, reduced: Vec<DensityMatrix>) -> Result<Vec<QubitAnalysis>, QtraceError> {
        reduced
            .into_iter()
            .enumerate()
            .map(|(k, rho)| -> Result<QubitAnalysis, QtraceError> {
                let projection =
                    project_to_bloch_with_tolerance(&rho, self.tolerances.hermiticity)?;
                Ok(QubitAnalysis::new(QubitIndex(k), rho, projection))
            })
            .collect()
    }
}
