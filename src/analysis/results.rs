// src/analysis/results.rs
use crate::bloch::{BlochCoordinate, BlochProjection};
use crate::core::{DensityMatrix, NormalizationWarning, QubitIndex};
use serde::Serialize;
use std::fmt;

/// Purity above which a qubit is reported as pure.
pub const PURE_THRESHOLD: f64 = 0.99;
/// Purity above which a non-pure qubit is reported as mixed rather than
/// highly mixed.
pub const MIXED_THRESHOLD: f64 = 0.5;

/// Coarse purity bucket used when presenting a qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StateClass {
    /// Purity > 0.99.
    Pure,
    /// 0.5 < purity <= 0.99.
    Mixed,
    /// Purity <= 0.5, i.e. at or near the centre of the Bloch ball.
    HighlyMixed,
}

impl StateClass {
    /// Buckets a purity value.
    pub fn from_purity(purity: f64) -> Self {
        if purity > PURE_THRESHOLD {
            StateClass::Pure
        } else if purity > MIXED_THRESHOLD {
            StateClass::Mixed
        } else {
            StateClass::HighlyMixed
        }
    }
}

impl fmt::Display for StateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateClass::Pure => write!(f, "Pure"),
            StateClass::Mixed => write!(f, "Mixed"),
            StateClass::HighlyMixed => write!(f, "Highly Mixed"),
        }
    }
}

/// Everything known about one qubit of an analyzed state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QubitAnalysis {
    /// Which qubit this row describes.
    pub qubit: QubitIndex,
    /// The qubit's 2×2 reduced density matrix.
    pub density_matrix: DensityMatrix,
    /// Bloch coordinate and purity of `density_matrix`.
    pub projection: BlochProjection,
    /// Purity bucket.
    pub class: StateClass,
}

impl QubitAnalysis {
    pub(crate) fn new(
        qubit: QubitIndex,
        density_matrix: DensityMatrix,
        projection: BlochProjection,
    ) -> Self {
        Self {
            qubit,
            class: StateClass::from_purity(projection.purity),
            density_matrix,
            projection,
        }
    }

    /// Shortcut for `projection.coordinate`.
    pub fn coordinate(&self) -> BlochCoordinate {
        self.projection.coordinate
    }

    /// Shortcut for `projection.purity`.
    pub fn purity(&self) -> f64 {
        self.projection.purity
    }
}

/// Result of running the reduction pipeline over one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateAnalysis {
    /// One row per qubit, in qubit-index order.
    qubits: Vec<QubitAnalysis>,
    /// Non-fatal findings about the input.
    warnings: Vec<NormalizationWarning>,
}

impl StateAnalysis {
    pub(crate) fn new(qubits: Vec<QubitAnalysis>, warnings: Vec<NormalizationWarning>) -> Self {
        Self { qubits, warnings }
    }

    /// Per-qubit rows in qubit-index order.
    pub fn qubits(&self) -> &[QubitAnalysis] {
        &self.qubits
    }

    /// Row for a single qubit, if present.
    pub fn qubit(&self, index: QubitIndex) -> Option<&QubitAnalysis> {
        self.qubits.get(index.0)
    }

    /// Number of qubits analyzed.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Normalization warnings raised for the input, empty if it was clean.
    pub fn warnings(&self) -> &[NormalizationWarning] {
        &self.warnings
    }

    /// Reduced density matrices in qubit-index order.
    pub fn reduced_states(&self) -> Vec<&DensityMatrix> {
        self.qubits.iter().map(|q| &q.density_matrix).collect()
    }
}

impl fmt::Display for StateAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "State Analysis:")?;
        for warning in &self.warnings {
            writeln!(f, "  {}", warning)?;
        }
        if self.qubits.is_empty() {
            return writeln!(f, "  No qubits to analyze.");
        }
        writeln!(
            f,
            "  {:<7} {:>8} {:>9} {:>9} {:>9}  {}",
            "Qubit", "Purity", "X", "Y", "Z", "State Type"
        )?;
        for row in &self.qubits {
            let point = row.coordinate();
            writeln!(
                f,
                "  {:<7} {:>8.4} {:>9.4} {:>9.4} {:>9.4}  {}",
                row.qubit.to_string(), row.purity(), point.x, point.y, point.z, row.class
            )?;
        }
        Ok(())
    }
}

/// Analysis of the state after one step of a circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionStep {
    /// Zero-based position in the sequence of states.
    pub step: usize,
    /// Caller-supplied label, typically the gate applied at this step.
    pub label: String,
    /// The pipeline's output for this step.
    pub analysis: StateAnalysis,
}
