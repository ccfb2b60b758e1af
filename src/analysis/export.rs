// src/analysis/export.rs
use super::results::{QubitAnalysis, StateAnalysis};
use crate::bloch::BlochCoordinate;
use crate::core::{DensityMatrix, NormalizationWarning, QtraceError};
use crate::core::format::format_rows;
use serde::Serialize;

/// Local-time layout of `ExportMetadata::export_time`, e.g. `20240131_174502`.
pub const EXPORT_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Identifies what produced an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportMetadata {
    /// Local time the package was built, in [`EXPORT_TIME_FORMAT`].
    pub export_time: String,
    /// Version of this crate.
    pub qtrace_version: String,
    /// Kind of export, currently always `"comprehensive"`.
    pub export_type: String,
}

/// Flattened per-qubit record in an export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QubitRecord {
    /// Qubit position.
    pub qubit_index: usize,
    /// `Tr(ρ²)`.
    pub purity: f64,
    /// Bloch coordinate.
    pub bloch_coordinates: BlochCoordinate,
    /// Purity bucket, as displayed.
    pub state_type: String,
    /// Reduced density matrix as rows of `[re, im]` pairs.
    pub density_matrix: Vec<Vec<num_complex::Complex<f64>>>,
}

impl From<&QubitAnalysis> for QubitRecord {
    fn from(row: &QubitAnalysis) -> Self {
        Self {
            qubit_index: row.qubit.0,
            purity: row.purity(),
            bloch_coordinates: row.coordinate(),
            state_type: row.class.to_string(),
            density_matrix: row.density_matrix.to_rows(),
        }
    }
}

/// Structured record of an analysis for handing to an export front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportPackage {
    /// Producer information.
    pub metadata: ExportMetadata,
    /// One record per qubit, in qubit-index order.
    pub qubit_analysis: Vec<QubitRecord>,
    /// Normalization warnings raised for the input.
    pub warnings: Vec<NormalizationWarning>,
}

/// One line of the flat qubit table; fixed-point values as displayed.
#[derive(Debug, Serialize)]
struct QubitTableRow {
    #[serde(rename = "Qubit")]
    qubit: usize,
    #[serde(rename = "Purity")]
    purity: String,
    #[serde(rename = "X Coordinate")]
    x: String,
    #[serde(rename = "Y Coordinate")]
    y: String,
    #[serde(rename = "Z Coordinate")]
    z: String,
    #[serde(rename = "State Type")]
    state_type: String,
}

fn fixed4(value: f64) -> String {
    // Keep rounding noise around zero from printing as "-0.0000"
    let value = if value.abs() < 1e-10 { 0.0 } else { value };
    format!("{:.4}", value)
}

impl From<&QubitAnalysis> for QubitTableRow {
    fn from(row: &QubitAnalysis) -> Self {
        let point = row.coordinate();
        Self {
            qubit: row.qubit.0,
            purity: fixed4(row.purity()),
            x: fixed4(point.x),
            y: fixed4(point.y),
            z: fixed4(point.z),
            state_type: row.class.to_string(),
        }
    }
}

impl ExportPackage {
    /// Serializes the package as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, QtraceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl StateAnalysis {
    /// Packages this analysis for export.
    pub fn export_package(&self) -> ExportPackage {
        ExportPackage {
            metadata: ExportMetadata {
                export_time: chrono::Local::now().format(EXPORT_TIME_FORMAT).to_string(),
                qtrace_version: env!("CARGO_PKG_VERSION").to_string(),
                export_type: "comprehensive".to_string(),
            },
            qubit_analysis: self.qubits().iter().map(QubitRecord::from).collect(),
            warnings: self.warnings().to_vec(),
        }
    }

    /// Renders the per-qubit table as CSV with the columns
    /// `Qubit, Purity, X Coordinate, Y Coordinate, Z Coordinate, State Type`,
    /// values to four decimals. An analysis with no qubits yields an empty
    /// string.
    ///
    /// # Errors
    /// `QtraceError::Serialization` if the CSV writer fails.
    pub fn to_csv(&self) -> Result<String, QtraceError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        for row in self.qubits() {
            writer.serialize(QubitTableRow::from(row))?;
        }
        let bytes = writer.into_inner().map_err(|e| QtraceError::Serialization {
            message: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| QtraceError::Serialization { message: e.to_string() })
    }
}

/// Formats a single-qubit density matrix for display.
///
/// # Errors
/// `QtraceError::InvalidDimension` unless `rho` is 2×2.
pub fn format_density_matrix(rho: &DensityMatrix, precision: usize) -> Result<String, QtraceError> {
    rho.as_2x2()?;
    Ok(format_rows(rho.entries(), rho.dim(), precision))
}
