//! Example walking a Bell-pair preparation step by step and printing the
//! reduced state of each qubit after every gate.

use qtrace::{QtraceError, StateAnalyzer, StateVector};
use std::f64::consts::FRAC_1_SQRT_2;

fn main() -> Result<(), QtraceError> {
    println!("--- qtrace Example: Bell State (|00> + |11>)/sqrt(2) ---");

    // States after each gate of H(q0); CX(q0, q1), as an upstream simulator
    // would hand them over. Amplitude order is |q1 q0>.
    let initial = StateVector::from_real(&[1.0, 0.0, 0.0, 0.0])?;
    let after_h = StateVector::from_real(&[FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0])?;
    let after_cx = StateVector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2])?;

    println!("\nFinal state:\n{}", after_cx);

    let analyzer = StateAnalyzer::new();
    let steps = analyzer.analyze_evolution([
        ("init", &initial),
        ("h q0", &after_h),
        ("cx q0,q1", &after_cx),
    ])?;

    for step in &steps {
        println!("\nStep {} ({}):", step.step, step.label);
        print!("{}", step.analysis);
    }

    // Both qubits end at the centre of the Bloch ball
    if let Some(last) = steps.last() {
        for row in last.analysis.qubits() {
            println!("\n{} reduced density matrix:\n{}", row.qubit, row.density_matrix);
        }
        println!("\nExport:\n{}", last.analysis.export_package().to_json_pretty()?);
    }
    Ok(())
}
