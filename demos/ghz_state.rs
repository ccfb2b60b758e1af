//! Example: every qubit of a three-qubit GHZ state is maximally mixed on its
//! own, even though the whole register is pure.

use qtrace::{compute_reduced_states, project_to_bloch, build_density_matrix, QtraceError, StateVector};
use std::f64::consts::FRAC_1_SQRT_2;

fn main() -> Result<(), QtraceError> {
    println!("--- qtrace Example: GHZ State (|000> + |111>)/sqrt(2) ---");

    let mut amplitudes = [0.0; 8];
    amplitudes[0b000] = FRAC_1_SQRT_2;
    amplitudes[0b111] = FRAC_1_SQRT_2;
    let ghz = StateVector::from_real(&amplitudes)?;
    println!("{}", ghz);

    let full = build_density_matrix(&ghz);
    println!("\nFull-register purity: {:.4}", full.purity());

    for (k, rho) in compute_reduced_states(&ghz)?.iter().enumerate() {
        let projection = project_to_bloch(rho)?;
        println!(
            "q[{}]: Bloch {} purity {:.4}\n{}",
            k, projection.coordinate, projection.purity, rho
        );
    }
    Ok(())
}
