// tests/pipeline_tests.rs

use qtrace::{
    build_density_matrix, check_normalization, compute_reduced_states, project_to_bloch,
    reduce_to_qubit, DensityMatrix, QtraceError, QubitIndex, StateVector,
};

use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

const TEST_TOLERANCE: f64 = 1e-9;

// Helper for building complex entries
fn c(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

/// Asserts that a 2×2 reduced matrix matches real-valued expected entries.
fn assert_reduced_matrix(actual: &DensityMatrix, expected: [[f64; 2]; 2], context: &str) {
    assert_eq!(actual.dim(), 2, "Reduced matrix must be 2x2 - {}", context);
    for (a, row) in expected.iter().enumerate() {
        for (b, &value) in row.iter().enumerate() {
            let diff = (actual.get(a, b) - c(value, 0.0)).norm();
            assert!(
                diff < TEST_TOLERANCE,
                "Matrix mismatch at [{},{}] - Actual: {}, Expected: {}, Context: {}",
                a, b, actual.get(a, b), value, context
            );
        }
    }
}

fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < TEST_TOLERANCE,
        "Actual: {}, Expected: {}, Context: {}",
        actual, expected, context
    );
}

#[test]
fn test_single_qubit_pure_states_lie_on_sphere() -> Result<(), QtraceError> {
    // A spread of (theta, phi) pairs covering poles, equator and generic points
    let angles = [(0.0, 0.0), (0.3, 1.1), (1.2, -2.0), (std::f64::consts::FRAC_PI_2, 0.7), (2.9, 3.0), (std::f64::consts::PI, 0.0)];
    for (theta, phi) in angles {
        let state = StateVector::new(vec![
            c((theta / 2.0_f64).cos(), 0.0),
            Complex::from_polar((theta / 2.0_f64).sin(), phi),
        ])?;
        let rho = &compute_reduced_states(&state)?[0];
        let projection = project_to_bloch(rho)?;
        let point = projection.coordinate;

        assert!((point.length() - 1.0).abs() < 1e-6, "Not on sphere for theta={}, phi={}", theta, phi);
        assert_close(projection.purity, 1.0, "pure single qubit");
        // Standard parametrization: (sinθ cosφ, sinθ sinφ, cosθ)
        assert_close(point.x, theta.sin() * phi.cos(), "x");
        assert_close(point.y, theta.sin() * phi.sin(), "y");
        assert_close(point.z, theta.cos(), "z");
    }
    Ok(())
}

#[test]
fn test_hadamard_on_zero_projects_to_plus_x() -> Result<(), QtraceError> {
    let plus = StateVector::from_real(&[FRAC_1_SQRT_2, FRAC_1_SQRT_2])?;
    let reduced = compute_reduced_states(&plus)?;
    assert_eq!(reduced.len(), 1);

    let projection = project_to_bloch(&reduced[0])?;
    assert_close(projection.coordinate.x, 1.0, "x of |+>");
    assert_close(projection.coordinate.y, 0.0, "y of |+>");
    assert_close(projection.coordinate.z, 0.0, "z of |+>");
    assert_close(projection.purity, 1.0, "purity of |+>");
    Ok(())
}

#[test]
fn test_bell_state_reductions_are_maximally_mixed() -> Result<(), QtraceError> {
    let bell = StateVector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2])?;
    let reduced = compute_reduced_states(&bell)?;
    assert_eq!(reduced.len(), 2);

    for (k, rho) in reduced.iter().enumerate() {
        let context = format!("Bell qubit {}", k);
        assert_reduced_matrix(rho, [[0.5, 0.0], [0.0, 0.5]], &context);
        let projection = project_to_bloch(rho)?;
        assert_close(projection.coordinate.length(), 0.0, &context);
        assert_close(projection.purity, 0.5, &context);
    }
    Ok(())
}

#[test]
fn test_ghz_state_reductions_are_maximally_mixed() -> Result<(), QtraceError> {
    let ghz = StateVector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, FRAC_1_SQRT_2])?;
    let reduced = compute_reduced_states(&ghz)?;
    assert_eq!(reduced.len(), 3);

    for (k, rho) in reduced.iter().enumerate() {
        let context = format!("GHZ qubit {}", k);
        assert_reduced_matrix(rho, [[0.5, 0.0], [0.0, 0.5]], &context);
        assert_close(project_to_bloch(rho)?.purity, 0.5, &context);
    }
    Ok(())
}

#[test]
fn test_asymmetric_entangled_state_pins_bit_order() -> Result<(), QtraceError> {
    // psi = |00>/sqrt(2) + |10>/2 + |11>/2, labels |q1 q0>
    // Grouping by q1 gives rho_q0 = [[3/4, 1/4], [1/4, 1/4]];
    // grouping by q0 gives rho_q1 = [[1/2, 1/(2 sqrt 2)], [1/(2 sqrt 2), 1/2]].
    let state = StateVector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.5, 0.5])?;
    let reduced = compute_reduced_states(&state)?;

    assert_reduced_matrix(&reduced[0], [[0.75, 0.25], [0.25, 0.25]], "qubit 0");
    let off_diagonal = FRAC_1_SQRT_2 / 2.0;
    assert_reduced_matrix(&reduced[1], [[0.5, off_diagonal], [off_diagonal, 0.5]], "qubit 1");

    let q0 = project_to_bloch(&reduced[0])?;
    assert_close(q0.coordinate.x, 0.5, "x of qubit 0");
    assert_close(q0.coordinate.z, 0.5, "z of qubit 0");
    assert_close(q0.purity, 0.75, "purity of qubit 0");

    let q1 = project_to_bloch(&reduced[1])?;
    assert_close(q1.coordinate.x, FRAC_1_SQRT_2, "x of qubit 1");
    assert_close(q1.coordinate.z, 0.0, "z of qubit 1");
    assert_close(q1.purity, 0.75, "purity of qubit 1");
    Ok(())
}

#[test]
fn test_complex_phases_survive_reduction() -> Result<(), QtraceError> {
    // q0 = (|0> + i|1>)/sqrt(2), q1 = |0>: amplitudes on |00> and |01>
    let state = StateVector::new(vec![c(FRAC_1_SQRT_2, 0.0), c(0.0, FRAC_1_SQRT_2), c(0.0, 0.0), c(0.0, 0.0)])?;
    let reduced = compute_reduced_states(&state)?;

    let q0 = project_to_bloch(&reduced[0])?;
    assert_close(q0.coordinate.y, 1.0, "y of |+i>");
    assert_close(q0.coordinate.x, 0.0, "x of |+i>");

    let q1 = project_to_bloch(&reduced[1])?;
    assert_close(q1.coordinate.z, 1.0, "z of spectator |0>");
    Ok(())
}

#[test]
fn test_projection_is_idempotent() -> Result<(), QtraceError> {
    let state = StateVector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.5, 0.5])?;
    let rho = &compute_reduced_states(&state)?[1];
    let first = project_to_bloch(rho)?;
    let second = project_to_bloch(rho)?;
    assert_eq!(first, second, "Projection should be a pure function of its input");
    Ok(())
}

#[test]
fn test_single_qubit_round_trip_is_identity() -> Result<(), QtraceError> {
    let state = StateVector::new(vec![c(0.6, 0.0), c(0.0, 0.8)])?;
    let rho = build_density_matrix(&state);
    let reduced = reduce_to_qubit(&rho, QubitIndex(0))?;
    assert_eq!(reduced, rho, "Nothing to trace out for n = 1");
    Ok(())
}

#[test]
fn test_reduced_states_have_unit_trace() -> Result<(), QtraceError> {
    // Uneven three-qubit superposition
    let norm = (1.0_f64 + 4.0 + 9.0 + 16.0).sqrt();
    let state = StateVector::new(vec![
        c(1.0 / norm, 0.0), c(0.0, 0.0), c(0.0, 2.0 / norm), c(0.0, 0.0),
        c(0.0, 0.0), c(-3.0 / norm, 0.0), c(0.0, 0.0), c(2.0 / norm, 2.0 * 3.0_f64.sqrt() / norm),
    ])?;
    for (k, rho) in compute_reduced_states(&state)?.iter().enumerate() {
        let context = format!("qubit {}", k);
        assert_close(rho.trace().re, 1.0, &context);
        assert_close(rho.trace().im, 0.0, &context);
        assert!(rho.is_hermitian(TEST_TOLERANCE), "Reduced matrix not Hermitian - {}", context);
        let purity = project_to_bloch(rho)?.purity;
        assert!((0.5 - TEST_TOLERANCE..=1.0).contains(&purity), "Purity {} out of range - {}", purity, context);
    }
    Ok(())
}

#[test]
fn test_non_power_of_two_length_is_rejected() {
    let result = StateVector::from_real(&[1.0, 0.0, 0.0]);
    assert!(matches!(result, Err(QtraceError::InvalidDimension { .. })));
}

#[test]
fn test_out_of_range_qubit_indices_are_rejected() -> Result<(), QtraceError> {
    let bell = StateVector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2])?;
    let rho = build_density_matrix(&bell);

    // Index n
    let past_end = reduce_to_qubit(&rho, QubitIndex(2));
    assert!(matches!(past_end, Err(QtraceError::InvalidDimension { .. })));

    // Index -1, as a front end holding signed indices would pass it
    let negative = QubitIndex::try_from(-1i64).and_then(|q| reduce_to_qubit(&rho, q));
    assert!(matches!(negative, Err(QtraceError::InvalidDimension { .. })));

    // Indices at or beyond the word width are range errors, never a shift overflow
    for k in [63, 64, usize::MAX] {
        let result = reduce_to_qubit(&rho, QubitIndex(k));
        assert!(matches!(result, Err(QtraceError::InvalidDimension { .. })), "Index {}", k);
    }
    Ok(())
}

#[test]
fn test_state_vector_from_amplitude_vec() -> Result<(), QtraceError> {
    let amplitudes = vec![c(FRAC_1_SQRT_2, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, FRAC_1_SQRT_2)];
    let state = StateVector::try_from(amplitudes.clone())?;
    assert_eq!(state.num_qubits(), 2);
    assert_eq!(state.amplitudes(), amplitudes.as_slice());

    let odd: Result<StateVector, _> = vec![c(1.0, 0.0); 6].try_into();
    assert!(matches!(odd, Err(QtraceError::InvalidDimension { .. })));
    Ok(())
}

#[test]
fn test_bell_state_basis_probabilities() -> Result<(), QtraceError> {
    let bell = StateVector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2])?;
    let probabilities = bell.probabilities();
    assert_eq!(probabilities.len(), 4);
    for (i, expected) in [0.5, 0.0, 0.0, 0.5].into_iter().enumerate() {
        assert_close(probabilities[i], expected, &bell.basis_label(i));
    }
    assert_close(probabilities.iter().sum(), 1.0, "probabilities sum to one");
    Ok(())
}

#[test]
fn test_unnormalized_state_is_still_reduced() -> Result<(), QtraceError> {
    // |0> + |1> without the 1/sqrt(2)
    let state = StateVector::from_real(&[1.0, 1.0])?;
    let warning = check_normalization(&state, None).expect("norm 2 is outside tolerance");
    assert_close(warning.norm_sqr, 2.0, "squared norm reported");

    let reduced = compute_reduced_states(&state)?;
    assert_eq!(reduced.len(), 1);
    // No renormalization: the trace carries the norm drift
    assert_close(reduced[0].trace().re, 2.0, "trace of unnormalized reduction");
    Ok(())
}

#[test]
fn test_non_hermitian_matrix_is_rejected_by_projector() {
    let rho = DensityMatrix::from_2x2([[c(1.0, 0.0), c(1.0, 0.0)], [c(0.0, 0.0), c(0.0, 0.0)]]);
    let result = project_to_bloch(&rho);
    assert!(matches!(result, Err(QtraceError::NonHermitian { .. })), "Got {:?}", result);
}

#[test]
fn test_caller_supplied_mixed_matrix() -> Result<(), QtraceError> {
    // Classical mixture 0.5|00><00| + 0.5|11><11|: same marginals as Bell
    let mut rows = vec![vec![c(0.0, 0.0); 4]; 4];
    rows[0][0] = c(0.5, 0.0);
    rows[3][3] = c(0.5, 0.0);
    let rho = DensityMatrix::from_rows(rows)?;
    for k in 0..2 {
        let reduced = reduce_to_qubit(&rho, QubitIndex(k))?;
        assert_reduced_matrix(&reduced, [[0.5, 0.0], [0.0, 0.5]], "classical mixture");
    }
    assert_close(rho.purity(), 0.5, "full-system purity of the mixture");
    Ok(())
}
