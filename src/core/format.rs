//! Human-readable rendering of complex amplitudes and small matrices.

use num_complex::Complex;

/// Components smaller than this are dropped when formatting.
const DISPLAY_ZERO_TOLERANCE: f64 = 1e-10;

/// Formats a complex number for display.
///
/// Purely real values print as `0.707`, purely imaginary ones as `0.707i`,
/// anything else as `0.500 + 0.500i`.
pub fn format_complex(value: Complex<f64>, precision: usize) -> String {
    if value.im.abs() < DISPLAY_ZERO_TOLERANCE {
        format!("{:.*}", precision, value.re)
    } else if value.re.abs() < DISPLAY_ZERO_TOLERANCE {
        format!("{:.*}i", precision, value.im)
    } else {
        format!("{:.*} + {:.*}i", precision, value.re, precision, value.im)
    }
}

/// Formats a square matrix given in row-major order as nested brackets,
/// one row per line.
pub(crate) fn format_rows(entries: &[Complex<f64>], dim: usize, precision: usize) -> String {
    let mut out = String::from("[");
    for row in 0..dim {
        if row > 0 {
            out.push_str(",\n ");
        }
        out.push('[');
        for col in 0..dim {
            if col > 0 {
                out.push_str(", ");
            }
            out.push_str(&format_complex(entries[row * dim + col], precision));
        }
        out.push(']');
    }
    out.push(']');
    out
}
