//! Dense random matrix multiplication reduced to a trace.

use tracing::debug;

use crate::rng::TaskRng;

/// Multiply two random `size × size` matrices and return the trace of the
/// product.
///
/// Both matrices are filled cell-by-cell with independent uniform draws from
/// `[0, 1)` (A fully, then B), multiplied with the standard triple nested
/// loop, and reduced to `Σ C[i][i]`. `size == 0` yields empty matrices and a
/// trace of 0. Accumulation is plain `f64`; no stability handling is needed
/// at benchmark scale.
#[must_use]
pub fn matrix_trace(size: usize, rng: &mut TaskRng) -> f64 {
    let a = random_matrix(size, rng);
    let b = random_matrix(size, rng);
    debug!(size, "multiplying matrices");

    // Row-major C = A * B.
    let mut c = vec![0.0_f64; size * size];
    for i in 0..size {
        for j in 0..size {
            let mut acc = 0.0;
            for k in 0..size {
                acc += a[i * size + k] * b[k * size + j];
            }
            c[i * size + j] = acc;
        }
    }

    (0..size).map(|i| c[i * size + i]).sum()
}

/// Allocate a row-major `size × size` matrix of uniform `[0, 1)` draws.
fn random_matrix(size: usize, rng: &mut TaskRng) -> Vec<f64> {
    (0..size * size).map(|_| rng.gen_uniform()).collect()
}
