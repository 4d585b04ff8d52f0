//! Monte Carlo estimation of pi.

use tracing::debug;

use crate::error::TaskError;
use crate::rng::TaskRng;

/// Estimate pi by sampling points in the unit square.
///
/// Draws `(x, y)` uniform in `[0, 1)²` and counts points inside the unit
/// quarter-circle; the estimate is `4 * inside / samples`, always in
/// `[0, 4]`.
///
/// # Errors
///
/// Returns [`TaskError::DegenerateInput`] when `samples == 0`, where the
/// final ratio would divide by zero.
#[allow(clippy::cast_precision_loss)]
pub fn monte_carlo_pi(samples: u64, rng: &mut TaskRng) -> Result<f64, TaskError> {
    if samples == 0 {
        return Err(TaskError::DegenerateInput(
            "monte carlo requires at least one sample".into(),
        ));
    }
    debug!(samples, "starting monte carlo sampling");

    let mut inside = 0_u64;
    for _ in 0..samples {
        let x = rng.gen_uniform();
        let y = rng.gen_uniform();
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }

    Ok(4.0 * inside as f64 / samples as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_close_to_pi_for_large_samples() {
        let mut rng = TaskRng::from_seed(42);
        let estimate = monte_carlo_pi(1_000_000, &mut rng).unwrap();
        assert!((estimate - std::f64::consts::PI).abs() < 0.05);
    }

    #[test]
    fn estimate_always_within_geometric_bounds() {
        for seed in 0..20 {
            let mut rng = TaskRng::from_seed(seed);
            let estimate = monte_carlo_pi(100, &mut rng).unwrap();
            assert!((0.0..=4.0).contains(&estimate));
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut rng1 = TaskRng::from_seed(9);
        let mut rng2 = TaskRng::from_seed(9);
        let e1 = monte_carlo_pi(10_000, &mut rng1).unwrap();
        let e2 = monte_carlo_pi(10_000, &mut rng2).unwrap();
        assert!((e1 - e2).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_zero_samples() {
        let mut rng = TaskRng::from_seed(0);
        let result = monte_carlo_pi(0, &mut rng);
        assert!(matches!(result, Err(TaskError::DegenerateInput(_))));
    }

    #[test]
    fn single_sample_is_zero_or_four() {
        let mut rng = TaskRng::from_seed(5);
        let estimate = monte_carlo_pi(1, &mut rng).unwrap();
        assert!(
            (estimate - 0.0).abs() < f64::EPSILON || (estimate - 4.0).abs() < f64::EPSILON
        );
    }
}
