//! Property-based tests for the benchmark kernels.

use proptest::prelude::*;

use taskbench_core::observer::NoOpObserver;
use taskbench_core::rng::TaskRng;
use taskbench_core::{approximate_pi, count_primes, fib, is_prime, matrix_trace, monte_carlo_pi};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Counting a single-element range agrees with the primality test.
    #[test]
    fn count_agrees_with_is_prime(n in -1000i64..10_000) {
        let count = count_primes(n, n);
        prop_assert_eq!(count, u64::from(is_prime(n)));
    }

    /// Counting is additive over a split of the range.
    #[test]
    fn count_is_additive(start in 0i64..5000, len in 0i64..200, split in 0i64..200) {
        let end = start + len;
        let mid = start + split.min(len);
        let whole = count_primes(start, end);
        let left = count_primes(start, mid);
        let right = count_primes(mid + 1, end);
        prop_assert_eq!(whole, left + right);
    }

    /// F(n) + F(n+1) == F(n+2) wherever naive recursion is fast enough.
    #[test]
    fn fibonacci_addition_property(n in 0u64..20) {
        let f_n = fib(n).unwrap();
        let f_n1 = fib(n + 1).unwrap();
        let f_n2 = fib(n + 2).unwrap();
        prop_assert_eq!(f_n + f_n1, f_n2);
    }

    /// The series estimate stays within the alternating-series error bound.
    #[test]
    fn series_within_leibniz_bound(iterations in 10u64..5000) {
        let observer = NoOpObserver::new();
        let estimate = approximate_pi(iterations, &observer).unwrap();
        let bound = 4.0 / (2.0 * iterations as f64 + 1.0);
        prop_assert!((estimate - std::f64::consts::PI).abs() <= bound);
    }

    /// With entries in [0, 1), the trace of the product is in [0, size^2).
    #[test]
    fn matrix_trace_bounded(seed in any::<u64>(), size in 0usize..12) {
        let mut rng = TaskRng::from_seed(seed);
        let trace = matrix_trace(size, &mut rng);
        prop_assert!(trace >= 0.0);
        prop_assert!(trace <= (size * size) as f64);
    }

    /// The Monte Carlo estimate is always a multiple of 4/samples in [0, 4].
    #[test]
    fn monte_carlo_in_range(seed in any::<u64>(), samples in 1u64..2000) {
        let mut rng = TaskRng::from_seed(seed);
        let estimate = monte_carlo_pi(samples, &mut rng).unwrap();
        prop_assert!((0.0..=4.0).contains(&estimate));
    }
}
