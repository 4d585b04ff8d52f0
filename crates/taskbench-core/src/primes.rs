//! Primality counting by trial division.

/// Test whether `n` is prime by trial division up to `floor(sqrt(n))`.
///
/// Anything at or below 1 (including all negatives) is not prime. The square
/// root is computed in floating point and truncated by the loop bound, which
/// is exact for every `n` a benchmark run can reach.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let limit = (n as f64).sqrt() as i64;
    for i in 2..=limit {
        if n % i == 0 {
            return false;
        }
    }
    true
}

/// Count the primes in the inclusive range `[start, end]`.
///
/// An inverted range (`start > end`) is empty and yields 0; no validation
/// is performed.
#[must_use]
pub fn count_primes(start: i64, end: i64) -> u64 {
    (start..=end).filter(|&n| is_prime(n)).count() as u64
}
