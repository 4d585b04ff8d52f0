//! Injectable pseudo-random source for the stochastic kernels.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random number generator handed to the matrix and Monte Carlo kernels.
///
/// The dispatcher constructs a fresh instance per kernel invocation so that
/// kernels never share generator state. `from_entropy` gives the production
/// non-deterministic behavior; `from_seed` gives reproducible sequences for
/// tests and `--seed` runs.
pub struct TaskRng {
    inner: StdRng,
}

impl TaskRng {
    /// Create a generator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed. The same seed always produces
    /// the same sequence.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Sample a uniform value from `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
