//! # RandomNumberGenerator
//!
//! Every stochastic decision of a run (selection draws, crossover and mutation coin flips,
//! tie breaks, initial solutions) is drawn from one `RandomNumberGenerator`, passed down by
//! mutable reference. A fixed seed therefore yields a fixed sequence of decisions.
//!
//! ## Example
//!
//! ```rust
//! use paretoga::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.gen_index(100), b.gen_index(100));
//! assert_eq!(a.fetch_uniform(0.0, 1.0, 3), b.fetch_uniform(0.0, 1.0, 3));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly distributed index in `0..upper`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero. Callers check for empty populations first.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Returns a uniformly distributed value in `[0, 1)`.
    pub fn gen_probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns a uniformly distributed value in `[from, to)`, or `from` when the range is empty.
    pub fn gen_range(&mut self, from: f64, to: f64) -> f64 {
        if from < to {
            self.rng.gen_range(from..to)
        } else {
            from
        }
    }

    /// Returns `true` with the given probability.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.gen_probability() < probability
    }

    /// Generates a specified number of random floating-point numbers within the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.gen_range(from, to)));
        uniform_numbers
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
